//! Curriculum plan - externally supplied wiring and demo-grade tables
//!
//! The plan describes which modules belong to which units, which units make
//! up each semester, and the demonstration grade ranges. It is curriculum
//! data, not logic: the built-in default carries the GSI semester-1 plan,
//! and `--plan` accepts a YAML file for other curricula.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A unit and the module codes it must contain, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitGroup {
    pub unit: String,
    pub modules: Vec<String>,
}

/// A semester and the unit codes it must contain, in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterGroup {
    pub semester: String,
    pub units: Vec<String>,
}

/// Demonstration grade range for one module; the midpoint is assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRange {
    pub module: String,
    pub min: f64,
    pub max: f64,
}

impl GradeRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Wiring and grading tables for one curriculum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumPlan {
    pub units: Vec<UnitGroup>,
    pub semesters: Vec<SemesterGroup>,
    pub grade_ranges: Vec<GradeRange>,

    /// Informational credit target for the semester roll-up
    pub expected_credits: u32,
}

impl Default for CurriculumPlan {
    /// The GSI semester-1 curriculum
    fn default() -> Self {
        fn group(unit: &str, modules: &[&str]) -> UnitGroup {
            UnitGroup {
                unit: unit.to_string(),
                modules: modules.iter().map(|m| m.to_string()).collect(),
            }
        }
        fn range(module: &str, min: f64, max: f64) -> GradeRange {
            GradeRange {
                module: module.to_string(),
                min,
                max,
            }
        }

        Self {
            units: vec![
                group("UEF11", &["F111", "F112"]),
                group("UEF12", &["F121", "F122"]),
                group("UEM11", &["M111", "M112"]),
                group("UED11", &["D111"]),
                group("UET11", &["T111"]),
            ],
            semesters: vec![SemesterGroup {
                semester: "S1".to_string(),
                units: ["UEF11", "UEF12", "UEM11", "UED11", "UET11"]
                    .iter()
                    .map(|u| u.to_string())
                    .collect(),
            }],
            grade_ranges: vec![
                range("F111", 12.0, 14.0),
                range("F112", 14.0, 16.0),
                range("F121", 13.0, 15.0),
                range("F122", 11.0, 13.0),
                range("M111", 15.0, 17.0),
                range("M112", 16.0, 18.0),
                range("D111", 12.0, 14.0),
                range("T111", 14.0, 16.0),
            ],
            expected_credits: 27,
        }
    }
}

impl CurriculumPlan {
    /// Load a plan from a YAML file
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| PlanError::NotFound(path.display().to_string()))?;
        serde_yml::from_str(&contents).map_err(|e| PlanError::Parse(e.to_string()))
    }

    /// Serialize the plan to YAML
    pub fn to_yaml(&self) -> Result<String, PlanError> {
        serde_yml::to_string(self).map_err(|e| PlanError::Parse(e.to_string()))
    }
}

/// Errors that can occur while loading a curriculum plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan file not found: {0}")]
    NotFound(String),

    #[error("invalid plan file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_wires_gsi_semester_one() {
        let plan = CurriculumPlan::default();
        assert_eq!(plan.units.len(), 5);
        assert_eq!(plan.semesters.len(), 1);
        assert_eq!(plan.semesters[0].semester, "S1");
        assert_eq!(plan.semesters[0].units.len(), 5);
        assert_eq!(plan.grade_ranges.len(), 8);
        assert_eq!(plan.expected_credits, 27);
    }

    #[test]
    fn test_grade_range_midpoint() {
        let range = GradeRange {
            module: "F111".to_string(),
            min: 12.0,
            max: 14.0,
        };
        assert_eq!(range.midpoint(), 13.0);
    }

    #[test]
    fn test_plan_yaml_roundtrip() {
        let plan = CurriculumPlan::default();
        let yaml = plan.to_yaml().unwrap();
        let parsed: CurriculumPlan = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed.units.len(), plan.units.len());
        assert_eq!(parsed.expected_credits, plan.expected_credits);
    }

    #[test]
    fn test_partial_plan_fills_defaults() {
        let parsed: CurriculumPlan = serde_yml::from_str("semesters: []\n").unwrap();
        assert!(parsed.semesters.is_empty());
        // unspecified sections fall back to the built-in plan
        assert_eq!(parsed.expected_credits, 27);
        assert_eq!(parsed.units.len(), 5);
    }

    #[test]
    fn test_load_missing_plan_file() {
        let err = CurriculumPlan::load(Path::new("/nonexistent/plan.yaml")).unwrap_err();
        assert!(matches!(err, PlanError::NotFound(_)));
    }
}
