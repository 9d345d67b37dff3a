//! Structured report view over the organized curriculum tree

use crate::core::element::AcademicElement;
use crate::entities::module::PASS_THRESHOLD;
use crate::entities::{Module, Semester, Unit};

/// Per-module report line
#[derive(Debug, Clone)]
pub struct ModuleLine {
    pub code: String,
    pub title: String,
    pub average: f64,
    pub credits: u32,
    pub passed: bool,
}

impl ModuleLine {
    pub fn of(module: &Module) -> Self {
        Self {
            code: module.code().to_string(),
            title: module.title().to_string(),
            average: module.average(),
            credits: module.credits(),
            passed: module.passed(),
        }
    }
}

/// Per-unit report with its module lines
#[derive(Debug, Clone)]
pub struct UnitReport {
    pub code: String,
    pub title: String,
    pub average: f64,
    pub credits: u32,
    pub modules: Vec<ModuleLine>,
}

impl UnitReport {
    pub fn of(unit: &Unit) -> Self {
        Self {
            code: unit.code().to_string(),
            title: unit.title().to_string(),
            average: unit.average(),
            credits: unit.credits(),
            modules: unit.modules().iter().map(ModuleLine::of).collect(),
        }
    }
}

/// Semester roll-up with its unit reports
#[derive(Debug, Clone)]
pub struct SemesterReport {
    pub code: String,
    pub title: String,
    pub average: f64,
    pub credits: u32,
    pub passed: bool,
    /// Informational credit target from the curriculum plan
    pub expected_credits: u32,
    pub credits_on_target: bool,
    pub units: Vec<UnitReport>,
}

impl SemesterReport {
    pub fn of(semester: &Semester, expected_credits: u32) -> Self {
        let average = semester.average();
        let credits = semester.credits();
        Self {
            code: semester.code().to_string(),
            title: semester.title().to_string(),
            average,
            credits,
            passed: average >= PASS_THRESHOLD,
            expected_credits,
            credits_on_target: credits == expected_credits,
            units: semester.units().iter().map(UnitReport::of).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_module(code: &str) -> Module {
        let mut module = Module::new(code, code);
        module.coef = 2.0;
        module.credit = 3;
        module.hours_tp = 1.5;
        module.set_grade(Some(14.0), None, Some(14.0));
        module
    }

    #[test]
    fn test_module_line_pass_status() {
        let line = ModuleLine::of(&passing_module("M1"));
        assert!(line.passed);
        assert_eq!(line.credits, 3);
        assert!((line.average - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_semester_rollup_flags_credit_target() {
        let mut unit = Unit::new("U1", "Unit 1");
        unit.add_module(passing_module("M1"));
        let mut semester = Semester::new("S1", "Semester 1");
        semester.add_unit(unit);

        let on_target = SemesterReport::of(&semester, 3);
        assert!(on_target.credits_on_target);
        assert!(on_target.passed);

        let off_target = SemesterReport::of(&semester, 27);
        assert_eq!(off_target.credits, 3);
        assert!(!off_target.credits_on_target);
    }
}
