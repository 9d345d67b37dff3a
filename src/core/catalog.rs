//! Curriculum catalog - CSV loading, wiring, and grade assignment
//!
//! The catalog is a load-then-compute pipeline: `load` creates every element
//! from CSV rows, `apply_grades` fills in the plan's demonstration grades,
//! and `organize` moves modules into units and units into semesters
//! following the plan. Codes referenced by the plan but absent from the
//! loaded data are skipped, never an error.

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::core::element::{AcademicElement, ElementKind};
use crate::core::plan::CurriculumPlan;
use crate::core::report::SemesterReport;
use crate::entities::{Module, Semester, Unit};

/// Loaded curriculum elements, keyed by code, in CSV row order
#[derive(Debug, Default)]
pub struct Catalog {
    modules: Vec<Module>,
    units: Vec<Unit>,
    semesters: Vec<Semester>,
}

impl Catalog {
    /// Load all elements from a curriculum CSV file.
    ///
    /// Rows with an unknown `type` are silently skipped; missing or
    /// malformed fields fall back to their documented defaults. Unreadable
    /// records are skipped rather than failing the whole load.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::SourceNotFound(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| CatalogError::Read(e.to_string()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| CatalogError::Read(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut catalog = Catalog::default();

        for record in reader.records().flatten() {
            let row: HashMap<&str, &str> = headers
                .iter()
                .map(String::as_str)
                .zip(record.iter())
                .collect();

            let Ok(kind) = ElementKind::from_str(row.get("type").copied().unwrap_or("")) else {
                continue;
            };

            let code = row.get("code").copied().unwrap_or("").to_string();
            let title = row.get("title").copied().unwrap_or("").to_string();

            match kind {
                ElementKind::Module => {
                    let mut module = Module::new(code, title);
                    module.coef = f64_field(&row, "coef", 1.0);
                    module.credit = u32_field(&row, "credit", 1);
                    module.hours_lecture = f64_field(&row, "hours_lecture", 0.0);
                    module.hours_td = f64_field(&row, "hours_td", 0.0);
                    module.hours_tp = f64_field(&row, "hours_tp", 0.0);
                    if let Some(mode) = row.get("teaching_mode").filter(|m| !m.is_empty()) {
                        module.teaching_mode = mode.to_string();
                    }
                    // The historical CSV header misspells "continuous"; both
                    // spellings are accepted.
                    module.continuous_percent = match row.get("continous_percent") {
                        Some(v) => v.parse().unwrap_or(40.0),
                        None => f64_field(&row, "continuous_percent", 40.0),
                    };
                    module.exam_percent = f64_field(&row, "exam_percent", 60.0);
                    catalog.modules.push(module);
                }
                ElementKind::Unit => catalog.units.push(Unit::new(code, title)),
                ElementKind::Semester => catalog.semesters.push(Semester::new(code, title)),
            }
        }

        Ok(catalog)
    }

    /// Assign the plan's demonstration grades to the modules it lists.
    ///
    /// The midpoint of each range goes to the exam and to whichever
    /// continuous component (TP/TD) the module has hours for. Must run
    /// before [`Catalog::organize`] moves modules into their units.
    pub fn apply_grades(&mut self, plan: &CurriculumPlan) {
        for range in &plan.grade_ranges {
            let Some(module) = self.module_mut(&range.module) else {
                continue;
            };
            let grade = range.midpoint();
            let tp = (module.hours_tp > 0.0).then_some(grade);
            let td = (module.hours_td > 0.0).then_some(grade);
            module.set_grade(tp, td, Some(grade));
        }
    }

    /// Wire modules into units and units into semesters per the plan.
    ///
    /// Children move by value into their parents; every plan reference is
    /// existence-checked and skipped when the code was not loaded.
    pub fn organize(&mut self, plan: &CurriculumPlan) {
        for group in &plan.units {
            if self.unit(&group.unit).is_none() {
                continue;
            }
            let members: Vec<Module> = group
                .modules
                .iter()
                .filter_map(|code| self.take_module(code))
                .collect();
            if let Some(unit) = self.unit_mut(&group.unit) {
                for module in members {
                    unit.add_module(module);
                }
            }
        }

        for group in &plan.semesters {
            if self.semester(&group.semester).is_none() {
                continue;
            }
            let members: Vec<Unit> = group
                .units
                .iter()
                .filter_map(|code| self.take_unit(code))
                .collect();
            if let Some(semester) = self.semester_mut(&group.semester) {
                for unit in members {
                    semester.add_unit(unit);
                }
            }
        }
    }

    /// Build the structured report view for every organized semester
    pub fn report(&self, plan: &CurriculumPlan) -> Vec<SemesterReport> {
        self.semesters
            .iter()
            .map(|s| SemesterReport::of(s, plan.expected_credits))
            .collect()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn module(&self, code: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.code() == code)
    }

    pub fn unit(&self, code: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.code() == code)
    }

    pub fn semester(&self, code: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.code() == code)
    }

    fn module_mut(&mut self, code: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.code() == code)
    }

    fn unit_mut(&mut self, code: &str) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.code() == code)
    }

    fn semester_mut(&mut self, code: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.code() == code)
    }

    fn take_module(&mut self, code: &str) -> Option<Module> {
        let idx = self.modules.iter().position(|m| m.code() == code)?;
        Some(self.modules.remove(idx))
    }

    fn take_unit(&mut self, code: &str) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.code() == code)?;
        Some(self.units.remove(idx))
    }
}

fn f64_field(row: &HashMap<&str, &str>, field: &str, default: f64) -> f64 {
    row.get(field).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn u32_field(row: &HashMap<&str, &str>, field: &str, default: u32) -> u32 {
    row.get(field).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Errors that can occur while loading a curriculum catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("curriculum file not found: {0}")]
    SourceNotFound(String),

    #[error("failed to read curriculum file: {0}")]
    Read(String),
}
