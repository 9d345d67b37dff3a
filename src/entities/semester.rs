//! Semester entity type - an ordered group of units

use serde::{Deserialize, Serialize};

use crate::core::element::{AcademicElement, ElementInfo};
use crate::entities::unit::Unit;

/// An academic semester aggregating units by coefficient-weighted average
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    /// Identity (code + title)
    #[serde(flatten)]
    pub info: ElementInfo,

    /// Semester weight (unused by the single-semester report, kept for
    /// symmetry with units)
    #[serde(default = "default_coef")]
    pub coef: f64,

    /// Member units in insertion order
    #[serde(default)]
    units: Vec<Unit>,
}

fn default_coef() -> f64 {
    1.0
}

impl AcademicElement for Semester {
    fn info(&self) -> &ElementInfo {
        &self.info
    }
}

impl Semester {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            info: ElementInfo::new(code, title),
            coef: default_coef(),
            units: Vec::new(),
        }
    }

    /// Append a unit to the semester
    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Coefficient-weighted mean of member unit averages.
    ///
    /// Returns 0 for an empty semester or when unit coefficients sum to 0.
    pub fn average(&self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let coef_sum: f64 = self.units.iter().map(|u| u.coef).sum();
        if coef_sum == 0.0 {
            return 0.0;
        }
        let total: f64 = self.units.iter().map(|u| u.average() * u.coef).sum();
        total / coef_sum
    }

    /// Sum of member unit credits
    pub fn credits(&self) -> u32 {
        self.units.iter().map(|u| u.credits()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::module::Module;

    fn unit_with_average(code: &str, coef: f64, grade: f64) -> Unit {
        let mut module = Module::new("M", "M");
        module.credit = 4;
        module.hours_tp = 1.5;
        module.set_grade(Some(grade), None, Some(grade));
        let mut unit = Unit::new(code, code);
        unit.coef = coef;
        unit.add_module(module);
        unit
    }

    #[test]
    fn test_empty_semester_is_zero() {
        let semester = Semester::new("S1", "Semester 1");
        assert_eq!(semester.average(), 0.0);
        assert_eq!(semester.credits(), 0);
    }

    #[test]
    fn test_semester_weighted_average() {
        let mut semester = Semester::new("S1", "Semester 1");
        semester.add_unit(unit_with_average("UA", 2.0, 12.0));
        semester.add_unit(unit_with_average("UB", 3.0, 14.0));
        assert!((semester.average() - 13.2).abs() < 1e-9);
    }

    #[test]
    fn test_semester_zero_coef_guard() {
        let mut semester = Semester::new("S1", "Semester 1");
        semester.add_unit(unit_with_average("UA", 0.0, 12.0));
        assert_eq!(semester.average(), 0.0);
    }

    #[test]
    fn test_semester_credits_sum_units() {
        let mut semester = Semester::new("S1", "Semester 1");
        semester.add_unit(unit_with_average("UA", 1.0, 12.0));
        semester.add_unit(unit_with_average("UB", 1.0, 15.0));
        assert_eq!(semester.credits(), 8);
    }
}
