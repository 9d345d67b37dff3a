//! Unit entity type - an ordered group of modules

use serde::{Deserialize, Serialize};

use crate::core::element::{AcademicElement, ElementInfo};
use crate::entities::module::Module;

/// A teaching unit aggregating modules by coefficient-weighted average
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Identity (code + title)
    #[serde(flatten)]
    pub info: ElementInfo,

    /// Weight of this unit inside its semester
    #[serde(default = "default_coef")]
    pub coef: f64,

    /// Member modules in insertion order
    #[serde(default)]
    modules: Vec<Module>,
}

fn default_coef() -> f64 {
    1.0
}

impl AcademicElement for Unit {
    fn info(&self) -> &ElementInfo {
        &self.info
    }
}

impl Unit {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            info: ElementInfo::new(code, title),
            coef: default_coef(),
            modules: Vec::new(),
        }
    }

    /// Append a module to the unit
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Coefficient-weighted mean of member module averages.
    ///
    /// Returns 0 for an empty unit or when member coefficients sum to 0.
    pub fn average(&self) -> f64 {
        if self.modules.is_empty() {
            return 0.0;
        }
        let coef_sum: f64 = self.modules.iter().map(|m| m.coef).sum();
        if coef_sum == 0.0 {
            return 0.0;
        }
        let total: f64 = self.modules.iter().map(|m| m.average() * m.coef).sum();
        total / coef_sum
    }

    /// Sum of member module credits
    pub fn credits(&self) -> u32 {
        self.modules.iter().map(|m| m.credits()).sum()
    }
}
