//! Shared identity for all academic elements

use serde::{Deserialize, Serialize};

/// Identity fields common to modules, units, and semesters.
///
/// Embedded by composition in each entity type; the `code` is the unique
/// key used by curriculum plans to reference elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Unique short code (e.g., "F111", "UEF11", "S1")
    pub code: String,

    /// Human-readable title
    pub title: String,
}

impl ElementInfo {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }
}

/// Common interface for all academic elements
pub trait AcademicElement {
    /// Get the element's identity record
    fn info(&self) -> &ElementInfo;

    /// Get the element's unique code
    fn code(&self) -> &str {
        &self.info().code
    }

    /// Get the element's title
    fn title(&self) -> &str {
        &self.info().title
    }
}

/// Element kind discriminator used by the CSV `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Module,
    Unit,
    Semester,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Module => write!(f, "module"),
            ElementKind::Unit => write!(f, "unit"),
            ElementKind::Semester => write!(f, "semester"),
        }
    }
}

impl std::str::FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" => Ok(ElementKind::Module),
            "unit" => Ok(ElementKind::Unit),
            "semester" => Ok(ElementKind::Semester),
            _ => Err(format!("Unknown element kind: {}", s)),
        }
    }
}
