//! Core module - fundamental types and utilities

pub mod catalog;
pub mod element;
pub mod plan;
pub mod report;

pub use catalog::{Catalog, CatalogError};
pub use element::{AcademicElement, ElementInfo, ElementKind};
pub use plan::{CurriculumPlan, GradeRange, PlanError, SemesterGroup, UnitGroup};
pub use report::{ModuleLine, SemesterReport, UnitReport};
