//! Entity type definitions
//!
//! The curriculum is a strict ownership tree:
//! - [`Module`] - leaf holding grade inputs and evaluation weighting
//! - [`Unit`] - owns an ordered sequence of modules
//! - [`Semester`] - owns an ordered sequence of units

pub mod module;
pub mod semester;
pub mod unit;

pub use module::Module;
pub use semester::Semester;
pub use unit::Unit;
