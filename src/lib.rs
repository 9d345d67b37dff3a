//! Cursus: curriculum grade toolkit
//!
//! A CLI for loading a curriculum description from CSV and computing
//! weighted academic averages and credit awards across the
//! module → unit → semester hierarchy.

pub mod cli;
pub mod core;
pub mod entities;
