//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{init::InitArgs, list::ListArgs, report::ReportArgs};

#[derive(Parser)]
#[command(name = "cursus")]
#[command(author, version, about = "Cursus Curriculum Grade Toolkit")]
#[command(
    long_about = "A toolkit for computing weighted academic averages and credit awards from curriculum CSV files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample curriculum CSV and the default plan
    Init(InitArgs),

    /// List the elements of a curriculum file
    List(ListArgs),

    /// Compute averages and credits and print the full report
    Report(ReportArgs),
}
