//! `cursus list` command - Tabulate the elements of a curriculum file

use console::style;
use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::core::catalog::Catalog;
use crate::core::element::{AcademicElement, ElementKind};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Curriculum CSV file
    pub file: PathBuf,

    /// Only list elements of this kind
    #[arg(long, short = 'k', value_enum)]
    pub kind: Option<ElementKind>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = Catalog::load(&args.file).map_err(|e| miette::miette!("{}", e))?;

    let show = |kind: ElementKind| args.kind.is_none() || args.kind == Some(kind);

    if show(ElementKind::Module) && !catalog.modules().is_empty() {
        let mut builder = Builder::default();
        builder.push_record([
            "CODE", "TITLE", "COEF", "CREDIT", "LECTURE", "TD", "TP", "CONT%", "EXAM%",
        ]);
        for module in catalog.modules() {
            builder.push_record([
                module.code().to_string(),
                truncate_str(module.title(), 40),
                format!("{}", module.coef),
                module.credit.to_string(),
                format!("{}", module.hours_lecture),
                format!("{}", module.hours_td),
                format!("{}", module.hours_tp),
                format!("{}", module.continuous_percent),
                format!("{}", module.exam_percent),
            ]);
        }
        println!("{}", builder.build().with(Style::markdown()));
        println!();
    }

    if show(ElementKind::Unit) && !catalog.units().is_empty() {
        println!("{}", kind_table(catalog.units().iter().map(|u| (u.code(), u.title()))));
        println!();
    }

    if show(ElementKind::Semester) && !catalog.semesters().is_empty() {
        println!(
            "{}",
            kind_table(catalog.semesters().iter().map(|s| (s.code(), s.title())))
        );
        println!();
    }

    if !global.quiet {
        let total = catalog.modules().len() + catalog.units().len() + catalog.semesters().len();
        println!(
            "{} element(s) loaded from {}",
            style(total).cyan(),
            style(args.file.display()).cyan()
        );
    }
    Ok(())
}

fn kind_table<'a>(rows: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["CODE", "TITLE"]);
    for (code, title) in rows {
        builder.push_record([code.to_string(), truncate_str(title, 50)]);
    }
    builder.build().with(Style::markdown()).to_string()
}
