//! `cursus report` command - Full load → grade → organize → report pipeline

use console::style;
use miette::Result;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use super::write_output;
use crate::cli::helpers::{format_average, pass_label, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::catalog::Catalog;
use crate::core::plan::CurriculumPlan;
use crate::core::report::SemesterReport;

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Curriculum CSV file
    pub file: PathBuf,

    /// Curriculum plan YAML (default: built-in GSI semester-1 plan)
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Only print the student results summary
    #[arg(long)]
    pub summary: bool,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs, global: &GlobalOpts) -> Result<()> {
    let plan = match &args.plan {
        Some(path) => CurriculumPlan::load(path).map_err(|e| miette::miette!("{}", e))?,
        None => CurriculumPlan::default(),
    };

    let mut catalog = Catalog::load(&args.file).map_err(|e| miette::miette!("{}", e))?;
    catalog.apply_grades(&plan);
    catalog.organize(&plan);

    if !global.quiet {
        println!(
            "{} Loaded curriculum from {}",
            style("✓").green(),
            style(args.file.display()).cyan()
        );
    }

    let semesters = catalog.report(&plan);

    let mut output = String::new();
    if !args.summary {
        render_structure(&mut output, &semesters);
    }
    render_summary(&mut output, &semesters);

    write_output(&output, args.output)
}

fn render_structure(output: &mut String, semesters: &[SemesterReport]) {
    output.push_str("# Academic Structure\n");

    for semester in semesters {
        output.push_str(&format!("\n## {} ({})\n\n", semester.title, semester.code));
        output.push_str(&format!(
            "- **Average:** {}\n",
            format_average(semester.average)
        ));
        output.push_str(&format!(
            "- **Credits:** {}/{}\n",
            semester.credits, semester.expected_credits
        ));

        for unit in &semester.units {
            output.push_str(&format!("\n### {} ({})\n\n", unit.title, unit.code));
            output.push_str(&format!("- **Average:** {}\n", format_average(unit.average)));
            output.push_str(&format!("- **Credits:** {}\n\n", unit.credits));

            let mut builder = Builder::default();
            builder.push_record(["CODE", "MODULE", "AVERAGE", "CREDITS", "STATUS"]);
            for module in &unit.modules {
                builder.push_record([
                    module.code.clone(),
                    truncate_str(&module.title, 40),
                    format_average(module.average),
                    module.credits.to_string(),
                    pass_label(module.passed).to_string(),
                ]);
            }
            output.push_str(&builder.build().with(Style::markdown()).to_string());
            output.push('\n');
        }
    }
    output.push('\n');
}

fn render_summary(output: &mut String, semesters: &[SemesterReport]) {
    output.push_str("# Student Results Summary\n");

    for semester in semesters {
        output.push_str(&format!("\n## {}\n\n", semester.title));
        output.push_str(&format!(
            "- **Average:** {}\n",
            format_average(semester.average)
        ));
        output.push_str(&format!(
            "- **Credits Obtained:** {}/{}\n",
            semester.credits, semester.expected_credits
        ));
        output.push_str(&format!("- **Status:** {}\n", pass_label(semester.passed)));
        if semester.passed {
            output.push_str("- **Result:** Student has passed the semester\n");
        } else {
            output.push_str("- **Result:** Student must repeat the semester\n");
        }
        if !semester.credits_on_target {
            output.push_str(&format!(
                "\nNote: total credits differ from the expected {} for this semester.\n",
                semester.expected_credits
            ));
        }
    }
}
