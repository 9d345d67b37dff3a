//! `cursus init` command - Write the sample curriculum and default plan

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::core::plan::CurriculumPlan;

/// Sample GSI semester-1 curriculum data
const SAMPLE_CSV: &str = "\
type,code,title,coef,credit,hours_lecture,hours_td,hours_tp,teaching_mode,continous_percent,exam_percent
module,F111,Réseaux des couches basses,3,6,1.5,1.5,1.5,In-person,40,60
module,F112,Algorithmique Avancée et Complexité,2,4,1.5,1.5,0,In-person,40,60
module,F121,Système d'exploitation,2,4,1.5,1.5,0,In-person,40,60
module,F122,Architectures Modernes des Systèmes Informatiques,2,4,1.5,1.5,0,In-person,40,60
module,M111,Architecture et administration des bases de données,2,4,1.5,1.5,0,In-person,40,60
module,M112,Méthodes et Technologies d'Implémentation,3,5,1.5,0,1.5,In-person,40,60
module,D111,Systèmes de Communication Vocaux et Vidéos,2,2,1.5,1.5,0,In-person,40,60
module,T111,Cloud Computing,1,1,1.5,0,0,In-person,100,0
unit,UEF11,UE Fondamentales 1,0,0,0,0,0,In-person,0,0
unit,UEF12,UE Fondamentales 2,0,0,0,0,0,In-person,0,0
unit,UEM11,UE Méthodologie,0,0,0,0,0,In-person,0,0
unit,UED11,UE Découverte,0,0,0,0,0,In-person,0,0
unit,UET11,UE Transversale,0,0,0,0,0,In-person,0,0
semester,S1,Semester 1,0,0,0,0,0,In-person,0,0
";

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to write the sample files into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    if !args.path.exists() {
        std::fs::create_dir_all(&args.path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(args.path.display()).cyan()
        );
    }

    let csv_path = args.path.join("gsi_curriculum.csv");
    let plan_path = args.path.join("plan.yaml");

    for path in [&csv_path, &plan_path] {
        if path.exists() && !args.force {
            return Err(miette::miette!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            ));
        }
    }

    std::fs::write(&csv_path, SAMPLE_CSV).into_diagnostic()?;
    println!(
        "{} Sample curriculum written to {}",
        style("✓").green(),
        style(csv_path.display()).cyan()
    );

    let plan_yaml = CurriculumPlan::default()
        .to_yaml()
        .map_err(|e| miette::miette!("{}", e))?;
    std::fs::write(&plan_path, plan_yaml).into_diagnostic()?;
    println!(
        "{} Default curriculum plan written to {}",
        style("✓").green(),
        style(plan_path.display()).cyan()
    );

    println!();
    println!("Next steps:");
    println!(
        "  {} List the loaded elements",
        style("cursus list gsi_curriculum.csv").yellow()
    );
    println!(
        "  {} Compute averages and credits",
        style("cursus report gsi_curriculum.csv").yellow()
    );
    Ok(())
}
