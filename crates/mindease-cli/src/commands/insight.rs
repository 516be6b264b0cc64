use std::path::PathBuf;

use clap::Args;
use mindease_core::{AnswerSheet, AssessmentWizard, Config, InsightClient, Recommendation};

#[derive(Args)]
pub struct InsightArgs {
    /// Completed answer sheet (JSON)
    pub file: PathBuf,
}

pub fn run(args: InsightArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.file)?;
    let sheet: AnswerSheet = serde_json::from_str(&content)?;
    let wizard = AssessmentWizard::with_sheet(sheet);
    // Fails with AssessmentIncomplete unless all four categories are done.
    let features = wizard.feature_vector()?;

    let config = Config::load_or_default();
    let client = InsightClient::new(&config.insight)?;
    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(client.fetch_recommendations(&features)) {
        Ok(recommendations) => print_recommendations(&recommendations),
        Err(_) => println!("no insights available right now, try again later"),
    }
    Ok(())
}

pub(crate) fn print_recommendations(recommendations: &[Recommendation]) {
    for block in recommendations {
        println!("\n{} {}", block.icon, block.title);
        for suggestion in block.suggestions {
            println!("  - {suggestion}");
        }
    }
}
