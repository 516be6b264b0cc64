use std::path::PathBuf;

use clap::Args;
use mindease_core::schema::{Category, QUESTIONS_PER_CATEGORY};
use mindease_core::score::{self, category_max_score};
use mindease_core::AnswerSheet;

#[derive(Args)]
pub struct ScoreArgs {
    /// Exported answer sheet (JSON)
    pub file: PathBuf,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.file)?;
    let sheet: AnswerSheet = serde_json::from_str(&content)?;

    for category in Category::ALL {
        let answered = sheet.answered_count(category);
        let score = score::category_score(&sheet, category);
        let marker = if sheet.is_category_complete(category) {
            "complete"
        } else {
            "partial"
        };
        println!(
            "{:<10} {answered}/{QUESTIONS_PER_CATEGORY} answered  {}/{} points  {}%  ({marker})",
            category.key(),
            score.raw,
            category_max_score(category),
            score.percentage
        );
    }

    if sheet.all_complete() {
        println!("\nall categories complete");
    }
    Ok(())
}
