use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use mindease_core::schema::{Category, QuestionKind, QUESTIONS_PER_CATEGORY};
use mindease_core::{Answer, AssessmentWizard, Config, InsightClient, WizardState};

use super::insight::print_recommendations;

#[derive(Args)]
pub struct AssessArgs {
    /// Write the answer sheet as JSON when the session ends
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Resume from a previously exported answer sheet
    #[arg(long)]
    pub resume: Option<PathBuf>,
    /// Submit for insights once all four categories are complete
    #[arg(long)]
    pub submit: bool,
}

pub fn run(args: AssessArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = match &args.resume {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            AssessmentWizard::with_sheet(serde_json::from_str(&content)?)
        }
        None => AssessmentWizard::new(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match wizard.state() {
            WizardState::CategoryList => {
                print_category_list(&wizard);
                print!("category key ('done' to finish): ");
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "done" {
                    break;
                }
                match line.parse::<Category>() {
                    Ok(category) => wizard.select_category(category)?,
                    Err(e) => eprintln!("{e}"),
                }
            }
            WizardState::Questions { category, index } => {
                let question = wizard.current_question()?;
                println!(
                    "\n[{} {}/{}] ({}) {}",
                    category.key(),
                    index + 1,
                    QUESTIONS_PER_CATEGORY,
                    question.section,
                    question.question.text
                );
                match question.question.kind {
                    QuestionKind::Boolean => print!("y/n (p=back, b=categories): "),
                    QuestionKind::Scale => {
                        print!("1-10 [{}] (p=back, b=categories): ", wizard.scale_cursor())
                    }
                }
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    break;
                };
                handle_question_input(&mut wizard, line.trim());
            }
            WizardState::Summary { category } => {
                // next() at the last question caches the score.
                if let Some(score) = wizard.cached_score(category) {
                    println!(
                        "\n{} complete: {} points, {}%",
                        category.title(),
                        score.raw,
                        score.percentage
                    );
                }
                wizard.return_to_categories()?;
            }
        }
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(wizard.sheet())?;
        std::fs::write(path, json)?;
        println!("answer sheet written to {}", path.display());
    }

    if args.submit {
        if !wizard.all_complete() {
            eprintln!("assessment incomplete; insights need all four categories");
            return Ok(());
        }
        let features = wizard.feature_vector()?;
        let config = Config::load_or_default();
        let client = InsightClient::new(&config.insight)?;
        let runtime = tokio::runtime::Runtime::new()?;
        match runtime.block_on(client.fetch_recommendations(&features)) {
            Ok(recommendations) => print_recommendations(&recommendations),
            Err(_) => println!("no insights available right now, try again later"),
        }
    }

    Ok(())
}

fn print_category_list(wizard: &AssessmentWizard) {
    println!();
    for category in Category::ALL {
        let answered = wizard.sheet().answered_count(category);
        let status = match wizard.cached_score(category) {
            Some(score) => format!("{}%", score.percentage),
            None => format!("{answered}/{QUESTIONS_PER_CATEGORY}"),
        };
        println!("  {:<10} {:<26} {status}", category.key(), category.title());
    }
}

fn handle_question_input(wizard: &mut AssessmentWizard, input: &str) {
    match input {
        "p" => {
            if wizard.previous().is_err() {
                eprintln!("already at the first question");
            }
            return;
        }
        "b" => {
            // Abandoning mid-sequence keeps whatever was answered.
            let _ = wizard.return_to_categories();
            return;
        }
        _ => {}
    }

    let Ok(question) = wizard.current_question() else {
        return;
    };
    let answer = match question.question.kind {
        QuestionKind::Boolean => match input {
            "y" | "yes" => Some(Answer::Bool(true)),
            "n" | "no" => Some(Answer::Bool(false)),
            _ => None,
        },
        QuestionKind::Scale => {
            if input.is_empty() {
                // Empty input accepts the slider where it stands.
                Some(Answer::Scale(wizard.scale_cursor()))
            } else {
                input.parse::<u8>().ok().map(Answer::Scale)
            }
        }
    };

    let Some(answer) = answer else {
        eprintln!("unrecognized input");
        return;
    };
    if let Err(e) = wizard.answer(answer) {
        eprintln!("{e}");
        return;
    }
    if let Err(e) = wizard.next() {
        eprintln!("{e}");
    }
}
