use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mindease-cli", version, about = "MindEase wellness self-assessment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Questionnaire inspection
    Schema {
        #[command(subcommand)]
        action: commands::schema::SchemaAction,
    },
    /// Run an interactive assessment
    Assess(commands::assess::AssessArgs),
    /// Score an exported answer sheet
    Score(commands::score::ScoreArgs),
    /// Submit a completed answer sheet for insights
    Insight(commands::insight::InsightArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schema { action } => commands::schema::run(action),
        Commands::Assess(args) => commands::assess::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Insight(args) => commands::insight::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
