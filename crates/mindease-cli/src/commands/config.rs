use clap::Subcommand;
use mindease_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the prediction service endpoint
    SetEndpoint {
        /// Endpoint URL (e.g. "http://localhost:5000/predict")
        url: String,
    },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetEndpoint { url } => {
            let mut config = Config::load()?;
            config.insight.endpoint = url;
            config.save()?;
            println!("ok");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
