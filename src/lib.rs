pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!(base_url = %config.provider.base_url, "Loaded provider config");

    let provider =
        providers::FreeCurrencyProvider::new(&config.provider.base_url, &config.provider.api_key);

    match command {
        AppCommand::Convert => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            cli::convert::run(stdin.lock(), stdout.lock(), &provider).await
        }
    }
}
