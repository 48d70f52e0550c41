// Binary entry point - import modules directly
mod chart;
mod cli;
mod commands;
mod config;
mod data;
mod stats;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    if let Err(err) = cli.command.execute(config).await {
        if let Some(app_err) = err.downcast_ref::<utils::error::AppError>() {
            utils::error::report_error(app_err);
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}
