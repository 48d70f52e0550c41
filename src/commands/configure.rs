use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::output::print_success;
use anyhow::Result;

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config),
        Some(ConfigCommands::Reset) => handle_reset_command(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Vistat Configuration");
    println!("==========================");

    println!("General:");
    println!("  Output dir: {}", config.general.output_dir.display());
    println!(
        "  Image size: {}x{}",
        config.general.image_width, config.general.image_height
    );
    println!("  Color: {}", config.general.color);

    println!("Datasets:");
    println!("  GDP URL: {}", config.datasets.gdp_url);
    if let Some(museum_file) = &config.datasets.museum_file {
        println!("  Museum file: {}", museum_file.display());
    }

    println!();
    println!("Config file: {}", Config::config_file_path().display());
    Ok(())
}

fn handle_reset_command() -> Result<()> {
    Config::default().save()?;
    print_success("Configuration reset to defaults");
    Ok(())
}
