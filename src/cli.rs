use crate::commands::{clean, configure, gdp, museums};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vistat")]
#[command(about = "A Rust-based CLI for turning tabular datasets into static charts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Gdp(args) => {
                gdp::handle_gdp_command(config, &args).await?;
            }
            Commands::Museums(args) => {
                museums::handle_museums_command(config, &args).await?;
            }
            Commands::Clean(args) => {
                clean::handle_clean_command(config, &args).await?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the cross-country GDP bubble plot
    Gdp(GdpArgs),

    /// Render museum visitor charts (line, pie, bar)
    Museums(MuseumsArgs),

    /// Clip outliers in one CSV column and print the result
    Clean(CleanArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct GdpArgs {
    #[arg(short, long, help = "CSV file or URL (defaults to the configured GDP dataset)")]
    pub input: Option<String>,

    #[arg(short, long, help = "Output image file")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Plot the raw figures without clamping outliers")]
    pub keep_outliers: bool,
}

#[derive(Args)]
pub struct MuseumsArgs {
    #[arg(short, long, help = "CSV file or URL with a Date column and one column per museum")]
    pub input: Option<String>,

    #[arg(short = 'k', long, value_enum, help = "Which chart to render")]
    pub chart: Option<ChartKind>,

    #[arg(short, long, help = "Directory for the rendered charts")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct CleanArgs {
    #[arg(short, long, help = "CSV file or URL")]
    pub input: String,

    #[arg(short, long, help = "Name of the numeric column to clip")]
    pub column: String,

    #[arg(long, help = "Print the full result as JSON")]
    pub json: bool,

    #[arg(long, help = "Print the clipped values, one per line")]
    pub values: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
    All,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_gdp_with_defaults() {
        let cli = Cli::try_parse_from(["vistat", "gdp"]).unwrap();
        match cli.command {
            Commands::Gdp(args) => {
                assert!(args.input.is_none());
                assert!(!args.keep_outliers);
            }
            _ => panic!("expected gdp subcommand"),
        }
    }

    #[test]
    fn parses_museum_chart_kind() {
        let cli =
            Cli::try_parse_from(["vistat", "museums", "-i", "museum_visitors.csv", "-k", "all"])
                .unwrap();
        match cli.command {
            Commands::Museums(args) => {
                assert_eq!(args.input.as_deref(), Some("museum_visitors.csv"));
                assert_eq!(args.chart, Some(ChartKind::All));
            }
            _ => panic!("expected museums subcommand"),
        }
    }

    #[test]
    fn clean_requires_input_and_column() {
        assert!(Cli::try_parse_from(["vistat", "clean"]).is_err());
        let cli =
            Cli::try_parse_from(["vistat", "clean", "-i", "data.csv", "-c", "gdp85", "--json"])
                .unwrap();
        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.column, "gdp85");
                assert!(args.json);
                assert!(!args.values);
            }
            _ => panic!("expected clean subcommand"),
        }
    }
}
