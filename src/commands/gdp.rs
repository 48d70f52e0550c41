use crate::chart;
use crate::cli::GdpArgs;
use crate::config::Config;
use crate::data::{self, GdpDataset};
use crate::stats::clip_outliers_with_report;
use crate::utils::output::{print_success, OutputStyle};
use anyhow::{Context, Result};

pub async fn handle_gdp_command(config: Config, args: &GdpArgs) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.datasets.gdp_url.clone());

    let source = data::resolve(&input)?;
    println!(
        "⬇️  Loading GDP data from {}",
        OutputStyle::info(&source.location())
    );

    let text = source.fetch().await?;
    let dataset = GdpDataset::from_csv_str(&text).context("Failed to parse GDP dataset")?;
    println!(
        "   {} countries with complete figures",
        OutputStyle::info(&dataset.countries.len().to_string())
    );

    let dataset = if args.keep_outliers {
        dataset
    } else {
        clip_gdp_columns(&dataset)?
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.general.output_dir.join("bubble-plot.png"));

    chart::bubble::render(&dataset, &output, config.image_size())
        .context("Failed to render bubble plot")?;

    print_success(&format!("Saved {}", output.display()));
    Ok(())
}

/// Clamp extreme GDP figures in both columns so a few very rich countries
/// do not compress the rest of the plot into a corner.
fn clip_gdp_columns(dataset: &GdpDataset) -> Result<GdpDataset> {
    let (gdp60, report60) = clip_outliers_with_report(&dataset.gdp60_column())?;
    let (gdp85, report85) = clip_outliers_with_report(&dataset.gdp85_column())?;

    OutputStyle::print_clip_report("gdp60", &report60);
    OutputStyle::print_clip_report("gdp85", &report85);

    Ok(dataset.with_columns(gdp60, gdp85))
}
