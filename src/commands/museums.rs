use crate::chart;
use crate::cli::{ChartKind, MuseumsArgs};
use crate::config::Config;
use crate::data::{self, MuseumSeries};
use crate::utils::output::{print_success, OutputStyle};
use anyhow::{bail, Context, Result};
use std::path::Path;

pub async fn handle_museums_command(config: Config, args: &MuseumsArgs) -> Result<()> {
    let input = match (&args.input, &config.datasets.museum_file) {
        (Some(input), _) => input.clone(),
        (None, Some(path)) => path.display().to_string(),
        (None, None) => {
            bail!("No museum dataset given; pass --input or set datasets.museum_file in the config")
        }
    };

    let source = data::resolve(&input)?;
    println!(
        "⬇️  Loading museum data from {}",
        OutputStyle::info(&source.location())
    );

    let text = source.fetch().await?;
    let series =
        MuseumSeries::from_csv_str(&text).context("Failed to parse museum dataset")?;
    println!(
        "   {} museums over {} months",
        OutputStyle::info(&series.museums.len().to_string()),
        OutputStyle::info(&series.dates.len().to_string())
    );

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.general.output_dir.clone());
    let size = config.image_size();

    let kind = args.chart.clone().unwrap_or(ChartKind::Line);
    for (kind, file_name) in selected_charts(&kind) {
        let path = output_dir.join(file_name);
        render_one(kind, &series, &path, size)?;
        print_success(&format!("Saved {}", path.display()));
    }

    Ok(())
}

fn selected_charts(kind: &ChartKind) -> Vec<(ChartKind, &'static str)> {
    match kind {
        ChartKind::Line => vec![(ChartKind::Line, "line_plot.png")],
        ChartKind::Pie => vec![(ChartKind::Pie, "pie_chart.png")],
        ChartKind::Bar => vec![(ChartKind::Bar, "bar_chart.png")],
        ChartKind::All => vec![
            (ChartKind::Line, "line_plot.png"),
            (ChartKind::Pie, "pie_chart.png"),
            (ChartKind::Bar, "bar_chart.png"),
        ],
    }
}

fn render_one(
    kind: ChartKind,
    series: &MuseumSeries,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    match kind {
        ChartKind::Line => {
            chart::line::render(series, path, size).context("Failed to render line plot")?
        }
        ChartKind::Pie => {
            chart::pie::render(series, path, size).context("Failed to render pie chart")?
        }
        ChartKind::Bar => {
            chart::bar::render(series, path, size).context("Failed to render bar chart")?
        }
        ChartKind::All => unreachable!("expanded by selected_charts"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_chart() {
        let charts = selected_charts(&ChartKind::All);
        assert_eq!(charts.len(), 3);
    }

    #[test]
    fn single_kind_renders_one_file() {
        let charts = selected_charts(&ChartKind::Pie);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].1, "pie_chart.png");
    }
}
