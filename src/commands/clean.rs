use crate::cli::CleanArgs;
use crate::config::Config;
use crate::data;
use crate::stats::{clip_outliers_with_report, ClipReport};
use crate::utils::output::OutputStyle;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CleanOutput<'a> {
    column: &'a str,
    #[serde(flatten)]
    report: &'a ClipReport,
    values: &'a [f64],
}

pub async fn handle_clean_command(_config: Config, args: &CleanArgs) -> Result<()> {
    let source = data::resolve(&args.input)?;
    let text = source.fetch().await?;

    let sample = data::numeric_column(&text, &args.column)?;
    let (values, report) = clip_outliers_with_report(&sample)
        .with_context(|| format!("Cannot clip column '{}'", args.column))?;

    if args.json {
        let output = CleanOutput {
            column: &args.column,
            report: &report,
            values: &values,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    OutputStyle::print_clip_report(&args.column, &report);
    if args.values {
        for value in &values {
            println!("{}", value);
        }
    }

    Ok(())
}
