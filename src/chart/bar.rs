//! Bar chart of average monthly visitors per museum.

use super::{chart_err, series_color};
use crate::data::MuseumSeries;
use crate::utils::error::AppResult;
use plotters::prelude::*;
use std::path::Path;

pub fn render(series: &MuseumSeries, path: &Path, size: (u32, u32)) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let means = series.monthly_means();
    let names: Vec<String> = means.iter().map(|(name, _)| name.clone()).collect();
    let y_max = means
        .iter()
        .map(|(_, mean)| *mean)
        .fold(0.0, f64::max)
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Monthly Visitors", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(80)
        .build_cartesian_2d((0..means.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Museum")
        .y_desc("Visitors per month")
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) if *index < names.len() => names[*index].clone(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(means.iter().enumerate().map(|(index, (_, mean))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), *mean),
                ],
                series_color(index).filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
