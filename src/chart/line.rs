//! Line plot of monthly visitor counts, one series per museum.

use super::{chart_err, series_color};
use crate::data::MuseumSeries;
use crate::utils::error::AppResult;
use plotters::prelude::*;
use std::path::Path;

pub fn render(series: &MuseumSeries, path: &Path, size: (u32, u32)) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (first, last) = series.date_range();
    let y_max = series.max_visitors() * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Visitors To Different Museums", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(first..last, 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Number of visitors")
        .x_label_formatter(&|date| date.format("%Y-%m").to_string())
        .draw()
        .map_err(chart_err)?;

    for (index, museum) in series.museums.iter().enumerate() {
        let color = series_color(index);
        let legend_color = series_color(index);
        chart
            .draw_series(LineSeries::new(
                series
                    .dates
                    .iter()
                    .zip(&museum.visitors)
                    .map(|(&date, &count)| (date, count)),
                color.stroke_width(2),
            ))
            .map_err(chart_err)?
            .label(&museum.name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], legend_color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
