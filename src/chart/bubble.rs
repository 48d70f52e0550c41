//! Bubble plot of per-capita GDP in 1960 against 1985, one point per
//! country, coloured by OECD membership.

use super::{chart_err, padded_range};
use crate::data::GdpDataset;
use crate::utils::error::AppResult;
use plotters::prelude::*;
use std::path::Path;

const BUBBLE_SIZE: i32 = 10;

pub fn render(dataset: &GdpDataset, path: &Path, size: (u32, u32)) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (x_min, x_max) = padded_range(&dataset.gdp60_column());
    let (y_min, y_max) = padded_range(&dataset.gdp85_column());

    let mut chart = ChartBuilder::on(&root)
        .caption("Cross Country GDP", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Per capita GDP in 1960")
        .y_desc("Per capita GDP in 1985")
        .draw()
        .map_err(chart_err)?;

    let oecd = dataset.countries.iter().filter(|c| c.oecd);
    chart
        .draw_series(oecd.map(|c| {
            Circle::new((c.gdp60, c.gdp85), BUBBLE_SIZE, GREEN.mix(0.5).filled())
        }))
        .map_err(chart_err)?
        .label("OECD Country")
        .legend(|(x, y)| Circle::new((x + 5, y), 5, GREEN.mix(0.5).filled()));

    let non_oecd = dataset.countries.iter().filter(|c| !c.oecd);
    chart
        .draw_series(non_oecd.map(|c| {
            Circle::new((c.gdp60, c.gdp85), BUBBLE_SIZE, RED.mix(0.5).filled())
        }))
        .map_err(chart_err)?
        .label("NON OECD Country")
        .legend(|(x, y)| Circle::new((x + 5, y), 5, RED.mix(0.5).filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
