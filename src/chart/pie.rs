//! Pie chart of each museum's share of total visitors.

use super::chart_err;
use crate::data::MuseumSeries;
use crate::utils::error::AppResult;
use plotters::prelude::*;
use std::path::Path;

pub fn render(series: &MuseumSeries, path: &Path, size: (u32, u32)) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let root = root
        .titled("Share Of Total Museum Visitors", ("sans-serif", 40))
        .map_err(chart_err)?;

    let totals = series.totals();
    let sizes: Vec<f64> = totals.iter().map(|(_, total)| *total).collect();
    let labels: Vec<String> = totals.iter().map(|(name, _)| name.clone()).collect();
    let colors: Vec<RGBColor> = (0..totals.len()).map(slice_color).collect();

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = (width.min(height) as f64) * 0.4;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;
    Ok(())
}

fn slice_color(index: usize) -> RGBColor {
    let (r, g, b) = Palette99::COLORS[index % Palette99::COLORS.len()];
    RGBColor(r, g, b)
}
