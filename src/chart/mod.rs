//! Static chart rendering
//!
//! One routine per report, all writing PNG files through plotters. No
//! general charting abstraction: each function takes an already shaped
//! dataset and a target path.

pub mod bar;
pub mod bubble;
pub mod line;
pub mod pie;

use crate::utils::error::AppError;
use plotters::prelude::*;

pub(crate) fn chart_err<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Chart(err.to_string())
}

/// Stable per-series colour, cycling through the palette
pub(crate) fn series_color(index: usize) -> PaletteColor<Palette99> {
    Palette99::pick(index)
}

/// Axis range covering `values` with a little headroom on both ends
pub(crate) fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.05).max(1.0);
    (min - pad, max + pad)
}
