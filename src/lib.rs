//! Vistat - dataset visualisation from the command line
//!
//! This library loads tabular datasets (CSV over HTTP or from disk),
//! neutralizes extreme values with the Tukey IQR rule, and renders the
//! result as static charts.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod stats;
pub mod utils;

// Re-export the core transform and its types for library users
pub use stats::{clip_outliers, clip_outliers_with_report, quartiles, Bounds, ClipReport, OutlierError, Quartiles};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
