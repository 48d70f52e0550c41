pub mod gdp;
pub mod museum;
pub mod source;

pub use gdp::{GdpCountry, GdpDataset};
pub use museum::{MuseumColumn, MuseumSeries};
pub use source::{resolve, DataSource, LocalSource, RemoteSource};

use crate::utils::error::{AppError, AppResult};

/// Extract one named column of a CSV as a numeric sample.
///
/// Cells that do not parse as numbers surface here, before any statistics
/// run; empty and `NA` cells are skipped the way incomplete dataset rows
/// are dropped.
pub fn numeric_column(text: &str, column: &str) -> AppResult<Vec<f64>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| AppError::Parse(format!("CSV header: {}", e)))?;

    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| AppError::Parse(format!("No column named '{}'", column)))?;

    let mut values = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| AppError::Parse(format!("CSV row {}: {}", line + 1, e)))?;
        let cell = record.get(index).unwrap_or_default().trim();
        if cell.is_empty() || cell == "NA" {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| {
            AppError::Parse(format!(
                "Row {}, column '{}': '{}' is not a number",
                line + 1,
                column,
                cell
            ))
        })?;
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_named_column_in_order() {
        let text = "a,b\n1,10\n2,20\n3,30\n";
        assert_eq!(numeric_column(text, "b").unwrap(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn skips_missing_cells() {
        let text = "a,b\n1,10\n2,NA\n3,\n4,40\n";
        assert_eq!(numeric_column(text, "b").unwrap(), vec![10.0, 40.0]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let text = "a,b\n1,10\n";
        assert!(numeric_column(text, "c").is_err());
    }

    #[test]
    fn text_cell_is_an_error() {
        let text = "a,b\n1,ten\n";
        assert!(matches!(
            numeric_column(text, "b"),
            Err(AppError::Parse(_))
        ));
    }
}
