//! Cross-country GDP dataset (GrowthDJ)
//!
//! The upstream CSV carries many columns; only OECD membership and the
//! 1960/1985 per-capita GDP figures are used. Missing values are written
//! as `NA` and any row missing one of the three fields is dropped.

use crate::utils::error::{AppError, AppResult};
use serde::Deserialize;

/// One country with both GDP figures present
#[derive(Debug, Clone, PartialEq)]
pub struct GdpCountry {
    pub oecd: bool,
    pub gdp60: f64,
    pub gdp85: f64,
}

/// The selected columns of the GDP dataset, incomplete rows removed
#[derive(Debug, Clone)]
pub struct GdpDataset {
    pub countries: Vec<GdpCountry>,
}

// Raw row as it appears in the CSV; unused columns are ignored by serde
#[derive(Debug, Deserialize)]
struct GdpRow {
    oecd: String,
    gdp60: String,
    gdp85: String,
}

impl GdpDataset {
    pub fn from_csv_str(text: &str) -> AppResult<Self> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut countries = Vec::new();

        for (line, result) in reader.deserialize::<GdpRow>().enumerate() {
            let row = result.map_err(|e| {
                AppError::Parse(format!("GDP row {}: {}", line + 1, e))
            })?;

            let oecd = match row.oecd.as_str() {
                "yes" => true,
                "no" => false,
                other => {
                    return Err(AppError::Parse(format!(
                        "GDP row {}: unexpected oecd value '{}'",
                        line + 1,
                        other
                    )))
                }
            };

            // dropna: skip countries with either figure missing
            let (Some(gdp60), Some(gdp85)) = (
                parse_optional(&row.gdp60, line)?,
                parse_optional(&row.gdp85, line)?,
            ) else {
                continue;
            };

            countries.push(GdpCountry { oecd, gdp60, gdp85 });
        }

        if countries.is_empty() {
            return Err(AppError::Parse(
                "GDP dataset has no complete rows".to_string(),
            ));
        }

        Ok(Self { countries })
    }

    pub fn gdp60_column(&self) -> Vec<f64> {
        self.countries.iter().map(|c| c.gdp60).collect()
    }

    pub fn gdp85_column(&self) -> Vec<f64> {
        self.countries.iter().map(|c| c.gdp85).collect()
    }

    /// Replace both GDP columns, keeping OECD flags and row order
    pub fn with_columns(&self, gdp60: Vec<f64>, gdp85: Vec<f64>) -> Self {
        debug_assert_eq!(gdp60.len(), self.countries.len());
        debug_assert_eq!(gdp85.len(), self.countries.len());
        Self {
            countries: self
                .countries
                .iter()
                .zip(gdp60.into_iter().zip(gdp85))
                .map(|(c, (gdp60, gdp85))| GdpCountry {
                    oecd: c.oecd,
                    gdp60,
                    gdp85,
                })
                .collect(),
        }
    }
}

fn parse_optional(cell: &str, line: usize) -> AppResult<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "NA" {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        AppError::Parse(format!(
            "GDP row {}: '{}' is not a number",
            line + 1,
            cell
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
rownames,oecd,inter,gdp60,gdp85
1,no,yes,2485,4371
2,no,no,1588,1171
3,yes,yes,9895,13327
4,no,no,NA,1071
5,no,no,1116,NA
";

    #[test]
    fn drops_rows_with_missing_figures() {
        let dataset = GdpDataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(dataset.countries.len(), 3);
        assert_eq!(dataset.gdp60_column(), vec![2485.0, 1588.0, 9895.0]);
        assert_eq!(dataset.gdp85_column(), vec![4371.0, 1171.0, 13327.0]);
    }

    #[test]
    fn maps_oecd_membership() {
        let dataset = GdpDataset::from_csv_str(SAMPLE).unwrap();
        assert!(!dataset.countries[0].oecd);
        assert!(dataset.countries[2].oecd);
    }

    #[test]
    fn rejects_non_numeric_gdp() {
        let text = "rownames,oecd,inter,gdp60,gdp85\n1,no,yes,abc,4371\n";
        let err = GdpDataset::from_csv_str(text).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_oecd_flag() {
        let text = "rownames,oecd,inter,gdp60,gdp85\n1,maybe,yes,100,200\n";
        assert!(GdpDataset::from_csv_str(text).is_err());
    }

    #[test]
    fn rejects_dataset_with_no_complete_rows() {
        let text = "rownames,oecd,inter,gdp60,gdp85\n1,no,yes,NA,NA\n";
        assert!(GdpDataset::from_csv_str(text).is_err());
    }

    #[test]
    fn with_columns_preserves_flags_and_order() {
        let dataset = GdpDataset::from_csv_str(SAMPLE).unwrap();
        let replaced = dataset.with_columns(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]);
        assert_eq!(replaced.countries[2].gdp60, 3.0);
        assert!(replaced.countries[2].oecd);
    }
}
