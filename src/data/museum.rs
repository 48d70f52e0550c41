//! Museum monthly-visitor dataset
//!
//! A date-indexed table: the first column is the month, every remaining
//! column is one museum's visitor count for that month.

use crate::utils::error::{AppError, AppResult};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct MuseumSeries {
    pub dates: Vec<NaiveDate>,
    pub museums: Vec<MuseumColumn>,
}

/// One museum's visitor counts, aligned with [`MuseumSeries::dates`]
#[derive(Debug, Clone)]
pub struct MuseumColumn {
    pub name: String,
    pub visitors: Vec<f64>,
}

impl MuseumSeries {
    pub fn from_csv_str(text: &str) -> AppResult<Self> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::Parse(format!("Museum header: {}", e)))?
            .clone();
        if headers.len() < 2 {
            return Err(AppError::Parse(
                "Museum dataset needs a date column and at least one museum".to_string(),
            ));
        }

        let mut museums: Vec<MuseumColumn> = headers
            .iter()
            .skip(1)
            .map(|name| MuseumColumn {
                name: name.to_string(),
                visitors: Vec::new(),
            })
            .collect();
        let mut dates = Vec::new();

        for (line, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::Parse(format!("Museum row {}: {}", line + 1, e))
            })?;

            let date_cell = record.get(0).unwrap_or_default();
            let date = NaiveDate::parse_from_str(date_cell, DATE_FORMAT).map_err(|_| {
                AppError::Parse(format!(
                    "Museum row {}: '{}' is not a {} date",
                    line + 1,
                    date_cell,
                    DATE_FORMAT
                ))
            })?;
            dates.push(date);

            for (column, cell) in museums.iter_mut().zip(record.iter().skip(1)) {
                let count = cell.trim().parse::<f64>().map_err(|_| {
                    AppError::Parse(format!(
                        "Museum row {}, column '{}': '{}' is not a number",
                        line + 1,
                        column.name,
                        cell
                    ))
                })?;
                column.visitors.push(count);
            }
        }

        if dates.is_empty() {
            return Err(AppError::Parse("Museum dataset has no rows".to_string()));
        }

        Ok(Self { dates, museums })
    }

    /// Total visitors per museum over the whole date range
    pub fn totals(&self) -> Vec<(String, f64)> {
        self.museums
            .iter()
            .map(|m| (m.name.clone(), m.visitors.iter().sum()))
            .collect()
    }

    /// Mean monthly visitors per museum
    pub fn monthly_means(&self) -> Vec<(String, f64)> {
        let months = self.dates.len() as f64;
        self.museums
            .iter()
            .map(|m| (m.name.clone(), m.visitors.iter().sum::<f64>() / months))
            .collect()
    }

    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let first = *self.dates.iter().min().unwrap_or(&self.dates[0]);
        let last = *self.dates.iter().max().unwrap_or(&self.dates[0]);
        (first, last)
    }

    pub fn max_visitors(&self) -> f64 {
        self.museums
            .iter()
            .flat_map(|m| m.visitors.iter())
            .fold(0.0, |acc, &v| acc.max(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Avila Adobe,Firehouse Museum
2014-01-01,24778,4486
2014-02-01,18976,4172
2014-03-01,25231,7082
";

    #[test]
    fn parses_dates_and_columns() {
        let series = MuseumSeries::from_csv_str(SAMPLE).unwrap();
        assert_eq!(series.dates.len(), 3);
        assert_eq!(series.museums.len(), 2);
        assert_eq!(series.museums[0].name, "Avila Adobe");
        assert_eq!(series.museums[1].visitors, vec![4486.0, 4172.0, 7082.0]);
    }

    #[test]
    fn totals_sum_each_column() {
        let series = MuseumSeries::from_csv_str(SAMPLE).unwrap();
        let totals = series.totals();
        assert_eq!(totals[0], ("Avila Adobe".to_string(), 68985.0));
        assert_eq!(totals[1].1, 15740.0);
    }

    #[test]
    fn monthly_means_divide_by_month_count() {
        let series = MuseumSeries::from_csv_str(SAMPLE).unwrap();
        let means = series.monthly_means();
        assert_eq!(means[0].1, 22995.0);
    }

    #[test]
    fn date_range_spans_first_to_last() {
        let series = MuseumSeries::from_csv_str(SAMPLE).unwrap();
        let (first, last) = series.date_range();
        assert_eq!(first, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2014, 3, 1).unwrap());
    }

    #[test]
    fn rejects_text_in_a_numeric_cell() {
        let text = "Date,Museum\n2014-01-01,closed\n";
        let err = MuseumSeries::from_csv_str(text).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejects_bad_date() {
        let text = "Date,Museum\nJan 2014,100\n";
        assert!(MuseumSeries::from_csv_str(text).is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let text = "Date,Museum\n";
        assert!(MuseumSeries::from_csv_str(text).is_err());
    }
}
