//! Outlier handling for numeric columns
//!
//! Implements the Tukey interquartile-range rule: values outside
//! `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` are clamped to the nearest limit so a
//! handful of extreme data points cannot distort a chart's scale.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlierError {
    #[error("cannot compute quartiles of an empty column")]
    EmptyInput,

    #[error("non-numeric value {value} at index {index}")]
    InvalidValue { index: usize, value: f64 },
}

/// First and third quartiles of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Tukey limits at 1.5 times the interquartile range
    pub fn bounds(&self) -> Bounds {
        let iqr = self.iqr();
        Bounds {
            lower: self.q1 - 1.5 * iqr,
            upper: self.q3 + 1.5 * iqr,
        }
    }
}

/// Clamping limits derived from [`Quartiles`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn clamp(&self, value: f64) -> f64 {
        if value >= self.upper {
            self.upper
        } else if value <= self.lower {
            self.lower
        } else {
            value
        }
    }
}

/// Summary of one clipping pass over a column
#[derive(Debug, Clone, Serialize)]
pub struct ClipReport {
    pub quartiles: Quartiles,
    pub bounds: Bounds,
    /// Number of values that were moved onto a limit
    pub clamped: usize,
}

/// Compute Q1 and Q3 of `values` with linear interpolation between the
/// closest ranks (the conventional quartile estimator).
///
/// Fails on an empty column and on any non-finite element; NaN has no
/// ordering, so quartiles over it would be meaningless.
pub fn quartiles(values: &[f64]) -> Result<Quartiles, OutlierError> {
    if values.is_empty() {
        return Err(OutlierError::EmptyInput);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(OutlierError::InvalidValue { index, value });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Ok(Quartiles {
        q1: percentile_of_sorted(&sorted, 25.0),
        q3: percentile_of_sorted(&sorted, 75.0),
    })
}

/// Clamp outliers in `values` to the Tukey limits of the column itself.
///
/// Returns a new vector of the same length and order; the input is not
/// modified. Bounds are computed once from the input and applied in a
/// single pass — the result is not re-clipped against its own quartiles,
/// so feeding the output back in can clamp further when the first pass
/// collapsed much of the distribution onto a limit.
pub fn clip_outliers(values: &[f64]) -> Result<Vec<f64>, OutlierError> {
    let (clipped, _) = clip_outliers_with_report(values)?;
    Ok(clipped)
}

/// Same as [`clip_outliers`], also reporting the limits used and how many
/// values were clamped.
pub fn clip_outliers_with_report(
    values: &[f64],
) -> Result<(Vec<f64>, ClipReport), OutlierError> {
    let quartiles = quartiles(values)?;
    let bounds = quartiles.bounds();

    let mut clamped = 0;
    let clipped = values
        .iter()
        .map(|&v| {
            let c = bounds.clamp(v);
            if c != v {
                clamped += 1;
            }
            c
        })
        .collect();

    Ok((
        clipped,
        ClipReport {
            quartiles,
            bounds,
            clamped,
        },
    ))
}

// Value at the `pct` percentile of an already sorted sample, interpolating
// linearly between the two nearest ranks.
fn percentile_of_sorted(sorted: &[f64], pct: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    if pct >= 100.0 {
        return sorted[sorted.len() - 1];
    }
    let rank = (pct / 100.0) * ((sorted.len() - 1) as f64);
    let lrank = rank.floor();
    let d = rank - lrank;
    let n = lrank as usize;
    let lo = sorted[n];
    let hi = sorted[n + 1];
    lo + (hi - lo) * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartiles_use_linear_interpolation() {
        // ranks 1.25 and 3.75 of [1, 2, 3, 4, 5, 100]
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(q.q1, 2.25);
        assert_eq!(q.q3, 4.75);
        assert_eq!(q.iqr(), 2.5);
    }

    #[test]
    fn quartiles_ignore_input_order() {
        let q = quartiles(&[100.0, 3.0, 1.0, 5.0, 2.0, 4.0]).unwrap();
        assert_eq!(q.q1, 2.25);
        assert_eq!(q.q3, 4.75);
    }

    #[test]
    fn clips_documented_example() {
        let out = clip_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 5.0, 8.5]);
    }

    #[test]
    fn reports_limits_and_clamp_count() {
        let (_, report) =
            clip_outliers_with_report(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(report.bounds.lower, -1.5);
        assert_eq!(report.bounds.upper, 8.5);
        assert_eq!(report.clamped, 1);
    }

    #[test]
    fn clips_low_outliers_to_lower_limit() {
        let out = clip_outliers(&[-100.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        // Q1=1.25, Q3=3.75, IQR=2.5 -> lower = -2.5
        assert_eq!(out[0], -2.5);
        assert_eq!(&out[1..], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn in_bound_values_are_untouched() {
        let input = vec![0.1, 0.2, 0.30000000000000004, 0.4, 0.5];
        let out = clip_outliers(&input).unwrap();
        // bit-for-bit, not just approximately equal
        for (a, b) in input.iter().zip(&out) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn preserves_length_and_order() {
        let input = vec![5.0, 100.0, 1.0, -50.0, 3.0, 2.0, 4.0];
        let out = clip_outliers(&input).unwrap();
        assert_eq!(out.len(), input.len());
        // the two middle extremes clamp, neighbours stay in place
        assert_eq!(out[0], 5.0);
        assert_eq!(out[2], 1.0);
        assert_eq!(out[4], 3.0);
    }

    #[test]
    fn every_output_lies_within_input_bounds() {
        let input = vec![12.0, -3.0, 7.5, 88.0, 2.0, 2.0, 5.5, -41.0, 6.0];
        let bounds = quartiles(&input).unwrap().bounds();
        for v in clip_outliers(&input).unwrap() {
            assert!(v >= bounds.lower && v <= bounds.upper);
        }
    }

    #[test]
    fn zero_iqr_is_a_noop() {
        let input = vec![7.0; 5];
        let q = quartiles(&input).unwrap();
        let bounds = q.bounds();
        assert_eq!(bounds.lower, 7.0);
        assert_eq!(bounds.upper, 7.0);
        assert_eq!(clip_outliers(&input).unwrap(), input);
    }

    #[test]
    fn single_element_column() {
        assert_eq!(clip_outliers(&[42.0]).unwrap(), vec![42.0]);
    }

    #[test]
    fn empty_column_is_rejected() {
        assert_eq!(clip_outliers(&[]), Err(OutlierError::EmptyInput));
    }

    #[test]
    fn nan_is_rejected_with_position() {
        let err = clip_outliers(&[1.0, f64::NAN, 3.0]).unwrap_err();
        match err {
            OutlierError::InvalidValue { index, value } => {
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn infinity_is_rejected() {
        assert!(matches!(
            clip_outliers(&[1.0, 2.0, f64::INFINITY]),
            Err(OutlierError::InvalidValue { index: 2, .. })
        ));
    }

    #[test]
    fn clipped_output_stays_inside_its_limits_on_reapply() {
        // first-order idempotence: a second pass over typical data finds
        // nothing left outside the original limits
        let out = clip_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        let again = clip_outliers(&out).unwrap();
        let bounds = quartiles(&out).unwrap().bounds();
        for v in &again {
            assert!(*v >= bounds.lower && *v <= bounds.upper);
        }
    }
}
