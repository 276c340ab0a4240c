//! Chart Data Pipeline
//!
//! Turns raw entry rows into chart-ready series and an outlier-robust
//! vertical axis range. Rows with unparsable dates or non-finite values
//! are dropped without error; upstream data is allowed to be incomplete
//! and the renderer must never see a NaN.

use crate::dates;
use crate::models::Entry;

/// One chart point. `timestamp_ms` drives geometry, `label` the tooltip
/// and tick text.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub timestamp_ms: i64,
    pub label: String,
    pub value: f64,
}

/// The two named series a dataset chart draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    pub actual: Vec<SeriesPoint>,
    pub projected: Vec<SeriesPoint>,
}

impl SeriesSet {
    pub fn is_empty(&self) -> bool {
        self.actual.is_empty() && self.projected.is_empty()
    }

    /// Robust y-axis range over every plotted value, or `None` when
    /// nothing survives sanitization.
    pub fn value_range(&self) -> Option<ValueRange> {
        let values: Vec<f64> = self
            .actual
            .iter()
            .chain(self.projected.iter())
            .map(|p| p.value)
            .collect();
        compute_robust_range(&values)
    }
}

/// Display bounds for the y axis. Outliers beyond the IQR fences may lie
/// outside the range; they are still plotted, just not given axis room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Sanitize and partition rows into actual and projected series,
/// preserving the relative order of surviving rows in each partition.
pub fn build_series(rows: &[Entry]) -> SeriesSet {
    let mut series = SeriesSet::default();

    for row in rows {
        let Some(timestamp_ms) = dates::timestamp_ms(&row.date) else {
            continue;
        };
        if !row.value.is_finite() {
            continue;
        }

        let point = SeriesPoint {
            timestamp_ms,
            label: dates::display_date(&row.date),
            value: row.value,
        };

        if row.projected {
            series.projected.push(point);
        } else {
            series.actual.push(point);
        }
    }

    series
}

/// Compute display bounds that downweight outliers.
///
/// Quartiles are taken by linear interpolation at rank `(n-1)*q`; values
/// beyond `Q1 - 1.5*IQR` or `Q3 + 1.5*IQR` are excluded from the bound
/// computation (with the raw min/max as fallback if nothing remains).
/// The surviving range is padded by 10% of its span per side; a zero
/// span is padded by the bound's magnitude, or by 1 when the bound is 0.
/// Bounds are floored/ceiled to three decimals for display stability.
pub fn compute_robust_range(values: &[f64]) -> Option<ValueRange> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let in_fence = |v: &f64| *v >= lower_fence && *v <= upper_fence;
    let lowest = sorted.iter().copied().find(in_fence);
    let highest = sorted.iter().rev().copied().find(in_fence);

    let (mut min, mut max) = match (lowest, highest) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => (sorted[0], sorted[sorted.len() - 1]),
    };

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.1
    } else if min.abs() > 0.0 {
        min.abs()
    } else {
        1.0
    };
    min -= pad;
    max += pad;

    Some(ValueRange {
        min: floor_thousandths(min),
        max: ceil_thousandths(max),
    })
}

/// Linear-interpolated quantile over an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * q;
    let idx = rank.floor() as usize;
    let frac = rank - idx as f64;
    let lower = sorted[idx];
    let upper = sorted.get(idx + 1).copied().unwrap_or(lower);
    lower + frac * (upper - lower)
}

fn floor_thousandths(v: f64) -> f64 {
    (v * 1000.0).floor() / 1000.0
}

fn ceil_thousandths(v: f64) -> f64 {
    (v * 1000.0).ceil() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, value: f64, projected: bool) -> Entry {
        Entry {
            id: 0,
            dataset_id: 1,
            value,
            label: String::new(),
            date: date.to_string(),
            projected,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_build_series_empty_input() {
        let series = build_series(&[]);
        assert!(series.actual.is_empty());
        assert!(series.projected.is_empty());
    }

    #[test]
    fn test_build_series_drops_bad_rows_keeps_order() {
        let rows = vec![
            entry("2025-01-01", 1.0, false),
            entry("garbage", 2.0, false),
            entry("2025-01-03", f64::NAN, false),
            entry("2025-01-04", 4.0, false),
            entry("2025-01-02", 9.0, true),
            entry("2025-01-05", 11.0, true),
        ];

        let series = build_series(&rows);

        let actual: Vec<f64> = series.actual.iter().map(|p| p.value).collect();
        assert_eq!(actual, vec![1.0, 4.0]);
        let projected: Vec<f64> = series.projected.iter().map(|p| p.value).collect();
        assert_eq!(projected, vec![9.0, 11.0]);
    }

    #[test]
    fn test_build_series_point_fields() {
        let series = build_series(&[entry("2025-06-15T00:00:00Z", 3.5, false)]);

        assert_eq!(series.actual.len(), 1);
        let point = &series.actual[0];
        assert_eq!(point.label, "6/15/2025");
        assert_eq!(point.timestamp_ms, dates::timestamp_ms("2025-06-15").unwrap());
        assert_close(point.value, 3.5);
    }

    #[test]
    fn test_range_excludes_outlier_from_bounds() {
        // Q1=2, Q3=4, IQR=2, fences [-1, 7]: 100 is fenced out, the
        // [1, 4] survivors are padded by 0.3 per side.
        let range = compute_robust_range(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert_close(range.min, 0.7);
        assert_close(range.max, 4.3);
    }

    #[test]
    fn test_outlier_still_plotted_as_point() {
        let rows = vec![
            entry("2025-01-01", 1.0, false),
            entry("2025-01-02", 2.0, false),
            entry("2025-01-03", 3.0, false),
            entry("2025-01-04", 4.0, false),
            entry("2025-01-05", 100.0, false),
        ];

        let series = build_series(&rows);
        assert_eq!(series.actual.len(), 5);

        let range = series.value_range().unwrap();
        assert!(range.max < 100.0);
    }

    #[test]
    fn test_range_zero_span_pads_by_magnitude() {
        let range = compute_robust_range(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_close(range.min, 0.0);
        assert_close(range.max, 10.0);
    }

    #[test]
    fn test_range_zero_span_at_zero_pads_by_one() {
        let range = compute_robust_range(&[0.0, 0.0, 0.0]).unwrap();
        assert_close(range.min, -1.0);
        assert_close(range.max, 1.0);
    }

    #[test]
    fn test_range_empty_and_non_finite() {
        assert_eq!(compute_robust_range(&[]), None);
        assert_eq!(compute_robust_range(&[f64::NAN, f64::INFINITY]), None);
    }

    #[test]
    fn test_range_single_value() {
        let range = compute_robust_range(&[10.0]).unwrap();
        assert_close(range.min, 0.0);
        assert_close(range.max, 20.0);
    }

    #[test]
    fn test_range_is_ordered() {
        for values in [
            vec![-3.0, -1.0, -2.0],
            vec![2.5],
            vec![4.0, 8.0],
            vec![1.0, 1000.0, 2.0, 3.0],
        ] {
            let range = compute_robust_range(&values).unwrap();
            assert!(range.min <= range.max);
        }
    }

    #[test]
    fn test_quantiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_close(quantile(&sorted, 0.25), 1.75);
        assert_close(quantile(&sorted, 0.5), 2.5);
        assert_close(quantile(&sorted, 0.75), 3.25);
        assert_close(quantile(&sorted, 1.0), 4.0);
    }
}
