// ---------------------------------------------------------------------------
// Descriptive statistics over a filtered view
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column.
///
/// On an empty input `count` is 0 and every other field is NaN; on a single
/// value the standard deviation is NaN (sample estimator needs n ≥ 2).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Row labels of the summary table, in display order.
pub const SUMMARY_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl ColumnSummary {
    /// Statistic value for a [`SUMMARY_ROWS`] label.
    pub fn stat(&self, row: &str) -> f64 {
        match row {
            "count" => self.count as f64,
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.median,
            "75%" => self.q75,
            "max" => self.max,
            _ => f64::NAN,
        }
    }
}

/// Compute descriptive statistics for one numeric column.
///
/// Quartiles use linear interpolation between the two nearest order
/// statistics; the standard deviation is the sample estimator (n − 1).
pub fn describe(column: &str, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    if count == 0 {
        return ColumnSummary {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = variance.sqrt();

    ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: sorted[0],
        q25: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.50),
        q75: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linearly interpolated percentile of an already-sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = idx - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_hand_computed_values() {
        let summary = describe("unit_price", &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // Squared deviations sum to 32, sample variance 32/7.
        assert!((summary.std - (32.0 / 7.0_f64).sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.median, 4.5);
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let summary = describe("x", &[1.0, 2.0, 3.0, 4.0]);
        assert!((summary.q25 - 1.75).abs() < 1e-12);
        assert!((summary.median - 2.5).abs() < 1e-12);
        assert!((summary.q75 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn empty_input_reports_zero_count_and_nan() {
        let summary = describe("unit_price", &[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.std.is_nan());
        assert!(summary.min.is_nan());
        assert!(summary.q25.is_nan());
        assert!(summary.median.is_nan());
        assert!(summary.q75.is_nan());
        assert!(summary.max.is_nan());
    }

    #[test]
    fn single_value_has_nan_std() {
        let summary = describe("x", &[3.5]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 3.5);
        assert!(summary.std.is_nan());
        assert_eq!(summary.min, 3.5);
        assert_eq!(summary.max, 3.5);
    }

    #[test]
    fn stat_lookup_follows_row_labels() {
        let summary = describe("x", &[1.0, 3.0]);
        assert_eq!(summary.stat("count"), 2.0);
        assert_eq!(summary.stat("mean"), 2.0);
        assert_eq!(summary.stat("min"), 1.0);
        assert_eq!(summary.stat("max"), 3.0);
    }
}
