//! Descriptive statistics for a numeric column.

/// Summary statistics over the values of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStatistics {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (N-1 denominator); NaN for fewer than two values.
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
}

impl ColumnStatistics {
    /// Computes statistics over `values`.
    ///
    /// Returns `None` for an empty slice; such a column has nothing to report.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len() as f64;
        let mean = values.iter().sum::<f64>() / count;

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let std_dev = if sorted.len() < 2 {
            f64::NAN
        } else {
            let sum_sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (sum_sq / (count - 1.0)).sqrt()
        };

        Some(Self {
            mean,
            median,
            std_dev,
            max: sorted[sorted.len() - 1],
            min: sorted[0],
        })
    }
}
