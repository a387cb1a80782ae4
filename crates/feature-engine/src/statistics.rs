//! Statistical Features Computation

use serde::{Deserialize, Serialize};
use symbolic_dynamics::arithmetic_mean;

/// Descriptive statistics for a sequence of values.
///
/// Variance and standard deviation are population estimators (divide by n).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticalFeatures {
    /// Number of values
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Bias-corrected skewness
    pub skewness: f64,
    /// Bias-corrected excess kurtosis (not clamped)
    pub kurtosis: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Root mean square
    pub rms: f64,
}

impl StatisticalFeatures {
    /// Compute statistical features from a slice of values.
    ///
    /// An empty slice yields all zeros.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        let mean = arithmetic_mean(values);

        // Min/Max
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let std_dev = scaled_root_mean_square(values.iter().map(|&v| v - mean), n);
        let variance = std_dev * std_dev;

        let rms = scaled_root_mean_square(values.iter().copied(), n);

        Self {
            count: values.len(),
            mean,
            variance,
            std_dev,
            skewness: skewness(values, mean, std_dev),
            kurtosis: kurtosis(values, mean, std_dev),
            min,
            max,
            rms,
        }
    }

    /// Peak-to-peak range
    pub fn amplitude(&self) -> f64 {
        self.max - self.min
    }
}

/// `sqrt(Σ x² / n)`, computed on `x / max|x|` so large inputs do not overflow
fn scaled_root_mean_square<I>(values: I, n: f64) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let scale = values.clone().map(f64::abs).fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }

    let sum_sq = values.map(|v| (v / scale) * (v / scale)).sum::<f64>();
    scale * (sum_sq / n).sqrt()
}

/// Sum of standardized deviations raised to `power`
fn standardized_moment_sum(values: &[f64], mean: f64, std_dev: f64, power: i32) -> f64 {
    values
        .iter()
        .map(|&v| ((v - mean) / std_dev).powi(power))
        .sum()
}

/// `(n / ((n-1)(n-2))) * Σ z³`; 0.0 when n < 3 or the spread is zero
fn skewness(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    let count = values.len();
    if count < 3 || std_dev == 0.0 {
        return 0.0;
    }

    let n = count as f64;
    (n / ((n - 1.0) * (n - 2.0))) * standardized_moment_sum(values, mean, std_dev, 3)
}

/// `(n(n+1) / ((n-1)(n-2)(n-3))) * Σ z⁴ - 3(n-1)² / ((n-2)(n-3))`;
/// 0.0 when n < 4 or the spread is zero
fn kurtosis(values: &[f64], mean: f64, std_dev: f64) -> f64 {
    let count = values.len();
    if count < 4 || std_dev == 0.0 {
        return 0.0;
    }

    let n = count as f64;
    let scale = (n * (n + 1.0)) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let correction = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
    scale * standardized_moment_sum(values, mean, std_dev, 4) - correction
}
