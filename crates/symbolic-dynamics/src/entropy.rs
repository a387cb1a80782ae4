//! Entropy Estimators
//!
//! Two differently defined entropies live here and must not be merged:
//!
//! - [`shannon_entropy`]: natural-log entropy of the word distribution with
//!   degenerate probabilities (0 and 1) removed, renormalized, divided by
//!   `ln(n)` and clamped to [0, 1]. A relative measure, comparable across
//!   tables with different symbol counts.
//! - [`frequency_entropy_bits`]: base-2 entropy over arbitrary non-negative
//!   weights, no filtering and no normalization by symbol count. Describes
//!   the shape of the frequency values themselves.

use crate::distribution::FrequencyTable;

/// Normalized Shannon entropy of a word frequency table, in [0, 1]
pub fn shannon_entropy(freq: &FrequencyTable) -> f64 {
    normalized_entropy(&freq.values())
}

/// Normalized Shannon entropy of raw probability values.
///
/// Probabilities outside the open interval (0, 1) are dropped before the
/// remainder is renormalized. Fewer than two remaining symbols give 0.0.
pub fn normalized_entropy(probs: &[f64]) -> f64 {
    let filtered: Vec<f64> = probs
        .iter()
        .copied()
        .filter(|&p| p > 0.0 && p < 1.0)
        .collect();

    if filtered.len() < 2 {
        return 0.0;
    }

    let sum: f64 = filtered.iter().sum();
    let raw: f64 = filtered
        .iter()
        .map(|&p| {
            let pn = p / sum;
            -pn * pn.ln()
        })
        .sum();

    let max_entropy = (filtered.len() as f64).ln();
    (raw / max_entropy).clamp(0.0, 1.0)
}

/// Base-2 entropy of non-negative weights, treated as an unnormalized
/// distribution: `-Σ (v/total) log2(v/total)` over `v > 0`.
///
/// Returns 0.0 for empty input or a zero total.
pub fn frequency_entropy_bits(weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total == 0.0 {
        return 0.0;
    }

    weights
        .iter()
        .filter(|&&v| v > 0.0)
        .map(|&v| {
            let p = v / total;
            -p * p.log2()
        })
        .sum()
}
