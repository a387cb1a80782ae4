//! Mean-Threshold Binarizer

use serde::{Deserialize, Serialize};
use signal_validator::{SignalError, Validator};
use tracing::trace;

/// Binary symbol sequence, one symbol (0 or 1) per raw sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySequence {
    symbols: Vec<u8>,
}

impl BinarySequence {
    /// Build from already-binary symbols; any non-zero value becomes 1
    pub fn from_symbols<I: IntoIterator<Item = u8>>(symbols: I) -> Self {
        Self {
            symbols: symbols.into_iter().map(|s| u8::from(s != 0)).collect(),
        }
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }

    /// Fraction of 1-symbols (0.0 for an empty sequence)
    pub fn ones_fraction(&self) -> f64 {
        if self.symbols.is_empty() {
            return 0.0;
        }
        let ones = self.symbols.iter().filter(|&&s| s == 1).count();
        ones as f64 / self.symbols.len() as f64
    }

    /// Number of positions where the symbol differs from its predecessor
    pub fn transitions(&self) -> usize {
        self.symbols.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Render as a string of '0'/'1' characters for plotting
    pub fn to_bit_string(&self) -> String {
        self.symbols
            .iter()
            .map(|&s| if s == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Arithmetic mean of finite values, 0.0 for an empty slice.
///
/// Falls back to summing `v / n` when the plain sum overflows. The result is
/// kept inside `[min, max]` so a constant signal yields exactly its value.
pub fn arithmetic_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|&v| v / n).sum::<f64>()
    };

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    mean.clamp(min, max)
}

/// Threshold a raw signal against its arithmetic mean.
///
/// Returns the binary sequence and the threshold. A sample equal to the
/// mean maps to 1.
pub fn binarize(samples: &[f64]) -> Result<(BinarySequence, f64), SignalError> {
    Validator::default().validate_samples(samples)?;

    let threshold = arithmetic_mean(samples);
    let symbols = samples
        .iter()
        .map(|&v| u8::from(v >= threshold))
        .collect();

    trace!(samples = samples.len(), threshold, "Binarized signal");

    Ok((BinarySequence { symbols }, threshold))
}
