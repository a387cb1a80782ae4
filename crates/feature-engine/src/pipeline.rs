//! Symbolic Dynamics Pipeline

use crate::features::{extract_features, FeatureVector};
use serde::{Deserialize, Serialize};
use signal_validator::SignalError;
use symbolic_dynamics::{
    binarize, encode_words, estimate_frequencies, shannon_entropy, BinarySequence, FrequencyTable,
    WordCode,
};
use tracing::debug;

/// Conventional word width
pub const DEFAULT_WORD_WIDTH: usize = 3;

/// Every artifact produced for one signal.
///
/// Visualization needs `binary` and `freq`; classifiers need `features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub binary: BinarySequence,
    pub words: Vec<WordCode>,
    pub freq: FrequencyTable,
    pub entropy: f64,
    pub threshold: f64,
    pub features: FeatureVector,
}

/// Run binarization, word encoding, distribution and entropy estimation and
/// feature extraction for one signal.
///
/// Only input validation can fail; its error is returned unchanged.
pub fn run_pipeline(raw: &[f64], width: usize) -> Result<PipelineResult, SignalError> {
    let (binary, threshold) = binarize(raw)?;

    let words = encode_words(&binary, width)?;
    let freq = estimate_frequencies(&words);
    let entropy = shannon_entropy(&freq);
    let features = extract_features(raw, &binary, &words, &freq, entropy, threshold);

    debug!(
        samples = raw.len(),
        width,
        words = words.len(),
        entropy,
        "Pipeline complete"
    );

    Ok(PipelineResult {
        binary,
        words,
        freq,
        entropy,
        threshold,
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pipeline_scenario() {
        let raw = [1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
        let result = run_pipeline(&raw, DEFAULT_WORD_WIDTH).unwrap();

        assert_eq!(result.threshold, 2.5);
        assert_eq!(result.binary.as_slice(), &[0, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(result.words, vec![1, 3, 6, 4, 1, 3]);
        assert_eq!(result.freq.len(), 4);
        assert_eq!(result.features.shannon_entropy, result.entropy);
    }

    #[test]
    fn test_errors_propagate() {
        assert_eq!(run_pipeline(&[], 3), Err(SignalError::EmptySignal));
        assert!(matches!(
            run_pipeline(&[1.0, f64::NAN], 3),
            Err(SignalError::InvalidInput { index: 1, .. })
        ));
        assert!(matches!(
            run_pipeline(&[1.0, 2.0], 0),
            Err(SignalError::InvalidWordWidth { width: 0, .. })
        ));
    }

    #[test]
    fn test_empty_signal_reported_before_word_width() {
        assert_eq!(run_pipeline(&[], 0), Err(SignalError::EmptySignal));
        assert!(matches!(
            run_pipeline(&[f64::NAN], 0),
            Err(SignalError::InvalidInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_large_constant_signal() {
        let result = run_pipeline(&[1e308; 4], 3).unwrap();
        assert_eq!(result.threshold, 1e308);
        assert_eq!(result.binary.to_bit_string(), "1111");
        assert_eq!(result.features.threshold, 1e308);
        assert_eq!(result.features.mean, 1e308);
        assert_eq!(result.features.std_dev, 0.0);
        assert_eq!(result.features.variance, 0.0);
    }

    #[test]
    fn test_signal_length_equal_to_width() {
        let result = run_pipeline(&[3.0, 1.0, 2.0], 3).unwrap();
        assert_eq!(result.words.len(), 1);
        assert_eq!(result.entropy, 0.0);
    }

    #[test]
    fn test_signal_shorter_than_width() {
        let result = run_pipeline(&[3.0, 1.0], 3).unwrap();
        assert!(result.words.is_empty());
        assert!(result.freq.is_empty());
        assert_eq!(result.entropy, 0.0);
        assert_eq!(result.features.sample_count, 2.0);
    }

    proptest! {
        #[test]
        fn pipeline_invariants(
            raw in proptest::collection::vec(-1e4f64..1e4, 1..400),
            width in 1usize..8,
        ) {
            let result = run_pipeline(&raw, width).unwrap();
            prop_assert_eq!(result.binary.len(), raw.len());
            prop_assert_eq!(result.words.len(), raw.len().saturating_sub(width - 1));
            prop_assert!((0.0..=1.0).contains(&result.entropy));
            prop_assert!(result.features.to_array().iter().all(|v| !v.is_nan()));
        }

        #[test]
        fn pipeline_is_deterministic(
            raw in proptest::collection::vec(-1e4f64..1e4, 1..200),
            width in 1usize..6,
        ) {
            let first = run_pipeline(&raw, width).unwrap();
            let second = run_pipeline(&raw, width).unwrap();
            let first_bits: Vec<u64> = first.features.to_array().iter().map(|v| v.to_bits()).collect();
            let second_bits: Vec<u64> = second.features.to_array().iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(first_bits, second_bits);
            prop_assert_eq!(first, second);
        }
    }
}
