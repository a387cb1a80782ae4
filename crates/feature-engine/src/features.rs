//! Feature Vector Assembly

use crate::statistics::StatisticalFeatures;
use serde::{Deserialize, Serialize};
use symbolic_dynamics::{frequency_entropy_bits, BinarySequence, FrequencyTable, WordCode};
use tracing::debug;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 19;

/// Schema keys in positional order.
///
/// Classifiers index features by position, so reordering or renaming an
/// entry invalidates every trained model.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "entropia_shannon",
    "limiar",
    "total_amostras",
    "total_padroes",
    "padroes_unicos",
    "media_valores",
    "desvio_padrao",
    "variancia",
    "skewness",
    "kurtosis",
    "amplitude",
    "rms",
    "proporcao_uns",
    "transicoes",
    "comprimento_sequencia",
    "max_frequencia",
    "min_frequencia",
    "std_frequencias",
    "entropia_frequencias",
];

/// Fixed-schema feature vector for classifier input.
///
/// Field order matches [`FEATURE_NAMES`]; serialized keys are the schema keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Normalized Shannon entropy of the word distribution
    #[serde(rename = "entropia_shannon")]
    pub shannon_entropy: f64,
    /// Binarization threshold (signal mean)
    #[serde(rename = "limiar")]
    pub threshold: f64,
    /// Number of raw samples
    #[serde(rename = "total_amostras")]
    pub sample_count: f64,
    /// Number of words
    #[serde(rename = "total_padroes")]
    pub word_count: f64,
    /// Number of distinct word codes
    #[serde(rename = "padroes_unicos")]
    pub unique_words: f64,
    #[serde(rename = "media_valores")]
    pub mean: f64,
    #[serde(rename = "desvio_padrao")]
    pub std_dev: f64,
    #[serde(rename = "variancia")]
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub amplitude: f64,
    pub rms: f64,
    /// Fraction of 1-symbols
    #[serde(rename = "proporcao_uns")]
    pub ones_fraction: f64,
    /// Symbol changes between neighbours
    #[serde(rename = "transicoes")]
    pub transitions: f64,
    #[serde(rename = "comprimento_sequencia")]
    pub sequence_length: f64,
    #[serde(rename = "max_frequencia")]
    pub max_frequency: f64,
    #[serde(rename = "min_frequencia")]
    pub min_frequency: f64,
    #[serde(rename = "std_frequencias")]
    pub frequency_std_dev: f64,
    /// Base-2 entropy of the raw frequency values
    #[serde(rename = "entropia_frequencias")]
    pub frequency_entropy: f64,
}

impl FeatureVector {
    /// Flatten into positional order
    pub fn to_array(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.shannon_entropy,
            self.threshold,
            self.sample_count,
            self.word_count,
            self.unique_words,
            self.mean,
            self.std_dev,
            self.variance,
            self.skewness,
            self.kurtosis,
            self.amplitude,
            self.rms,
            self.ones_fraction,
            self.transitions,
            self.sequence_length,
            self.max_frequency,
            self.min_frequency,
            self.frequency_std_dev,
            self.frequency_entropy,
        ]
    }

    /// Iterate `(schema key, value)` in positional order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }

    /// Look up a feature by schema key
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }
}

/// Build the feature vector from the raw signal and every derived artifact.
///
/// Degenerate inputs (empty word list, empty table, zero spread) produce 0.0
/// for the affected features rather than NaN.
pub fn extract_features(
    raw: &[f64],
    binary: &BinarySequence,
    words: &[WordCode],
    freq: &FrequencyTable,
    entropy: f64,
    threshold: f64,
) -> FeatureVector {
    let raw_stats = StatisticalFeatures::compute(raw);
    let freq_values = freq.values();
    let freq_stats = StatisticalFeatures::compute(&freq_values);

    debug!(
        samples = raw.len(),
        words = words.len(),
        unique = freq.len(),
        "Extracting features"
    );

    FeatureVector {
        shannon_entropy: or_zero(entropy),
        threshold: or_zero(threshold),
        sample_count: raw.len() as f64,
        word_count: words.len() as f64,
        unique_words: freq.len() as f64,
        mean: or_zero(raw_stats.mean),
        std_dev: or_zero(raw_stats.std_dev),
        variance: or_zero(raw_stats.variance),
        skewness: or_zero(raw_stats.skewness),
        kurtosis: or_zero(raw_stats.kurtosis),
        amplitude: or_zero(raw_stats.amplitude()),
        rms: or_zero(raw_stats.rms),
        ones_fraction: binary.ones_fraction(),
        transitions: binary.transitions() as f64,
        sequence_length: binary.len() as f64,
        max_frequency: freq_stats.max,
        min_frequency: freq_stats.min,
        frequency_std_dev: or_zero(freq_stats.std_dev),
        frequency_entropy: frequency_entropy_bits(&freq_values),
    }
}

/// NaN never leaves the extractor
fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symbolic_dynamics::{binarize, encode_words, estimate_frequencies, shannon_entropy};

    fn features_for(raw: &[f64], width: usize) -> FeatureVector {
        let (binary, threshold) = binarize(raw).unwrap();
        let words = encode_words(&binary, width).unwrap();
        let freq = estimate_frequencies(&words);
        let entropy = shannon_entropy(&freq);
        extract_features(raw, &binary, &words, &freq, entropy, threshold)
    }

    #[test]
    fn test_feature_extraction() {
        let features = features_for(&[1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0], 3);

        assert_eq!(features.sample_count, 8.0);
        assert_eq!(features.sequence_length, 8.0);
        assert_eq!(features.word_count, 6.0);
        assert_eq!(features.unique_words, 4.0);
        assert_eq!(features.threshold, 2.5);
        assert_eq!(features.ones_fraction, 0.5);
        assert_eq!(features.transitions, 3.0);
        assert_eq!(features.amplitude, 3.0);
        assert!((features.max_frequency - 2.0 / 6.0).abs() < 1e-12);
        assert!((features.min_frequency - 1.0 / 6.0).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&features.shannon_entropy));
    }

    #[test]
    fn test_schema_order() {
        let features = features_for(&[0.5, 1.5, -2.0, 3.0, 0.0, 1.0], 2);
        let array = features.to_array();

        assert_eq!(array.len(), FEATURE_DIMENSION);
        assert_eq!(array[0], features.shannon_entropy);
        assert_eq!(array[13], features.transitions);
        assert_eq!(array[18], features.frequency_entropy);
        assert_eq!(features.get("limiar"), Some(features.threshold));
        assert_eq!(features.get("entropia_frequencias"), Some(features.frequency_entropy));
        assert_eq!(features.get("unknown"), None);
    }

    #[test]
    fn test_serialized_keys_follow_schema() {
        let features = features_for(&[1.0, 2.0, 3.0, 4.0], 2);
        let json = serde_json::to_value(&features).unwrap();
        let object = json.as_object().unwrap();

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = FEATURE_NAMES.to_vec();
        expected.sort_unstable();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, expected);
        assert_eq!(object["total_amostras"], 4.0);
    }

    #[test]
    fn test_short_signal_uses_defaults() {
        let features = features_for(&[1.0, 2.0], 3);

        assert_eq!(features.word_count, 0.0);
        assert_eq!(features.unique_words, 0.0);
        assert_eq!(features.shannon_entropy, 0.0);
        assert_eq!(features.max_frequency, 0.0);
        assert_eq!(features.min_frequency, 0.0);
        assert_eq!(features.frequency_std_dev, 0.0);
        assert_eq!(features.frequency_entropy, 0.0);
        assert_eq!(features.skewness, 0.0);
        assert_eq!(features.kurtosis, 0.0);
        assert!(features.to_array().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_frequency_entropy_is_not_normalized() {
        // Four equally likely words: normalized entropy 1.0, frequency entropy 2 bits
        let freq = FrequencyTable::from_probabilities([(0, 0.25), (1, 0.25), (2, 0.25), (3, 0.25)]);
        let binary = BinarySequence::from_symbols([0, 0, 1, 1, 0]);
        let features = extract_features(&[0.0, 0.0, 1.0, 1.0, 0.0], &binary, &[0, 1, 3, 2], &freq, 1.0, 0.4);

        assert_eq!(features.shannon_entropy, 1.0);
        assert!((features.frequency_entropy - 2.0).abs() < 1e-12);
        assert_eq!(features.frequency_std_dev, 0.0);
    }
}
