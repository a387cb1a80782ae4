//! JSON report for a single analysed signal

use feature_engine::{format_word, FeatureVector, PipelineResult, WordCode};
use serde::Serialize;

/// One histogram bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    pub code: WordCode,
    /// Zero-padded binary label
    pub word: String,
    pub frequency: f64,
}

/// Visualization and classifier payload for one signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub signal: String,
    pub word_width: usize,
    pub threshold: f64,
    pub entropy: f64,
    pub binary_sequence: String,
    pub histogram: Vec<HistogramBar>,
    pub features: FeatureVector,
}

impl AnalysisReport {
    pub fn new(signal: &str, word_width: usize, result: &PipelineResult) -> Self {
        Self {
            signal: signal.to_string(),
            word_width,
            threshold: result.threshold,
            entropy: result.entropy,
            binary_sequence: result.binary.to_bit_string(),
            histogram: result
                .freq
                .iter()
                .map(|(code, frequency)| HistogramBar {
                    code,
                    word: format_word(code, word_width),
                    frequency,
                })
                .collect(),
            features: result.features.clone(),
        }
    }
}
