//! Empirical Word Distribution

use crate::words::{format_word, WordCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative frequency of each observed word code.
///
/// Keys are unique and iterate in ascending code order. Every stored
/// frequency lies in (0, 1] and the values sum to 1.0 unless the table is
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: BTreeMap<WordCode, f64>,
}

impl FrequencyTable {
    /// Build a table from explicit `(code, frequency)` pairs.
    ///
    /// Values are stored as given; later duplicates replace earlier ones.
    pub fn from_probabilities<I: IntoIterator<Item = (WordCode, f64)>>(pairs: I) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word was observed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frequency of a code, if observed
    pub fn get(&self, code: WordCode) -> Option<f64> {
        self.entries.get(&code).copied()
    }

    /// Iterate `(code, frequency)` in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (WordCode, f64)> + '_ {
        self.entries.iter().map(|(&code, &freq)| (code, freq))
    }

    /// Frequencies in ascending code order
    pub fn values(&self) -> Vec<f64> {
        self.entries.values().copied().collect()
    }

    /// Histogram bars labelled with zero-padded binary words of `width` bits
    pub fn histogram(&self, width: usize) -> Vec<(String, f64)> {
        self.iter()
            .map(|(code, freq)| (format_word(code, width), freq))
            .collect()
    }
}

/// Count each distinct word code and divide by the total number of words.
pub fn estimate_frequencies(words: &[WordCode]) -> FrequencyTable {
    if words.is_empty() {
        return FrequencyTable::default();
    }

    let mut counts: BTreeMap<WordCode, usize> = BTreeMap::new();
    for &code in words {
        *counts.entry(code).or_insert(0) += 1;
    }

    let total = words.len() as f64;
    FrequencyTable {
        entries: counts
            .into_iter()
            .map(|(code, count)| (code, count as f64 / total))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relative_frequencies() {
        let table = estimate_frequencies(&[1, 3, 6, 4, 1, 3]);
        assert_eq!(table.len(), 4);
        assert!((table.get(1).unwrap() - 2.0 / 6.0).abs() < 1e-12);
        assert!((table.get(3).unwrap() - 2.0 / 6.0).abs() < 1e-12);
        assert!((table.get(4).unwrap() - 1.0 / 6.0).abs() < 1e-12);
        assert!((table.get(6).unwrap() - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn test_empty_words() {
        let table = estimate_frequencies(&[]);
        assert!(table.is_empty());
        assert!(table.values().is_empty());
    }

    #[test]
    fn test_single_code() {
        let table = estimate_frequencies(&[7, 7, 7]);
        assert_eq!(table.values(), vec![1.0]);
    }

    #[test]
    fn test_histogram_labels_sorted() {
        let table = estimate_frequencies(&[6, 1, 1, 3]);
        let bars = table.histogram(3);
        let labels: Vec<&str> = bars.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["001", "011", "110"]);
        assert!((bars[0].1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_json_keys() {
        let table = FrequencyTable::from_probabilities([(0, 0.25), (2, 0.75)]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["entries"]["2"], 0.75);
    }

    proptest! {
        #[test]
        fn frequencies_sum_to_one(words in proptest::collection::vec(0u64..8, 1..300)) {
            let table = estimate_frequencies(&words);
            let sum: f64 = table.values().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert!(table.values().iter().all(|&p| p > 0.0 && p <= 1.0));
        }
    }
}
