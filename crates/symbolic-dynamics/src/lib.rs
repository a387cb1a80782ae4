//! Symbolic Dynamics
//!
//! Converts a raw signal into a binary symbol stream, groups the stream into
//! overlapping fixed-width words and estimates their distribution and entropy.

mod binarizer;
mod distribution;
mod entropy;
mod words;

pub use binarizer::{arithmetic_mean, binarize, BinarySequence};
pub use distribution::{estimate_frequencies, FrequencyTable};
pub use entropy::{frequency_entropy_bits, normalized_entropy, shannon_entropy};
pub use words::{encode_words, format_word, WordCode};

pub use signal_validator::SignalError;
