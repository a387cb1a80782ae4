//! Sliding-Window Word Encoder

use crate::binarizer::BinarySequence;
use signal_validator::{SignalError, Validator};

/// Integer value of an m-symbol word read most significant bit first
pub type WordCode = u64;

/// Slide a width-`width` window (stride 1) over the sequence and encode each
/// window as a word code.
///
/// A sequence shorter than the window yields no words.
pub fn encode_words(binary: &BinarySequence, width: usize) -> Result<Vec<WordCode>, SignalError> {
    Validator::default().validate_word_width(width)?;

    Ok(binary
        .as_slice()
        .windows(width)
        .map(|window| {
            window
                .iter()
                .fold(0, |code: WordCode, &bit| (code << 1) | WordCode::from(bit))
        })
        .collect())
}

/// Zero-padded binary label of a word code, e.g. `3` at width 3 is `"011"`
pub fn format_word(code: WordCode, width: usize) -> String {
    format!("{:0width$b}", code, width = width)
}
