//! Text decoding.
//!
//! The inverse rule is chosen from the class of the character being decoded,
//! i.e. the ciphertext character. This restores the source wherever encoding
//! kept the letter in its class, which is always true in [`ShiftMode::Half`]
//! and true in [`ShiftMode::Wide`] whenever
//! [`boundary_crossings`](crate::encoder::boundary_crossings) is empty.

use crate::cipher::{classify, decode_shift, rotate, CharClass, ShiftMode};
use crate::keys::ShiftKeys;

/// Configuration for the decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderConfig {
    /// How letters are rotated. Must match the mode used to encode.
    pub mode: ShiftMode,
}

/// Decodes a single character.
pub fn decode_char(c: char, keys: ShiftKeys, mode: ShiftMode) -> char {
    match classify(c) {
        CharClass::Other => c,
        class => rotate(c, decode_shift(class, keys), mode),
    }
}

/// Decodes text with the default [`ShiftMode::Wide`] rules.
///
/// ```
/// use keyshift::{decode, ShiftKeys};
///
/// assert_eq!(decode("bcd", ShiftKeys::new(1, 1)), "abc");
/// ```
pub fn decode(text: &str, keys: ShiftKeys) -> String {
    decode_with_config(text, keys, &DecoderConfig::default())
}

/// Decodes text with an explicit configuration.
pub fn decode_with_config(text: &str, keys: ShiftKeys, config: &DecoderConfig) -> String {
    text.chars()
        .map(|c| decode_char(c, keys, config.mode))
        .collect()
}
