//! Text encoding.
//!
//! Each character is classified on its own, given the offset for its class,
//! and rotated. Non-letters are copied through, so the output always has the
//! same number of characters, in the same order, as the input.

use crate::cipher::{classify, encode_shift, rotate, CharClass, ShiftMode};
use crate::keys::ShiftKeys;

/// Configuration for the encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncoderConfig {
    /// How letters are rotated.
    pub mode: ShiftMode,
}

/// A letter whose [`ShiftMode::Wide`] encoding lands in a different class.
///
/// Decoding dispatches on the class of the encoded letter, so at a crossing
/// the other class's inverse is applied and the source is restored only if
/// both classes happen to use the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// Character (not byte) index in the text.
    pub index: usize,
    /// The source letter.
    pub source: char,
    /// What it encodes to.
    pub encoded: char,
}

/// Encodes a single character.
pub fn encode_char(c: char, keys: ShiftKeys, mode: ShiftMode) -> char {
    match classify(c) {
        CharClass::Other => c,
        class => rotate(c, encode_shift(class, keys), mode),
    }
}

/// Encodes text with the default [`ShiftMode::Wide`] rules.
///
/// # Example
///
/// ```
/// use keyshift::{encode, ShiftKeys};
///
/// assert_eq!(encode("abc", ShiftKeys::new(1, 1)), "bcd");
/// assert_eq!(encode("XYZ", ShiftKeys::new(2, 3)), "GHI");
/// ```
pub fn encode(text: &str, keys: ShiftKeys) -> String {
    encode_with_config(text, keys, &EncoderConfig::default())
}

/// Encodes text with an explicit configuration.
pub fn encode_with_config(text: &str, keys: ShiftKeys, config: &EncoderConfig) -> String {
    text.chars()
        .map(|c| encode_char(c, keys, config.mode))
        .collect()
}

/// Lists the letters that would change class under [`ShiftMode::Wide`].
///
/// An empty result means `decode(encode(text))` reproduces `text` exactly.
pub fn boundary_crossings(text: &str, keys: ShiftKeys) -> Vec<Crossing> {
    text.chars()
        .enumerate()
        .filter_map(|(index, source)| {
            let encoded = encode_char(source, keys, ShiftMode::Wide);
            (classify(encoded) != classify(source)).then_some(Crossing {
                index,
                source,
                encoded,
            })
        })
        .collect()
}
