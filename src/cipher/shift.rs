//! Shift arithmetic over the 26-letter alphabet.
//!
//! Keys are reduced into `[0, 26)` before they are combined, so
//! `n * m`, `n + m` and `m^2` are evaluated on small values and no key pair
//! can overflow. Reduction commutes with these operations, so the offsets are
//! the same as evaluating the full-width expressions with a floor modulo.

use serde::{Deserialize, Serialize};

use super::class::{classify, letter_value, CharClass};
use crate::keys::ShiftKeys;
use crate::ALPHABET_SIZE;

/// Size of one half-alphabet (`a..=m`, `n..=z`, `A..=M`, `N..=Z`).
pub const HALF_SIZE: u8 = 13;

/// How a letter is rotated once its offset is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftMode {
    /// Rotate within the whole 26-letter alphabet of the letter's case.
    ///
    /// A letter may land in the other half of its alphabet, in which case
    /// `decode` applies the other half's inverse and the round-trip breaks.
    #[default]
    Wide,
    /// Rotate within the letter's own 13-letter half.
    ///
    /// Every letter keeps its class, so decoding always restores the input.
    Half,
}

impl ShiftMode {
    /// Parses `"wide"` or `"half"` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wide" => Some(ShiftMode::Wide),
            "half" => Some(ShiftMode::Half),
            _ => None,
        }
    }

    /// Lowercase name, the inverse of [`ShiftMode::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftMode::Wide => "wide",
            ShiftMode::Half => "half",
        }
    }
}

/// Reduces any integer into `[0, 26)` using Euclidean (floor) modulo.
///
/// Equivalent to `((x % 26) + 26) % 26`; never returns a negative index.
pub fn wrap(x: i64) -> u8 {
    x.rem_euclid(ALPHABET_SIZE) as u8
}

/// Offset that `encode` adds to a letter of the given class.
pub fn encode_shift(class: CharClass, keys: ShiftKeys) -> u8 {
    let n = i64::from(wrap(keys.n));
    let m = i64::from(wrap(keys.m));
    match class {
        CharClass::LowerFirst => wrap(n * m),
        CharClass::LowerSecond => wrap(-(n + m)),
        CharClass::UpperFirst => wrap(-n),
        CharClass::UpperSecond => wrap(m * m),
        CharClass::Other => 0,
    }
}

/// Offset that `decode` adds to a letter of the given class.
///
/// For every class, `encode_shift + decode_shift ≡ 0 (mod 26)`.
pub fn decode_shift(class: CharClass, keys: ShiftKeys) -> u8 {
    let n = i64::from(wrap(keys.n));
    let m = i64::from(wrap(keys.m));
    match class {
        CharClass::LowerFirst => wrap(-(n * m)),
        CharClass::LowerSecond => wrap(n + m),
        CharClass::UpperFirst => wrap(n),
        CharClass::UpperSecond => wrap(-(m * m)),
        CharClass::Other => 0,
    }
}

/// Rotates a letter by `offset` positions.
///
/// Case is always preserved; non-letters are returned unchanged. In
/// [`ShiftMode::Half`] the offset is taken modulo 13 and applied within the
/// letter's half-alphabet.
pub fn rotate(c: char, offset: u8, mode: ShiftMode) -> char {
    let (Some(value), Some(base)) = (letter_value(c), classify(c).base()) else {
        return c;
    };
    let base = base as u8;
    match mode {
        ShiftMode::Wide => char::from(base + wrap(i64::from(value) + i64::from(offset))),
        ShiftMode::Half => {
            let half_start = value - value % HALF_SIZE;
            let within = (value % HALF_SIZE + offset % HALF_SIZE) % HALF_SIZE;
            char::from(base + half_start + within)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_matches_normalizing_formula() {
        for x in -200i64..200 {
            assert_eq!(i64::from(wrap(x)), ((x % 26) + 26) % 26, "x = {}", x);
        }
    }

    #[test]
    fn test_wrap_negative_and_extreme_values() {
        assert_eq!(wrap(-1), 25);
        assert_eq!(wrap(-26), 0);
        assert_eq!(wrap(-27), 25);
        assert_eq!(i64::from(wrap(i64::MIN)), ((i64::MIN % 26) + 26) % 26);
        assert_eq!(i64::from(wrap(i64::MAX)), i64::MAX % 26);
    }

    #[test]
    fn test_encode_shift_per_class() {
        let keys = ShiftKeys::new(2, 3);
        assert_eq!(encode_shift(CharClass::LowerFirst, keys), 6);
        assert_eq!(encode_shift(CharClass::LowerSecond, keys), 21);
        assert_eq!(encode_shift(CharClass::UpperFirst, keys), 24);
        assert_eq!(encode_shift(CharClass::UpperSecond, keys), 9);
        assert_eq!(encode_shift(CharClass::Other, keys), 0);
    }

    #[test]
    fn test_shifts_cancel_for_every_class() {
        let key_values = [i64::MIN, -1_000_003, -27, -1, 0, 1, 13, 26, 999_983, i64::MAX];
        for &n in &key_values {
            for &m in &key_values {
                let keys = ShiftKeys::new(n, m);
                for class in CharClass::ALL {
                    let sum = u32::from(encode_shift(class, keys))
                        + u32::from(decode_shift(class, keys));
                    assert_eq!(sum % 26, 0, "class {:?}, n={}, m={}", class, n, m);
                }
            }
        }
    }

    #[test]
    fn test_reduced_keys_agree_with_full_width_arithmetic() {
        for n in -60i64..60 {
            for m in -60i64..60 {
                let keys = ShiftKeys::new(n, m);
                assert_eq!(
                    i64::from(encode_shift(CharClass::LowerFirst, keys)),
                    (n * m).rem_euclid(26)
                );
                assert_eq!(
                    i64::from(encode_shift(CharClass::LowerSecond, keys)),
                    (-(n + m)).rem_euclid(26)
                );
                assert_eq!(
                    i64::from(encode_shift(CharClass::UpperFirst, keys)),
                    (-n).rem_euclid(26)
                );
                assert_eq!(
                    i64::from(encode_shift(CharClass::UpperSecond, keys)),
                    (m * m).rem_euclid(26)
                );
            }
        }
    }

    #[test]
    fn test_rotate_wide_wraps_within_alphabet() {
        assert_eq!(rotate('z', 1, ShiftMode::Wide), 'a');
        assert_eq!(rotate('Z', 1, ShiftMode::Wide), 'A');
        assert_eq!(rotate('X', 9, ShiftMode::Wide), 'G');
        assert_eq!(rotate('m', 1, ShiftMode::Wide), 'n');
        assert_eq!(rotate('a', 0, ShiftMode::Wide), 'a');
    }

    #[test]
    fn test_rotate_half_stays_in_half() {
        assert_eq!(rotate('m', 1, ShiftMode::Half), 'a');
        assert_eq!(rotate('z', 1, ShiftMode::Half), 'n');
        assert_eq!(rotate('X', 9, ShiftMode::Half), 'T');
        assert_eq!(rotate('M', 13, ShiftMode::Half), 'M');
        assert_eq!(rotate('b', 25, ShiftMode::Half), 'a');
        for c in ('a'..='z').chain('A'..='Z') {
            for offset in 0..26 {
                assert_eq!(classify(rotate(c, offset, ShiftMode::Half)), classify(c));
            }
        }
    }

    #[test]
    fn test_rotate_leaves_non_letters() {
        for mode in [ShiftMode::Wide, ShiftMode::Half] {
            assert_eq!(rotate('7', 5, mode), '7');
            assert_eq!(rotate('é', 5, mode), 'é');
            assert_eq!(rotate(' ', 5, mode), ' ');
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(ShiftMode::parse("wide"), Some(ShiftMode::Wide));
        assert_eq!(ShiftMode::parse("HALF"), Some(ShiftMode::Half));
        assert_eq!(ShiftMode::parse("full"), None);
        assert_eq!(ShiftMode::default(), ShiftMode::Wide);
        assert_eq!(ShiftMode::parse(ShiftMode::Half.as_str()), Some(ShiftMode::Half));
    }
}
