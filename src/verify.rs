//! Round-trip verification.

use std::fmt;

/// Returns true iff `a` and `b` are the same characters in the same order.
///
/// Comparison is exact and case-sensitive.
pub fn matches(a: &str, b: &str) -> bool {
    a == b
}

/// The first point at which two texts differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Both texts have a character at `index` but they differ.
    Char {
        index: usize,
        expected: char,
        found: char,
    },
    /// One text is a strict prefix of the other. Lengths are in characters.
    Length { expected: usize, found: usize },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Char {
                index,
                expected,
                found,
            } => write!(
                f,
                "character {} differs: expected {:?}, found {:?}",
                index, expected, found
            ),
            Mismatch::Length { expected, found } => write!(
                f,
                "length differs: expected {} characters, found {}",
                expected, found
            ),
        }
    }
}

/// Locates the first difference between `expected` and `found`.
///
/// Returns `None` exactly when [`matches`] returns true.
pub fn first_mismatch(expected: &str, found: &str) -> Option<Mismatch> {
    let mut left = expected.chars();
    let mut right = found.chars();
    let mut index = 0;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (Some(e), Some(f)) if e == f => index += 1,
            (Some(e), Some(f)) => {
                return Some(Mismatch::Char {
                    index,
                    expected: e,
                    found: f,
                })
            }
            _ => {
                return Some(Mismatch::Length {
                    expected: expected.chars().count(),
                    found: found.chars().count(),
                })
            }
        }
    }
}
