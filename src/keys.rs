//! The key pair shared by a matched encode/decode.

use std::fmt;

use thiserror::Error;

/// Which of the two keys a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    /// The first key, `n`.
    First,
    /// The second key, `m`.
    Second,
}

impl fmt::Display for KeySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySlot::First => write!(f, "first"),
            KeySlot::Second => write!(f, "second"),
        }
    }
}

/// A key could not be read as an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {slot} key '{input}': expected an integer")]
pub struct KeyError {
    /// Which key was being parsed.
    pub slot: KeySlot,
    /// The rejected text, trimmed.
    pub input: String,
}

/// The two integer keys `n` and `m`.
///
/// Any `i64` is accepted, including zero and negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftKeys {
    pub n: i64,
    pub m: i64,
}

impl ShiftKeys {
    pub const fn new(n: i64, m: i64) -> Self {
        Self { n, m }
    }

    /// Parses both keys from text.
    pub fn parse(n: &str, m: &str) -> Result<Self, KeyError> {
        Ok(Self {
            n: parse_key(n, KeySlot::First)?,
            m: parse_key(m, KeySlot::Second)?,
        })
    }
}

impl fmt::Display for ShiftKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(n={}, m={})", self.n, self.m)
    }
}

/// Parses a single key, ignoring surrounding whitespace.
///
/// A leading `+` or `-` sign is allowed.
pub fn parse_key(input: &str, slot: KeySlot) -> Result<i64, KeyError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| KeyError {
        slot,
        input: trimmed.to_string(),
    })
}
