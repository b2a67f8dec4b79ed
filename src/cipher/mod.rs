//! Letter classification and shift arithmetic.
//!
//! This module provides:
//! - Five-way character classification (four letter half-alphabets plus "other")
//! - Euclidean reduction into the 26-letter alphabet
//! - Per-class encode/decode offsets derived from a key pair

pub mod class;
pub mod shift;

pub use class::{classify, CharClass};
pub use shift::{decode_shift, encode_shift, rotate, wrap, ShiftMode, HALF_SIZE};
