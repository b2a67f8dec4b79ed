//! # Keyshift - key-parameterized letter substitution
//!
//! Keyshift rotates ASCII letters by offsets derived from two integer keys,
//! `n` and `m`, and provides the inverse transform plus a check that decoding
//! gave back the original text.
//!
//! ## Rules
//!
//! Each character is classified on its own:
//!
//! | class | letters | encode offset | decode offset |
//! |-------|---------|---------------|---------------|
//! | lower-first  | `a..=m` | `+n*m`     | `-n*m`     |
//! | lower-second | `n..=z` | `-(n+m)`   | `+(n+m)`   |
//! | upper-first  | `A..=M` | `-n`       | `+n`       |
//! | upper-second | `N..=Z` | `+m^2`     | `-m^2`     |
//! | other        | anything else | unchanged | unchanged |
//!
//! All arithmetic is Euclidean modulo 26, so any `i64` key is valid.
//! Output always has the same number of characters, in the same order, as the input.
//!
//! ## Round-trip
//!
//! Decoding picks its rule from the class of the *encoded* character. In the
//! default [`ShiftMode::Wide`] a letter can be rotated into the other half of
//! its alphabet, and then the round-trip generally does not restore it;
//! [`boundary_crossings`] lists those letters ahead of time and [`matches`]
//! catches them afterwards. [`ShiftMode::Half`] rotates inside each 13-letter
//! half instead and always round-trips.
//!
//! ## Example Usage
//!
//! ```rust
//! use keyshift::{decode, encode, matches, ShiftKeys};
//!
//! let keys = ShiftKeys::new(1, 1);
//! let encoded = encode("abc", keys);
//! assert_eq!(encoded, "bcd");
//!
//! let decoded = decode(&encoded, keys);
//! assert!(matches("abc", &decoded));
//! ```
//!
//! ## Modules
//!
//! - [`cipher`]: Character classes and shift arithmetic
//! - [`encoder`] / [`decoder`]: Text transforms
//! - [`verify`]: Exact comparison and mismatch location
//! - [`pipeline`]: File-to-file encode, persist, decode and verify
//! - [`config`]: Persisted command-line defaults

/// Letters per case alphabet.
pub const ALPHABET_SIZE: i64 = 26;

pub mod cipher;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod keys;
pub mod pipeline;
pub mod verify;

// Re-export commonly used types at the crate root
pub use cipher::{classify, CharClass, ShiftMode};
pub use config::Config;
pub use decoder::{decode, decode_char, decode_with_config, DecoderConfig};
pub use encoder::{
    boundary_crossings, encode, encode_char, encode_with_config, Crossing, EncoderConfig,
};
pub use error::KeyshiftError;
pub use keys::{KeyError, KeySlot, ShiftKeys};
pub use pipeline::{process, ProcessOptions, ProcessReport};
pub use verify::{first_mismatch, matches, Mismatch};
