//! Errors raised at the file and key-entry boundary.
//!
//! The transform itself is total; everything here comes from reading the
//! source, parsing keys, or persisting the result.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::keys::KeyError;

/// Errors produced around the encode/decode engine.
#[derive(Error, Debug)]
pub enum KeyshiftError {
    /// The source file does not exist.
    #[error("The file '{}' was not found", .path.display())]
    MissingInput { path: PathBuf },

    /// The source file exists but could not be read as text.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A key could not be parsed as an integer.
    #[error(transparent)]
    InvalidKey(#[from] KeyError),

    /// The destination could not be written. Nothing was persisted.
    #[error("Error writing to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{parse_key, KeySlot};

    #[test]
    fn test_display_missing_input() {
        let err = KeyshiftError::MissingInput {
            path: PathBuf::from("raw_text.txt"),
        };
        assert_eq!(err.to_string(), "The file 'raw_text.txt' was not found");
    }

    #[test]
    fn test_invalid_key_is_transparent() {
        let err: KeyshiftError = parse_key("x", KeySlot::First).unwrap_err().into();
        assert!(matches!(err, KeyshiftError::InvalidKey(_)));
        assert_eq!(err.to_string(), "Invalid first key 'x': expected an integer");
    }

    #[test]
    fn test_display_write() {
        let err = KeyshiftError::Write {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error writing to 'out.txt': denied");
    }
}
