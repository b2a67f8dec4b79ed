//! Read, encode, persist, decode, verify.
//!
//! The source is read once, encoded once, written atomically, then the
//! ciphertext held in memory is decoded and compared with the source.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::cipher::ShiftMode;
use crate::decoder::{decode_with_config, DecoderConfig};
use crate::encoder::{boundary_crossings, encode_with_config, Crossing, EncoderConfig};
use crate::error::KeyshiftError;
use crate::keys::ShiftKeys;
use crate::verify::{first_mismatch, Mismatch};

/// Inputs to [`process`].
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Source text file.
    pub input: PathBuf,
    /// Destination for the encoded text.
    pub output: PathBuf,
    /// Key pair used for both directions.
    pub keys: ShiftKeys,
    /// Rotation mode used for both directions.
    pub mode: ShiftMode,
}

/// Outcome of a completed [`process`] run.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    /// Where the encoded text was written.
    pub output: PathBuf,
    /// Characters in the source.
    pub chars: usize,
    /// ASCII letters in the source (the characters that were shifted).
    pub letters: usize,
    /// Letters that changed class while encoding (wide mode only).
    pub crossings: Vec<Crossing>,
    /// First difference between source and decoded text, if any.
    pub mismatch: Option<Mismatch>,
}

impl ProcessReport {
    /// True when the decoded text matched the source exactly.
    pub fn verified(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Reads the whole source file as text.
pub fn read_source(path: &Path) -> Result<String, KeyshiftError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => KeyshiftError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => KeyshiftError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `contents` to `path` so that either all of it lands or nothing does.
///
/// Data goes to a temporary file in the destination directory, which then
/// replaces `path` with a rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), KeyshiftError> {
    let staged = stage_output(path, contents)?;
    staged.persist(path).map_err(|e| KeyshiftError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Writes and syncs `contents` to a temporary file beside `path`.
///
/// `path` itself is untouched until the returned file is persisted; dropping
/// it removes the temporary file.
fn stage_output(path: &Path, contents: &str) -> Result<NamedTempFile, KeyshiftError> {
    let write_err = |source| KeyshiftError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    Ok(tmp)
}

/// Runs the full encode, persist, decode and verify sequence.
///
/// A verification failure is reported in the returned [`ProcessReport`],
/// not as an error; errors are reserved for I/O at the boundary.
pub fn process(options: &ProcessOptions) -> Result<ProcessReport, KeyshiftError> {
    let plain = read_source(&options.input)?;
    let chars = plain.chars().count();
    let letters = plain.chars().filter(char::is_ascii_alphabetic).count();
    debug!(
        input = %options.input.display(),
        chars,
        letters,
        "read source"
    );

    let crossings = match options.mode {
        ShiftMode::Wide => boundary_crossings(&plain, options.keys),
        ShiftMode::Half => Vec::new(),
    };
    if !crossings.is_empty() {
        debug!(
            count = crossings.len(),
            keys = %options.keys,
            "letters leave their half-alphabet; decoding may not restore them"
        );
    }

    let encoded = encode_with_config(
        &plain,
        options.keys,
        &EncoderConfig { mode: options.mode },
    );
    write_atomic(&options.output, &encoded)?;
    info!(output = %options.output.display(), "encoded text saved");

    let decoded = decode_with_config(
        &encoded,
        options.keys,
        &DecoderConfig { mode: options.mode },
    );
    let mismatch = first_mismatch(&plain, &decoded);
    match &mismatch {
        None => debug!("decoded text matches source"),
        Some(m) => debug!(%m, "decoded text differs from source"),
    }

    Ok(ProcessReport {
        output: options.output.clone(),
        chars,
        letters,
        crossings,
        mismatch,
    })
}
