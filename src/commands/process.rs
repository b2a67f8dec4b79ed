//! Process command - encode a file, save it, decode it and verify.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use keyshift::{process, KeyshiftError, ProcessOptions};

use super::{load_config, CommandExecutor, KeyArgs, KeyPurpose};

/// Encode a source file, save the result, then check that decoding restores it.
///
/// Keys not given with -n/-m are prompted for. Exits with an error when the
/// decoded text differs from the source.
#[derive(Args, Debug)]
pub struct ProcessCommand {
    /// Source text file (default from config, normally raw_text.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination for the encoded text (default from config, normally encrypted_text.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub keys: KeyArgs,
}

impl CommandExecutor for ProcessCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let input = self.input.clone().unwrap_or_else(|| config.input.clone());
        let output = self.output.clone().unwrap_or_else(|| config.output.clone());
        let mode = self.keys.resolve_mode(&config);

        // A missing source is reported before any key is prompted for.
        // read_source still maps a later NotFound to the same error.
        if !input.exists() {
            return Err(KeyshiftError::MissingInput { path: input }.into());
        }

        let keys = self.keys.resolve_keys(KeyPurpose::Encoding, false)?;
        debug!(%keys, mode = mode.as_str(), "starting process");

        let options = ProcessOptions {
            input,
            output,
            keys,
            mode,
        };
        let report = process(&options).context("Processing failed")?;

        println!(
            "Encoding complete. Encoded text saved to '{}'.",
            report.output.display()
        );

        if !report.crossings.is_empty() {
            eprintln!(
                "Warning: {} letter(s) were rotated into the other half of their alphabet.",
                report.crossings.len()
            );
            eprintln!("         Use --mode half for a transform that always reverses.");
        }

        match report.mismatch {
            None => {
                println!("Decoding successful! The recovered text matches the original.");
                Ok(())
            }
            Some(mismatch) => anyhow::bail!(
                "Decoding verification failed. The recovered text is different from the original ({}).",
                mismatch
            ),
        }
    }
}
