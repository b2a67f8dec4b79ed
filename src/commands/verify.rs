//! Verify command - compare a recovered text with its original.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use keyshift::pipeline::read_source;
use keyshift::{first_mismatch, matches};

use super::CommandExecutor;

/// Check that two files hold exactly the same text.
#[derive(Args, Debug)]
pub struct VerifyCommand {
    /// The original text file
    #[arg(long)]
    pub original: PathBuf,

    /// The recovered (decoded) text file
    #[arg(long)]
    pub recovered: PathBuf,
}

impl CommandExecutor for VerifyCommand {
    fn execute(&self) -> Result<()> {
        let original = read_source(&self.original)?;
        let recovered = read_source(&self.recovered)?;

        if matches(&original, &recovered) {
            println!("The recovered text matches the original.");
            return Ok(());
        }

        match first_mismatch(&original, &recovered) {
            Some(mismatch) => anyhow::bail!("Texts differ: {}", mismatch),
            None => anyhow::bail!("Texts differ"),
        }
    }
}
