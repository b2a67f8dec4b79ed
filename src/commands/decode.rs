//! Decode command - reverse an encoded text.

use anyhow::Result;
use clap::Args;

use keyshift::{decode_with_config, DecoderConfig};

use super::{load_config, CommandExecutor, KeyArgs, KeyPurpose, SourceArgs};

/// Decode text produced by `encode`, using the same keys and mode.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub keys: KeyArgs,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let mode = self.keys.resolve_mode(&config);
        let keys = self
            .keys
            .resolve_keys(KeyPurpose::Decoding, self.source.reads_stdin())?;
        let text = self.source.read()?;

        let decoded = decode_with_config(&text, keys, &DecoderConfig { mode });
        self.source.write(&decoded)
    }
}
