//! Encode command - shift the letters of a text.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use keyshift::{boundary_crossings, encode_with_config, EncoderConfig, ShiftMode};

use super::{load_config, CommandExecutor, KeyArgs, KeyPurpose, SourceArgs};

/// Encode text with two integer keys.
///
/// Letters are shifted according to their case and alphabet half; digits,
/// punctuation, whitespace and non-ASCII characters are copied unchanged.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub keys: KeyArgs,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config()?;
        let mode = self.keys.resolve_mode(&config);
        let keys = self
            .keys
            .resolve_keys(KeyPurpose::Encoding, self.source.reads_stdin())?;
        let text = self.source.read()?;

        if mode == ShiftMode::Wide {
            let crossings = boundary_crossings(&text, keys);
            if !crossings.is_empty() {
                eprintln!(
                    "Warning: {} letter(s) will not decode back to the original with keys {}.",
                    crossings.len(),
                    keys
                );
                for c in &crossings {
                    debug!(index = c.index, source = ?c.source, encoded = ?c.encoded, "crossing");
                }
            }
        }

        let encoded = encode_with_config(&text, keys, &EncoderConfig { mode });
        self.source.write(&encoded)
    }
}
