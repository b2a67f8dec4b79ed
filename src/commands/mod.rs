//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod config;
mod decode;
mod encode;
mod process;
mod verify;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use process::ProcessCommand;
pub use verify::VerifyCommand;

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use keyshift::keys::{parse_key, KeySlot};
use keyshift::{Config, ShiftKeys, ShiftMode};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Rotation mode as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Rotate within the whole 26-letter alphabet (reference rules)
    Wide,
    /// Rotate within each 13-letter half (always reversible)
    Half,
}

impl From<ModeArg> for ShiftMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Wide => ShiftMode::Wide,
            ModeArg::Half => ShiftMode::Half,
        }
    }
}

/// Key and mode flags shared by every transforming command.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// First key (any integer). Prompted for if omitted
    #[arg(short = 'n', long = "key-n", allow_negative_numbers = true)]
    pub key_n: Option<String>,

    /// Second key (any integer). Prompted for if omitted
    #[arg(short = 'm', long = "key-m", allow_negative_numbers = true)]
    pub key_m: Option<String>,

    /// Rotation mode (defaults to the configured mode, normally "wide")
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Which transform keys are entered for. Only changes the prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPurpose {
    Encoding,
    Decoding,
}

impl fmt::Display for KeyPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPurpose::Encoding => write!(f, "encoding"),
            KeyPurpose::Decoding => write!(f, "decoding"),
        }
    }
}

impl KeyArgs {
    /// Returns the key pair, prompting on the terminal for any key not given.
    ///
    /// Prompts go to stderr so they never mix with a result on stdout. When
    /// stdin already carries the text, both keys must come from flags.
    pub fn resolve_keys(&self, purpose: KeyPurpose, stdin_has_text: bool) -> Result<ShiftKeys> {
        if stdin_has_text && (self.key_n.is_none() || self.key_m.is_none()) {
            anyhow::bail!(
                "Both keys must be given with -n/--key-n and -m/--key-m when the text is read from stdin"
            );
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompt = io::stderr();
        self.resolve_keys_from(purpose, &mut input, &mut prompt)
    }

    /// Same as [`KeyArgs::resolve_keys`], reading answers from `input` and
    /// writing prompts to `prompt`.
    pub fn resolve_keys_from<R: BufRead, W: Write>(
        &self,
        purpose: KeyPurpose,
        input: &mut R,
        prompt: &mut W,
    ) -> Result<ShiftKeys> {
        let n = resolve_key(self.key_n.as_deref(), KeySlot::First, purpose, input, prompt)?;
        let m = resolve_key(self.key_m.as_deref(), KeySlot::Second, purpose, input, prompt)?;
        Ok(ShiftKeys::new(n, m))
    }

    /// Returns the mode flag, falling back to the configuration.
    pub fn resolve_mode(&self, config: &Config) -> ShiftMode {
        self.mode.map(ShiftMode::from).unwrap_or(config.mode)
    }
}

fn resolve_key<R: BufRead, W: Write>(
    flag: Option<&str>,
    slot: KeySlot,
    purpose: KeyPurpose,
    input: &mut R,
    prompt: &mut W,
) -> Result<i64> {
    match flag {
        Some(text) => Ok(parse_key(text, slot)?),
        None => prompt_key(slot, purpose, input, prompt),
    }
}

/// Asks for one key and reads a line as the answer.
fn prompt_key<R: BufRead, W: Write>(
    slot: KeySlot,
    purpose: KeyPurpose,
    input: &mut R,
    prompt: &mut W,
) -> Result<i64> {
    write!(prompt, "Enter the {} {} key (an integer): ", slot, purpose)?;
    prompt.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read key from stdin")?;

    Ok(parse_key(&line, slot)?)
}

/// Source text for `encode`/`decode`: a literal, a file, or stdin.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Text to transform (mutually exclusive with --input)
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    /// File to transform (mutually exclusive with --text)
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// True when the text will be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.text.is_none() && self.input.is_none()
    }

    /// Reads the source text. Stdin is read verbatim, without trimming.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.input {
            return Ok(keyshift::pipeline::read_source(path)?);
        }

        eprintln!("Reading text from stdin (Ctrl+D to finish):");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read text from stdin")?;
        Ok(buffer)
    }

    /// Writes the result atomically to --output, or to stdout.
    pub fn write(&self, result: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                keyshift::pipeline::write_atomic(path, result)?;
                eprintln!("Result saved to '{}'.", path.display());
            }
            None => {
                let stdout = io::stdout();
                let terminal = stdout.is_terminal();
                write_result(&mut stdout.lock(), result, terminal)?;
            }
        }
        Ok(())
    }
}

/// Writes `result` verbatim. A newline is appended only for display on a
/// terminal, never when the output is piped or redirected.
fn write_result<W: Write>(out: &mut W, result: &str, terminal: bool) -> Result<()> {
    out.write_all(result.as_bytes())?;
    if terminal && !result.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Loads the configuration, with context for the error message.
pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load configuration")
}
