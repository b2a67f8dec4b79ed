//! Keyshift - key-parameterized letter substitution
//!
//! A CLI tool that encodes text with two integer keys, saves the result,
//! and verifies that decoding gives back the original.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{
    CommandExecutor, ConfigCommand, DecodeCommand, EncodeCommand, ProcessCommand, VerifyCommand,
};

/// Keyshift - key-parameterized letter substitution
///
/// Shifts ASCII letters by offsets derived from two integer keys and
/// verifies that the inverse restores the original text.
#[derive(Parser)]
#[command(name = "keyshift")]
#[command(version)]
#[command(about = "Key-parameterized letter substitution with round-trip verification")]
#[command(long_about = None)]
struct Cli {
    /// Show diagnostic logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file, save it, decode it and verify the round-trip
    Process(ProcessCommand),

    /// Encode text or a file
    Encode(EncodeCommand),

    /// Decode text or a file
    Decode(DecodeCommand),

    /// Compare an original file with a recovered one
    Verify(VerifyCommand),

    /// Manage persisted defaults
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Process(cmd) => cmd.execute(),
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Verify(cmd) => cmd.execute(),
        Commands::Config(cmd) => cmd.execute(),
    }
}

/// Installs the stderr log subscriber. `-v` raises the default level to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
