//! Config command - inspect and initialise persisted defaults.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use keyshift::Config;

use super::CommandExecutor;

/// Manage defaults stored in ~/.keyshift/config.toml.
///
/// The file holds the default input and output paths for `process` and the
/// default rotation mode. Keys are never stored.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with the default values
    Init(ConfigInitArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Show => show_config(),
            ConfigAction::Init(args) => init_config(args),
            ConfigAction::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }
}

fn show_config() -> Result<()> {
    let path = Config::config_path()?;
    let config = Config::load().context("Failed to load configuration")?;

    let source = if path.exists() { "file" } else { "built-in defaults" };
    println!("Configuration ({}):", source);
    println!("  input:  {}", config.input.display());
    println!("  output: {}", config.output.display());
    println!("  mode:   {}", config.mode.as_str());
    Ok(())
}

fn init_config(args: &ConfigInitArgs) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !args.force {
        anyhow::bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let path = Config::default()
        .save()
        .context("Failed to save configuration")?;
    println!("Configuration written to {}", path.display());
    Ok(())
}
