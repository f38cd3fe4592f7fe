//! Command-line interface for sms-credits
//!
//! Provides `count`, `sanitize` and `info` subcommands over the library facade.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sms_credits::config::load_config;
use sms_credits::domain::{Config, OutputFormat};

mod count;
mod info;
mod sanitize;
mod utils;

/// Count SMS segments and sanitize GSM-7 lookalike characters
#[derive(Parser)]
#[command(name = "sms-credits")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: sms-credits.toml or .yaml in the current directory)
    #[arg(short, long, global = true, value_name = "PATH", env = "SMS_CREDITS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of SMS segments a message needs
    Count(utils::MessageArgs),

    /// Replace lookalike characters with GSM-7 equivalents
    Sanitize(utils::MessageArgs),

    /// Show encoding, segments and sanitization details
    Info(utils::MessageArgs),
}

/// Settings resolved from config file and global flags.
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let ctx = Context { config, format };

    match cli.command {
        Commands::Count(args) => count::run(args, &ctx),
        Commands::Sanitize(args) => sanitize::run(args, &ctx),
        Commands::Info(args) => info::run(args, &ctx),
    }
}
