//! Shared CLI utilities.

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use sms_credits::SmsError;
use std::io::Read;

#[derive(Args)]
pub struct MessageArgs {
    /// Message text; read from stdin when omitted or "-".
    ///
    /// To send the literal one-character message "-", pipe it through stdin.
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

impl MessageArgs {
    pub fn read(&self) -> Result<String> {
        match self.message.as_deref() {
            Some(message) if message != "-" => Ok(message.to_string()),
            _ => read_stdin(),
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes).context("Failed reading message from stdin")?;
    let text = std::str::from_utf8(&bytes).map_err(SmsError::from)?;
    Ok(strip_trailing_newline(text).to_string())
}

/// Drop the single line terminator `echo` and heredocs append.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')).unwrap_or(text)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Comma-separated list, or `-` when empty.
pub fn join_or_dash<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}
