//! Sanitize command implementation

use anyhow::Result;

use super::utils::{print_json, MessageArgs};
use super::Context;
use sms_credits::domain::OutputFormat;
use sms_credits::Sanitizer;

pub fn run(args: MessageArgs, ctx: &Context) -> Result<()> {
    let message = args.read()?;
    let sanitizer = Sanitizer::from_config(&ctx.config.sanitize)?;
    let report = sanitizer.sanitize(&message);

    match ctx.format {
        OutputFormat::Text => println!("{}", report.sanitized_message),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}
