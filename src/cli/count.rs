//! Count command implementation

use anyhow::Result;

use super::utils::{print_json, MessageArgs};
use super::Context;
use sms_credits::domain::OutputFormat;

pub fn run(args: MessageArgs, ctx: &Context) -> Result<()> {
    let message = args.read()?;
    let info = sms_credits::calculate(&message);

    match ctx.format {
        OutputFormat::Text => println!("{}", info.segments),
        OutputFormat::Json => print_json(&info)?,
    }
    Ok(())
}
