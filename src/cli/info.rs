//! Info command implementation

use anyhow::Result;

use super::utils::{join_or_dash, print_json, MessageArgs};
use super::Context;
use sms_credits::domain::OutputFormat;
use sms_credits::Sanitizer;

pub fn run(args: MessageArgs, ctx: &Context) -> Result<()> {
    let message = args.read()?;
    let sanitizer = Sanitizer::from_config(&ctx.config.sanitize)?;
    let info = sms_credits::info_with(&sanitizer, &message);

    if ctx.format == OutputFormat::Json {
        return print_json(&info);
    }

    println!("Encoding: {}", info.encoding);
    println!("Segments: {}", info.segments);
    println!("Chars per segment: {}", info.chars_per_segment);
    println!("Total chars: {}", info.total_chars);
    println!("Remaining in last segment: {}", info.segment_info().remaining());
    println!("Illegal characters: {}", join_or_dash(&info.illegal_characters));
    println!("Sanitized characters: {}", join_or_dash(&info.sanitized_characters));
    println!("Sanitized message:");
    println!("{}", info.sanitized_message);

    Ok(())
}
