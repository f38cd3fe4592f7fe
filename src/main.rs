//! sms-credits: SMS segment counter and GSM-7 sanitizer
//!
//! Command-line front end for the `sms_credits` library.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
