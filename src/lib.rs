//! sms-credits: SMS segment counting and GSM-7 sanitization
//!
//! Classifies a message as GSM-7 or Unicode, computes how many concatenated
//! SMS segments it occupies, and rewrites typographic lookalikes (curly
//! quotes, dashes, `€`, `©`, ...) into GSM-7 safe text.
//!
//! ```
//! assert_eq!(sms_credits::count("a".repeat(161).as_str()), 2);
//! assert_eq!(sms_credits::sanitize("“hi” – ok"), "\"hi\" - ok");
//!
//! let info = sms_credits::info("Price: €5 😊");
//! assert_eq!(info.sanitized_characters, vec!["€".to_string()]);
//! assert_eq!(info.illegal_characters, vec!['😊']);
//! ```

pub mod charset;
pub mod config;
pub mod domain;
pub mod error;
pub mod sanitize;
pub mod segment;
pub mod utils;

pub use charset::is_gsm7;
pub use domain::{Encoding, MessageInfo, SanitizeReport, SegmentInfo};
pub use error::SmsError;
pub use sanitize::Sanitizer;
pub use segment::calculate;

/// Number of SMS segments needed to send `message`.
pub fn count(message: &str) -> usize {
    segment::calculate(message).segments
}

/// `message` with every known lookalike replaced by its GSM-7 equivalent.
pub fn sanitize(message: &str) -> String {
    Sanitizer::new().sanitize(message).sanitized_message
}

/// Segment details and sanitization report for `message`.
///
/// Encoding and segment fields describe the message as given, not the
/// sanitized text.
pub fn info(message: &str) -> MessageInfo {
    info_with(&Sanitizer::new(), message)
}

/// Same as [`info`] with a caller-provided sanitizer (e.g. one built from config).
pub fn info_with(sanitizer: &Sanitizer, message: &str) -> MessageInfo {
    let segments = segment::calculate(message);
    let report = sanitizer.sanitize(message);
    MessageInfo::merge(segments, report)
}
