//! Message length as carriers count it

/// Length of `message` in UTF-16 code units.
///
/// UCS-2 payloads are sized in 16-bit units, so characters outside the BMP
/// (most emoji) count twice. Every GSM-7 character is in the BMP, which makes
/// this the plain character count for GSM-7 messages.
pub fn sms_length(message: &str) -> usize {
    message.encode_utf16().count()
}
