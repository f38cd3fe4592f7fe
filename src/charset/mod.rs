//! GSM-7 character set classification

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub mod gsm7;

pub use gsm7::GSM7_BASIC;

static GSM7_SET: Lazy<HashSet<char>> = Lazy::new(|| GSM7_BASIC.iter().copied().collect());

/// Returns true if `c` is part of the GSM-7 basic alphabet.
pub fn is_gsm7_char(c: char) -> bool {
    GSM7_SET.contains(&c)
}

/// Returns true if every character of `message` can be sent as GSM-7.
///
/// An empty message is GSM-7.
pub fn is_gsm7(message: &str) -> bool {
    message.chars().all(is_gsm7_char)
}

/// Characters of `message` outside the GSM-7 alphabet, in order, duplicates kept.
pub fn non_gsm7_chars(message: &str) -> impl Iterator<Item = char> + '_ {
    message.chars().filter(|&c| !is_gsm7_char(c))
}
