//! Library error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmsError {
    /// Input bytes are not valid UTF-8 and cannot be treated as a message.
    #[error("message is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("lookalike pattern must not be empty")]
    EmptyLookalike,

    /// A configured replacement would itself force Unicode encoding.
    #[error("replacement {replacement:?} for lookalike {lookalike:?} contains non GSM-7 character {offending:?}")]
    UnsafeReplacement { lookalike: String, replacement: String, offending: char },
}

pub type Result<T> = std::result::Result<T, SmsError>;
