//! Text helpers

pub mod length;

pub use length::sms_length;
