//! Lookalike sanitization

pub mod lookalikes;
pub mod sanitizer;

pub use lookalikes::{LookalikeRule, DEFAULT_LOOKALIKES};
pub use sanitizer::Sanitizer;
