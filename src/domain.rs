//! Result types shared by the counter, the sanitizer and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding a carrier will use for the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 7-bit GSM basic alphabet.
    Gsm7,
    /// UCS-2 / UTF-16.
    Unicode,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Gsm7 => f.write_str("gsm7"),
            Encoding::Unicode => f.write_str("unicode"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInfo {
    pub encoding: Encoding,
    pub segments: usize,
    /// Payload of each segment: 160/153 for GSM-7, 70/67 for Unicode.
    pub chars_per_segment: usize,
    /// Message length in UTF-16 code units.
    pub total_chars: usize,
}

impl SegmentInfo {
    /// Characters still available in the last segment before another one is needed.
    pub fn remaining(&self) -> usize {
        (self.segments * self.chars_per_segment).saturating_sub(self.total_chars)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SanitizeReport {
    pub original: String,
    pub sanitized_message: String,
    /// Non GSM-7 characters of the original that no lookalike rule covered,
    /// in order of appearance, duplicates kept.
    pub illegal_characters: Vec<char>,
    /// Each lookalike that was replaced, once, in rule order.
    pub sanitized_characters: Vec<String>,
}

/// Combined view returned by [`crate::info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub encoding: Encoding,
    pub segments: usize,
    pub chars_per_segment: usize,
    pub total_chars: usize,
    pub original: String,
    pub illegal_characters: Vec<char>,
    pub sanitized_characters: Vec<String>,
    pub sanitized_message: String,
}

impl MessageInfo {
    pub fn merge(segments: SegmentInfo, report: SanitizeReport) -> Self {
        Self {
            encoding: segments.encoding,
            segments: segments.segments,
            chars_per_segment: segments.chars_per_segment,
            total_chars: segments.total_chars,
            original: report.original,
            illegal_characters: report.illegal_characters,
            sanitized_characters: report.sanitized_characters,
            sanitized_message: report.sanitized_message,
        }
    }

    pub fn segment_info(&self) -> SegmentInfo {
        SegmentInfo {
            encoding: self.encoding,
            segments: self.segments,
            chars_per_segment: self.chars_per_segment,
            total_chars: self.total_chars,
        }
    }
}

/// Loaded from `sms-credits.toml` / `.yaml`; every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sanitize: SanitizeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizeConfig {
    /// Extra rules applied after the built-in lookalikes, in file order.
    pub lookalikes: Vec<CustomLookalike>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLookalike {
    pub name: Option<String>,
    pub lookalike: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
