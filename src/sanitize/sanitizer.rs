//! Sanitizer implementation

use crate::charset::{is_gsm7_char, non_gsm7_chars};
use crate::domain::{CustomLookalike, SanitizeConfig, SanitizeReport};
use crate::error::{Result, SmsError};
use crate::sanitize::lookalikes::{LookalikeRule, DEFAULT_LOOKALIKES};
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Sanitizer {
    rules: Vec<LookalikeRule>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self { rules: DEFAULT_LOOKALIKES.to_vec() }
    }

    /// Build a `Sanitizer` with the configured lookalikes appended to the defaults.
    pub fn from_config(cfg: &SanitizeConfig) -> Result<Self> {
        let mut sanitizer = Self::new();
        for custom in &cfg.lookalikes {
            sanitizer = sanitizer.with_rule(compile_custom_rule(custom)?);
        }
        Ok(sanitizer)
    }

    pub fn with_rule(mut self, rule: LookalikeRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[LookalikeRule] {
        &self.rules
    }

    pub fn sanitize(&self, message: &str) -> SanitizeReport {
        let mut illegal_characters: Vec<char> = non_gsm7_chars(message).collect();
        let mut sanitized_characters = Vec::new();
        let mut working = message.to_string();

        for rule in &self.rules {
            let occurrences = working.matches(&*rule.lookalike).count();
            if occurrences == 0 {
                continue;
            }
            working = working.replace(&*rule.lookalike, &rule.replacement);
            forget_replaced(&mut illegal_characters, &rule.lookalike, occurrences);
            sanitized_characters.push(rule.lookalike.to_string());
            tracing::debug!(rule = %rule.name, occurrences, "replaced lookalike");
        }

        if !illegal_characters.is_empty() {
            tracing::debug!(
                count = illegal_characters.len(),
                "characters left without a GSM-7 lookalike"
            );
        }

        SanitizeReport {
            original: message.to_string(),
            sanitized_message: working,
            illegal_characters,
            sanitized_characters,
        }
    }

    /// Sanitize raw bytes, rejecting anything that is not UTF-8 text.
    pub fn sanitize_bytes(&self, bytes: &[u8]) -> Result<SanitizeReport> {
        let message = std::str::from_utf8(bytes)?;
        Ok(self.sanitize(message))
    }
}

/// Drop the characters of a replaced lookalike from the illegal list.
///
/// A single-character lookalike clears every entry of that character. A
/// sequence clears one entry per matched occurrence for each of its non GSM-7
/// characters, so characters outside the matched sequence stay reported.
fn forget_replaced(illegal: &mut Vec<char>, lookalike: &str, occurrences: usize) {
    let mut chars = lookalike.chars();
    if let (Some(single), None) = (chars.next(), chars.next()) {
        illegal.retain(|&c| c != single);
        return;
    }

    for c in lookalike.chars().filter(|&c| !is_gsm7_char(c)) {
        for _ in 0..occurrences {
            match illegal.iter().position(|&found| found == c) {
                Some(pos) => {
                    illegal.remove(pos);
                }
                None => break,
            }
        }
    }
}

fn compile_custom_rule(custom: &CustomLookalike) -> Result<LookalikeRule> {
    if custom.lookalike.is_empty() {
        return Err(SmsError::EmptyLookalike);
    }
    if let Some(offending) = custom.replacement.chars().find(|&c| !is_gsm7_char(c)) {
        return Err(SmsError::UnsafeReplacement {
            lookalike: custom.lookalike.clone(),
            replacement: custom.replacement.clone(),
            offending,
        });
    }
    let name = custom.name.clone().unwrap_or_else(|| "custom".to_string());
    Ok(LookalikeRule {
        name: Cow::Owned(name),
        lookalike: Cow::Owned(custom.lookalike.clone()),
        replacement: Cow::Owned(custom.replacement.clone()),
    })
}
