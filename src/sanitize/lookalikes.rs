//! Lookalike rules
//!
//! ORDER MATTERS: rules are applied top to bottom on the working copy, so a
//! replacement produced by an earlier rule is visible to later ones. Rules
//! loaded from config are appended after these.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookalikeRule {
    pub name: Cow<'static, str>,
    pub lookalike: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
}

impl LookalikeRule {
    const fn builtin(
        name: &'static str,
        lookalike: &'static str,
        replacement: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            lookalike: Cow::Borrowed(lookalike),
            replacement: Cow::Borrowed(replacement),
        }
    }
}

pub const DEFAULT_LOOKALIKES: &[LookalikeRule] = &[
    // ── Dashes ───────────────────────────────────────────────────────────────
    LookalikeRule::builtin("en_dash", "–", "-"),
    LookalikeRule::builtin("em_dash", "—", "-"),
    // ── Quotes ───────────────────────────────────────────────────────────────
    LookalikeRule::builtin("left_single_quote", "‘", "'"),
    LookalikeRule::builtin("right_single_quote", "’", "'"),
    LookalikeRule::builtin("left_double_quote", "“", "\""),
    LookalikeRule::builtin("right_double_quote", "”", "\""),
    // ── Symbols ──────────────────────────────────────────────────────────────
    LookalikeRule::builtin("ellipsis", "…", "..."),
    LookalikeRule::builtin("degree", "°", "o"),
    LookalikeRule::builtin("copyright", "©", "(c)"),
    LookalikeRule::builtin("registered", "®", "(r)"),
    LookalikeRule::builtin("trademark", "™", "(tm)"),
    LookalikeRule::builtin("euro", "€", "EUR"),
    LookalikeRule::builtin("bullet", "•", "*"),
    // ── Guillemets ───────────────────────────────────────────────────────────
    LookalikeRule::builtin("right_guillemet", "»", ">>"),
    LookalikeRule::builtin("left_guillemet", "«", "<<"),
];
