//! Type definitions for phonetic rewrite rules.
//!
//! A [`RewriteRule`] pairs a compiled pattern with a replacement template.
//! Templates use the `regex` crate syntax, so `${1}` refers to the first
//! capture group of the pattern.

use std::borrow::Cow;
use std::fmt;

use regex::{Regex, RegexBuilder};

/// Declarative form of a rewrite rule: `(name, pattern, replacement)`.
///
/// Rule sets are written as ordered slices of these and compiled once.
pub type RuleSpec = (&'static str, &'static str, &'static str);

/// A phonetic rewrite rule.
///
/// Patterns are matched case-insensitively over the whole word. Every
/// non-overlapping match is replaced, scanning left to right.
///
/// # Fields
///
/// - `rule_id` - Position of the rule in its rule set
/// - `rule_name` - Human-readable name (for debugging/documentation)
/// - `pattern` - Compiled match pattern
/// - `replacement` - Replacement template
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Position of the rule in its rule set
    pub rule_id: usize,
    /// Human-readable name
    pub rule_name: String,
    /// Compiled pattern
    pub pattern: Regex,
    /// Replacement template (`${n}` refers to capture group `n`)
    pub replacement: String,
}

impl RewriteRule {
    /// Compile a rule from its pattern source.
    ///
    /// # Errors
    ///
    /// Returns the `regex` compile error if `pattern` is not a valid regex.
    pub fn new(
        rule_id: usize,
        rule_name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(RewriteRule {
            rule_id,
            rule_name: rule_name.into(),
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Compile an ordered rule set, numbering rules from zero.
    pub fn compile_all(specs: &[RuleSpec]) -> Result<Vec<Self>, regex::Error> {
        specs
            .iter()
            .enumerate()
            .map(|(id, (name, pattern, replacement))| {
                RewriteRule::new(id, *name, pattern, *replacement)
            })
            .collect()
    }

    /// Returns true if the rule matches anywhere in `word`.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    /// Rewrite every match of this rule in `word`.
    ///
    /// Borrows the input unchanged when nothing matches.
    #[inline]
    pub fn rewrite<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(word, self.replacement.as_str())
    }
}

impl PartialEq for RewriteRule {
    fn eq(&self, other: &Self) -> bool {
        self.rule_id == other.rule_id
            && self.rule_name == other.rule_name
            && self.pattern.as_str() == other.pattern.as_str()
            && self.replacement == other.replacement
    }
}

impl Eq for RewriteRule {}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}: /{}/ → \"{}\"",
            self.rule_id,
            self.rule_name,
            self.pattern.as_str(),
            self.replacement
        )
    }
}
