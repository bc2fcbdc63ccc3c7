//! Rule application for phonetic rewrite systems.
//!
//! # Functions
//!
//! - [`apply_rule`] - Apply one rule over the whole word
//! - [`apply_rules_seq`] - Apply an ordered rule set, one pass per rule
//! - [`first_matching_rule`] - Locate the first rule that would fire
//!
//! # Application order
//!
//! Rule sets are non-confluent: applying the same rules in a different order
//! can produce a different word. [`apply_rules_seq`] therefore walks the
//! slice strictly front to back and each rule sees the cumulative output of
//! every rule before it. Unlike a fixed-point rewrite system, each rule runs
//! exactly once.

use std::borrow::Cow;

use tracing::trace;

use super::types::RewriteRule;

/// Apply a single rule to every non-overlapping match in `word`.
///
/// A rule that matches nothing returns the input borrowed.
///
/// # Examples
///
/// ```rust
/// use ru_soundex::phonetic::{apply_rule, RewriteRule};
///
/// let rule = RewriteRule::new(0, "й → j", "й", "j").unwrap();
/// assert_eq!(apply_rule(&rule, "майка"), "маjка");
/// ```
#[inline]
pub fn apply_rule<'a>(rule: &RewriteRule, word: &'a str) -> Cow<'a, str> {
    rule.rewrite(word)
}

/// Apply an ordered list of rules, each exactly once, in sequence.
///
/// # Algorithm
///
/// ```text
/// current = word
/// for each rule r in rules:
///   current = replace_all(r, current)
/// return current
/// ```
///
/// # Examples
///
/// ```rust
/// use ru_soundex::phonetic::{apply_rules_seq, russian_rules};
///
/// assert_eq!(apply_rules_seq(russian_rules(), "солнце"), "сонце");
/// ```
pub fn apply_rules_seq(rules: &[RewriteRule], word: &str) -> String {
    let mut current = word.to_owned();

    for rule in rules {
        if let Cow::Owned(rewritten) = rule.rewrite(&current) {
            trace!(
                rule = %rule.rule_name,
                from = %current,
                to = %rewritten,
                "phonetic rule applied"
            );
            current = rewritten;
        }
    }

    current
}

/// Find the first rule in `rules` that matches `word`.
///
/// Returns the rule's index in the slice, or `None` if the word is already a
/// fixed point of the rule set.
pub fn first_matching_rule(rules: &[RewriteRule], word: &str) -> Option<usize> {
    rules.iter().position(|rule| rule.matches(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::types::RuleSpec;

    fn compile(specs: &[RuleSpec]) -> Vec<RewriteRule> {
        RewriteRule::compile_all(specs).unwrap()
    }

    #[test]
    fn test_apply_rule_no_match_is_noop() {
        let rules = compile(&[("x", "щ", "ш")]);
        assert_eq!(apply_rule(&rules[0], "дом"), "дом");
    }

    #[test]
    fn test_apply_rule_replaces_all_matches() {
        let rules = compile(&[("x", "о", "а")]);
        assert_eq!(apply_rule(&rules[0], "молоко"), "малака");
    }

    #[test]
    fn test_sequential_application_sees_previous_output() {
        // The second rule only fires because the first one produced "б".
        let rules = compile(&[("а → б", "а", "б"), ("б → в", "б", "в")]);
        assert_eq!(apply_rules_seq(&rules, "а"), "в");
    }

    #[test]
    fn test_order_matters() {
        let forward = compile(&[("а → б", "а", "б"), ("б → в", "б", "в")]);
        let reversed = compile(&[("б → в", "б", "в"), ("а → б", "а", "б")]);
        assert_eq!(apply_rules_seq(&forward, "а"), "в");
        assert_eq!(apply_rules_seq(&reversed, "а"), "б");
    }

    #[test]
    fn test_each_rule_runs_once() {
        // Deleting "аб" from "ааббб" leaves "абб", which matches again.
        let rules = compile(&[("аб", "аб", "")]);
        assert_eq!(apply_rules_seq(&rules, "ааббб"), "абб");
    }

    #[test]
    fn test_empty_rule_set() {
        assert_eq!(apply_rules_seq(&[], "слово"), "слово");
    }

    #[test]
    fn test_first_matching_rule() {
        let rules = compile(&[("щ", "щ", ""), ("о", "о", ""), ("д", "д", "")]);
        assert_eq!(first_matching_rule(&rules, "дом"), Some(1));
        assert_eq!(first_matching_rule(&rules, "пук"), None);
    }
}
