//! Phonetic rewrite rules applied before Soundex classification.
//!
//! A rule set is an ordered slice of [`RewriteRule`]s. Each rule pairs a
//! case-insensitive pattern with a replacement template and is applied once,
//! over the whole word, to the output of every rule before it.
//!
//! # Usage
//!
//! ```rust
//! use ru_soundex::phonetic::{apply_rules_seq, russian_rules};
//!
//! assert_eq!(apply_rules_seq(russian_rules(), "вестна"), "весна");
//! ```
//!
//! # Rule Sets
//!
//! - [`russian_rules()`] - iotation, "й", consonant-cluster assimilation,
//!   sign deletion and affricates
//! - [`vowel_cleanup_rules()`] - vowel-pair merges for grouped vowel coding
//! - [`ending_rule()`] - "-его/-ого" → "-ево/-ово", gated by morphology

pub mod application;
mod properties;
pub mod rules;
pub mod types;

pub use application::{apply_rule, apply_rules_seq, first_matching_rule};
pub use rules::{
    ending_rule, russian_rules, vowel_cleanup_rules, ENDING_SPEC, RUSSIAN_RULE_SPECS,
    VOWEL_CLEANUP_SPECS,
};
pub use types::{RewriteRule, RuleSpec};
