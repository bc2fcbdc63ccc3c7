//! Concrete phonetic rewrite rule definitions for Russian.
//!
//! # Rule Sets
//!
//! - [`russian_rules()`] - Main normalization rules (15 rules)
//! - [`vowel_cleanup_rules()`] - Vowel-pair merges used with grouped vowel coding (2 rules)
//! - [`ending_rule()`] - The "-его/-ого" → "-ево/-ово" rewrite gated by morphology
//!
//! # Rule Application Order
//!
//! Rules must be applied in the order defined here. Iotation runs before the
//! soft/hard sign deletion so that "ья"/"ъе" still see the sign, and the
//! sibilant merge runs before the "дз/тс" affricate rule so that "тщ" becomes
//! "щ" rather than "цщ".

use once_cell::sync::Lazy;

use super::types::{RewriteRule, RuleSpec};

/// Main Russian normalization rules, in application order.
///
/// Iotation (rules 0-3) replaces the whole match, including the preceding
/// vowel or sign.
pub const RUSSIAN_RULE_SPECS: &[RuleSpec] = &[
    ("iotation: я → jа", "(^|[ъьаэиоуыеёюя])я", "jа"),
    ("iotation: ю → jу", "(^|[ъьаэиоуыеёюя])ю", "jу"),
    ("iotation: е → jэ", "(^|[ъьаэиоуыеёюя])е", "jэ"),
    ("iotation: ё → jо", "(^|[ъьаэиоуыеёюя])ё", "jо"),
    ("й → j", "й", "j"),
    ("sibilant merge", "[тсзжцчшщ]([жцчшщ])", "${1}"),
    ("стл/стн/стц → сл/сн/сц", "(с)т([лнц])", "${1}${2}"),
    ("нтств/ндств → нств", "(н)[тд](ств)", "${1}${2}"),
    ("нтск/ндск/стск → нск/сск", "([нс])[тд](ск)", "${1}${2}"),
    ("рдч/рдц → рч/рц", "(р)д([чц])", "${1}${2}"),
    ("здн/здц → зн/зц", "(з)д([нц])", "${1}${2}"),
    ("вств → ств", "в(ств)", "${1}"),
    ("лнц → нц", "л(нц)", "${1}"),
    ("drop ъ/ь", "[ъь]", ""),
    ("дз/дс/дц/тз/тс/тц → ц", "[дт][зсц]", "ц"),
];

/// Vowel-pair merges applied after [`RUSSIAN_RULE_SPECS`] when vowels are
/// coded by group.
pub const VOWEL_CLEANUP_SPECS: &[RuleSpec] = &[
    ("ие/ии/ио → и", "и[еио]", "и"),
    ("еа/ея/иа/ия → я", "[еи][ая]", "я"),
];

/// Word-final "-его/-ого", pronounced with "в".
pub const ENDING_SPEC: RuleSpec = ("-его/-ого → -ево/-ово", "([ео])го$", "${1}во");

static RUSSIAN_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| compile_builtin(RUSSIAN_RULE_SPECS));

static VOWEL_CLEANUP_RULES: Lazy<Vec<RewriteRule>> =
    Lazy::new(|| compile_builtin(VOWEL_CLEANUP_SPECS));

static ENDING_RULE: Lazy<RewriteRule> = Lazy::new(|| {
    let (name, pattern, replacement) = ENDING_SPEC;
    RewriteRule::new(0, name, pattern, replacement).expect("built-in rule pattern is valid")
});

fn compile_builtin(specs: &[RuleSpec]) -> Vec<RewriteRule> {
    RewriteRule::compile_all(specs).expect("built-in rule patterns are valid")
}

/// Main Russian normalization rules, compiled once per process.
pub fn russian_rules() -> &'static [RewriteRule] {
    &RUSSIAN_RULES
}

/// Vowel-pair cleanup rules for grouped vowel coding.
pub fn vowel_cleanup_rules() -> &'static [RewriteRule] {
    &VOWEL_CLEANUP_RULES
}

/// The morphology-gated ending rule.
pub fn ending_rule() -> &'static RewriteRule {
    &ENDING_RULE
}
