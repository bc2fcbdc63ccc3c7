//! Soundex encoding pipeline.
//!
//! The pipeline is shared by every language; a [`PhoneticLanguage`] plugs in
//! the pieces that differ (the translation table, spelling normalization and
//! the vowel translation). Per word, [`Soundex::transform`] runs:
//!
//! ```text
//! lowercase → record first letter → normalize → classify → reduce
//!   → [strip placeholders + reduce] → [fit to length]
//!   → [drop first coded symbol] → [prefix first letter] → uppercase
//! ```
//!
//! Bracketed steps are controlled by [`SoundexConfig`].
//!
//! # Example
//!
//! ```rust
//! use ru_soundex::prelude::*;
//!
//! let soundex = RussianSoundex::default();
//! let code = soundex.transform("хорошо").unwrap();
//! assert_eq!(code, "Х309050");
//! ```

pub mod morph;
pub mod reduce;
pub mod russian;
pub mod table;

use std::fmt;

use tracing::trace;

use crate::config::SoundexConfig;
use crate::error::{Result, SoundexError};

pub use morph::{DictionaryOracle, MorphHook, MorphOracle, MorphTag};
pub use reduce::{
    fit_to_length, reduce, reduce_in_place, strip_placeholders, Symbols, VOWEL_PLACEHOLDER,
};
pub use russian::{Russian, RussianSoundex};
pub use table::TranslationTable;

/// The language-specific capabilities the pipeline needs.
///
/// Only [`name`](Self::name) and [`table`](Self::table) are required;
/// languages without spelling rules keep the no-op [`normalize`](Self::normalize).
pub trait PhoneticLanguage: Send + Sync {
    /// Short identifier, e.g. `"russian"`.
    fn name(&self) -> &'static str;

    /// Consonant classes and vowel set.
    fn table(&self) -> &TranslationTable;

    /// Rewrite a lowercase word into a spelling closer to its pronunciation.
    fn normalize(&self, word: &str) -> String {
        word.to_owned()
    }

    /// Symbol emitted for a vowel.
    fn translate_vowel(&self, _vowel: char) -> char {
        VOWEL_PLACEHOLDER
    }

    /// Returns true if `letter` is a vowel of this language.
    fn is_vowel(&self, letter: char) -> bool {
        self.table().is_vowel(letter)
    }

    /// The vowel set.
    fn vowels(&self) -> &str {
        self.table().vowels()
    }

    /// One symbol per letter: vowels through [`translate_vowel`](Self::translate_vowel),
    /// consonants to their class, anything else unchanged.
    fn classify(&self, word: &str) -> Symbols {
        let table = self.table();
        word.chars()
            .map(|letter| {
                if self.is_vowel(letter) {
                    self.translate_vowel(letter)
                } else {
                    table.class_of(letter).unwrap_or(letter)
                }
            })
            .collect()
    }
}

/// A Soundex code: an optional leading letter followed by the coded tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneticCode {
    code: String,
    tail_start: usize,
}

impl PhoneticCode {
    fn new(leading: Option<char>, tail: &[char]) -> Self {
        let mut code = String::with_capacity(tail.len() + 2);
        if let Some(letter) = leading {
            code.extend(letter.to_uppercase());
        }
        let tail_start = code.len();
        code.extend(tail.iter().flat_map(|symbol| symbol.to_uppercase()));
        PhoneticCode { code, tail_start }
    }

    /// The full code.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The leading letter, unless the encoder drops it.
    pub fn leading_letter(&self) -> Option<char> {
        self.code[..self.tail_start].chars().next()
    }

    /// The coded part after the leading letter.
    pub fn tail(&self) -> &str {
        &self.code[self.tail_start..]
    }

    /// Consume the code, returning the underlying string.
    pub fn into_string(self) -> String {
        self.code
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for PhoneticCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl PartialEq<str> for PhoneticCode {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for PhoneticCode {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl From<PhoneticCode> for String {
    fn from(code: PhoneticCode) -> Self {
        code.code
    }
}

/// Soundex encoder: a fixed configuration plus a language.
///
/// Encoders hold no mutable state; `transform` takes `&self` and an encoder
/// can be shared between threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Soundex<L: PhoneticLanguage> {
    config: SoundexConfig,
    language: L,
}

impl<L: PhoneticLanguage> Soundex<L> {
    /// Create an encoder.
    pub fn new(config: SoundexConfig, language: L) -> Self {
        Soundex { config, language }
    }

    /// Encode `word`.
    ///
    /// # Errors
    ///
    /// [`SoundexError::InvalidInput`] if `word` is empty.
    pub fn transform(&self, word: &str) -> Result<PhoneticCode> {
        if word.is_empty() {
            return Err(SoundexError::invalid_input("word must not be empty"));
        }

        let word = word.to_lowercase();
        let first = word.chars().next();

        let normalized = self.language.normalize(&word);
        let mut tail = self.language.classify(&normalized);
        reduce_in_place(&mut tail);

        if self.config.delete_zeros {
            strip_placeholders(&mut tail);
        }
        if self.config.cut_result {
            fit_to_length(&mut tail, self.config.seq_cutted_len);
        }
        if self.config.delete_first_coded_letter && !tail.is_empty() {
            tail.remove(0);
        }

        let leading = if self.config.delete_first_letter {
            None
        } else {
            first
        };
        let code = PhoneticCode::new(leading, &tail);

        trace!(
            language = self.language.name(),
            word = %word,
            normalized = %normalized,
            code = %code,
            "soundex code computed"
        );

        Ok(code)
    }

    /// The encoder configuration.
    pub fn config(&self) -> &SoundexConfig {
        &self.config
    }

    /// The language specialization.
    pub fn language(&self) -> &L {
        &self.language
    }

    /// The active vowel set.
    pub fn vowels(&self) -> &str {
        self.language.vowels()
    }

    /// Returns true if codes omit the leading letter.
    pub fn is_delete_first_letter(&self) -> bool {
        self.config.delete_first_letter
    }

    /// Returns true if codes omit the first coded symbol.
    pub fn is_delete_first_coded_letter(&self) -> bool {
        self.config.delete_first_coded_letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static ENGLISH_LIKE: Lazy<TranslationTable> = Lazy::new(|| {
        TranslationTable::new(
            &[
                ("bfpv", '1'),
                ("cgjkqsxz", '2'),
                ("dt", '3'),
                ("l", '4'),
                ("mn", '5'),
                ("r", '6'),
            ],
            "aeiou",
        )
    });

    /// A language with a table and no spelling rules.
    struct Plain;

    impl PhoneticLanguage for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn table(&self) -> &TranslationTable {
            &ENGLISH_LIKE
        }
    }

    fn encode(config: SoundexConfig, word: &str) -> String {
        Soundex::new(config, Plain).transform(word).unwrap().into_string()
    }

    fn classic() -> SoundexConfig {
        SoundexConfig {
            delete_zeros: true,
            cut_result: true,
            delete_first_coded_letter: true,
            ..SoundexConfig::default()
        }
    }

    #[test]
    fn test_default_pipeline() {
        assert_eq!(encode(SoundexConfig::default(), "robert"), "R601063");
    }

    #[test]
    fn test_reduce_after_classification() {
        assert_eq!(encode(SoundexConfig::default(), "bb"), "B1");
        assert_eq!(encode(SoundexConfig::default(), "pfister"), "P102306");
    }

    #[test]
    fn test_delete_zeros() {
        let config = SoundexConfig {
            delete_zeros: true,
            ..SoundexConfig::default()
        };
        assert_eq!(encode(config.clone(), "robert"), "R6163");
        // "s" and "c" share a class once the vowel between them is gone.
        assert_eq!(encode(config, "sac"), "S2");
    }

    #[test]
    fn test_cut_result_truncates_and_pads() {
        let config = SoundexConfig {
            cut_result: true,
            ..SoundexConfig::default()
        };
        assert_eq!(encode(config.clone(), "robert"), "R6010");
        assert_eq!(encode(config, "lee"), "L4000");
    }

    #[test]
    fn test_classic_soundex_shape() {
        assert_eq!(encode(classic(), "robert"), "R163");
        assert_eq!(encode(classic(), "pfister"), "P236");
    }

    #[test]
    fn test_delete_first_letter() {
        let config = SoundexConfig {
            delete_first_letter: true,
            ..SoundexConfig::default()
        };
        let soundex = Soundex::new(config, Plain);
        let code = soundex.transform("robert").unwrap();
        assert_eq!(code, "601063");
        assert_eq!(code.leading_letter(), None);
        assert_eq!(code.tail(), "601063");
        assert!(soundex.is_delete_first_letter());
        assert!(!soundex.is_delete_first_coded_letter());
    }

    #[test]
    fn test_delete_first_coded_letter_on_empty_tail() {
        let config = SoundexConfig {
            delete_zeros: true,
            delete_first_coded_letter: true,
            ..SoundexConfig::default()
        };
        assert_eq!(encode(config, "a"), "A");
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(
            encode(SoundexConfig::default(), "ROBERT"),
            encode(SoundexConfig::default(), "robert")
        );
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(encode(SoundexConfig::default(), "o'hara"), "O0'H060");
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let err = Soundex::new(SoundexConfig::default(), Plain)
            .transform("")
            .unwrap_err();
        assert!(matches!(err, SoundexError::InvalidInput { .. }));
    }

    #[test]
    fn test_phonetic_code_parts() {
        let code = PhoneticCode::new(Some('х'), &['3', '0', '9']);
        assert_eq!(code.as_str(), "Х309");
        assert_eq!(code.leading_letter(), Some('Х'));
        assert_eq!(code.tail(), "309");
        assert_eq!(code.to_string(), "Х309");
        assert_eq!(String::from(code), "Х309");
    }

    #[test]
    fn test_accessors() {
        let soundex = Soundex::new(SoundexConfig::default(), Plain);
        assert_eq!(soundex.vowels(), "aeiou");
        assert_eq!(soundex.language().name(), "plain");
        assert_eq!(soundex.config(), &SoundexConfig::default());
    }
}
