//! Russian phonetic language: translation tables, normalization and the
//! optional morphology hook.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::morph::{MorphHook, MorphOracle};
use super::reduce::VOWEL_PLACEHOLDER;
use super::table::TranslationTable;
use super::{PhoneticLanguage, Soundex};
use crate::config::SoundexConfig;
use crate::error::{Result, SoundexError};
use crate::phonetic::{apply_rules_seq, russian_rules, vowel_cleanup_rules};

/// Russian vowels.
pub const RUSSIAN_VOWELS: &str = "аэиоуыеёюя";

/// Consonant classes.
pub const RUSSIAN_CONSONANT_CLASSES: &[(&str, char)] = &[
    ("бп", '1'),
    ("вф", '2'),
    ("гкх", '3'),
    ("дт", '4'),
    ("жшчщ", '5'),
    ("зсц", '6'),
    ("л", '7'),
    ("мн", '8'),
    ("р", '9'),
];

/// Vowel groups used when vowels are coded instead of replaced by a
/// placeholder.
pub const RUSSIAN_VOWEL_GROUPS: &[(&str, char)] = &[("аяо", 'A'), ("ыиеёэ", 'B'), ("юу", 'C')];

static CONSONANTS: Lazy<TranslationTable> =
    Lazy::new(|| TranslationTable::new(RUSSIAN_CONSONANT_CLASSES, RUSSIAN_VOWELS));

static VOWEL_GROUPS: Lazy<TranslationTable> =
    Lazy::new(|| TranslationTable::new(RUSSIAN_VOWEL_GROUPS, ""));

/// The Russian specialization of the Soundex pipeline.
#[derive(Debug, Clone, Default)]
pub struct Russian {
    code_vowels: bool,
    morph: Option<MorphHook>,
}

impl Russian {
    /// Russian rules without morphological analysis.
    pub fn new(code_vowels: bool) -> Self {
        Russian {
            code_vowels,
            morph: None,
        }
    }

    /// Russian rules with the "-его/-ого" ending gated by `oracle`.
    pub fn with_oracle(code_vowels: bool, oracle: Arc<dyn MorphOracle>) -> Self {
        Russian {
            code_vowels,
            morph: Some(MorphHook::new(oracle)),
        }
    }

    /// Returns true if vowels are coded by group.
    pub fn codes_vowels(&self) -> bool {
        self.code_vowels
    }

    /// Returns true if morphological analysis is active.
    pub fn uses_morph_analysis(&self) -> bool {
        self.morph.is_some()
    }
}

impl PhoneticLanguage for Russian {
    fn name(&self) -> &'static str {
        "russian"
    }

    fn table(&self) -> &TranslationTable {
        &CONSONANTS
    }

    fn normalize(&self, word: &str) -> String {
        let normalized = match &self.morph {
            Some(hook) => apply_rules_seq(russian_rules(), &hook.apply(word)),
            None => apply_rules_seq(russian_rules(), word),
        };

        if self.code_vowels {
            apply_rules_seq(vowel_cleanup_rules(), &normalized)
        } else {
            normalized
        }
    }

    fn translate_vowel(&self, vowel: char) -> char {
        if self.code_vowels {
            VOWEL_GROUPS.class_of(vowel).unwrap_or(vowel)
        } else {
            VOWEL_PLACEHOLDER
        }
    }
}

/// Soundex encoder for Russian.
pub type RussianSoundex = Soundex<Russian>;

impl Soundex<Russian> {
    /// Build a Russian encoder from `config`.
    ///
    /// # Errors
    ///
    /// [`SoundexError::InvalidInput`] if `config.use_morph_analysis` is set:
    /// morphological analysis needs an oracle, see [`RussianSoundex::with_oracle`].
    pub fn russian(config: SoundexConfig) -> Result<Self> {
        if config.use_morph_analysis {
            return Err(SoundexError::invalid_input(
                "use_morph_analysis requires a morphological oracle",
            ));
        }
        let language = Russian::new(config.code_vowels);
        Ok(Soundex::new(config, language))
    }

    /// Build a Russian encoder that consults `oracle` when
    /// `config.use_morph_analysis` is set.
    ///
    /// The oracle is ignored when morphological analysis is off.
    pub fn with_oracle(config: SoundexConfig, oracle: Arc<dyn MorphOracle>) -> Self {
        let language = if config.use_morph_analysis {
            Russian::with_oracle(config.code_vowels, oracle)
        } else {
            Russian::new(config.code_vowels)
        };
        Soundex::new(config, language)
    }
}

impl Default for Soundex<Russian> {
    fn default() -> Self {
        Soundex::new(SoundexConfig::default(), Russian::default())
    }
}
