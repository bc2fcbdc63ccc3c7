//! Encoder configuration and the fluent builder.
//!
//! [`SoundexConfig`] is a plain value fixed at construction. The
//! [`SoundexBuilder`] sets it field by field, attaches a morphological
//! oracle, and validates the combination before producing a
//! [`RussianSoundex`].

use std::sync::Arc;

use crate::error::{Result, SoundexError};
use crate::soundex::{MorphOracle, RussianSoundex};

/// Default length of the coded tail when `cut_result` is set.
pub const DEFAULT_SEQ_CUTTED_LEN: usize = 4;

/// Soundex encoder configuration.
///
/// With the `serialization` feature this can be read from JSON; fields
/// missing from the document take their default values.
///
/// # Example
///
/// ```rust
/// use ru_soundex::config::SoundexConfig;
///
/// let config = SoundexConfig {
///     delete_zeros: true,
///     cut_result: true,
///     ..SoundexConfig::default()
/// };
/// assert_eq!(config.seq_cutted_len, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SoundexConfig {
    /// Omit the leading letter (`Х309050` → `309050`).
    pub delete_first_letter: bool,
    /// Omit the first coded symbol (`Х309050` → `Х09050`).
    pub delete_first_coded_letter: bool,
    /// Remove vowel placeholders and collapse the repeats this creates.
    pub delete_zeros: bool,
    /// Force the coded tail to exactly `seq_cutted_len` symbols.
    pub cut_result: bool,
    /// Tail length used by `cut_result`.
    pub seq_cutted_len: usize,
    /// Code vowels by group (`A`, `B`, `C`) instead of `0`.
    pub code_vowels: bool,
    /// Consult a morphological oracle for "-его/-ого" endings.
    pub use_morph_analysis: bool,
}

impl Default for SoundexConfig {
    fn default() -> Self {
        SoundexConfig {
            delete_first_letter: false,
            delete_first_coded_letter: false,
            delete_zeros: false,
            cut_result: false,
            seq_cutted_len: DEFAULT_SEQ_CUTTED_LEN,
            code_vowels: false,
            use_morph_analysis: false,
        }
    }
}

#[cfg(feature = "serialization")]
impl SoundexConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builder for constructing a [`RussianSoundex`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use ru_soundex::config::SoundexBuilder;
///
/// let soundex = SoundexBuilder::new()
///     .delete_zeros(true)
///     .cut_result(4)
///     .build()
///     .unwrap();
/// assert_eq!(soundex.transform("хорошо").unwrap(), "Х3950");
/// ```
#[derive(Default)]
pub struct SoundexBuilder {
    config: SoundexConfig,
    oracle: Option<Arc<dyn MorphOracle>>,
}

impl SoundexBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SoundexConfig) -> Self {
        SoundexBuilder {
            config,
            oracle: None,
        }
    }

    /// Omit the leading letter.
    pub fn delete_first_letter(mut self, enabled: bool) -> Self {
        self.config.delete_first_letter = enabled;
        self
    }

    /// Omit the first coded symbol.
    pub fn delete_first_coded_letter(mut self, enabled: bool) -> Self {
        self.config.delete_first_coded_letter = enabled;
        self
    }

    /// Remove vowel placeholders.
    pub fn delete_zeros(mut self, enabled: bool) -> Self {
        self.config.delete_zeros = enabled;
        self
    }

    /// Force the coded tail to exactly `len` symbols.
    pub fn cut_result(mut self, len: usize) -> Self {
        self.config.cut_result = true;
        self.config.seq_cutted_len = len;
        self
    }

    /// Code vowels by group.
    pub fn code_vowels(mut self, enabled: bool) -> Self {
        self.config.code_vowels = enabled;
        self
    }

    /// Enable morphological analysis backed by `oracle`.
    pub fn morph_oracle(mut self, oracle: Arc<dyn MorphOracle>) -> Self {
        self.config.use_morph_analysis = true;
        self.oracle = Some(oracle);
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &SoundexConfig {
        &self.config
    }

    /// Build the encoder.
    ///
    /// # Errors
    ///
    /// [`SoundexError::InvalidInput`] if morphological analysis is enabled
    /// (for instance through [`from_config`](Self::from_config)) without an
    /// oracle.
    pub fn build(self) -> Result<RussianSoundex> {
        match (self.config.use_morph_analysis, self.oracle) {
            (true, Some(oracle)) => Ok(RussianSoundex::with_oracle(self.config, oracle)),
            (true, None) => Err(SoundexError::invalid_input(
                "use_morph_analysis requires a morphological oracle; use .morph_oracle()",
            )),
            (false, _) => RussianSoundex::russian(self.config),
        }
    }
}
