//! # ru-soundex
//!
//! Soundex-style phonetic codes for Russian words.
//!
//! Words that sound alike get the same code even when they are spelled
//! differently. Before coding, the word is rewritten by an ordered list of
//! Russian spelling rules (iotated vowels, silent consonants, consonant
//! clusters), so "вестна" and "весна" share a code. Optionally, a
//! morphological oracle decides whether the genitive ending "-ого" is
//! pronounced "-ово".
//!
//! ## Example
//!
//! ```rust
//! use ru_soundex::prelude::*;
//!
//! let soundex = SoundexBuilder::new().delete_zeros(true).build().unwrap();
//!
//! assert_eq!(soundex.transform("весна").unwrap(), soundex.transform("вестна").unwrap());
//! assert_eq!(soundex.transform("хорошо").unwrap(), "Х395");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod distance;
pub mod error;
pub mod phonetic;
pub mod soundex;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::{SoundexBuilder, SoundexConfig};
    pub use crate::distance::{DistanceMetric, SoundexDistance};
    pub use crate::error::{OracleError, SoundexError};
    pub use crate::soundex::{
        DictionaryOracle, MorphOracle, MorphTag, PhoneticCode, PhoneticLanguage, Russian,
        RussianSoundex, Soundex,
    };
}
