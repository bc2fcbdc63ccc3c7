//! Morphology-aware ending normalization.
//!
//! Russian pronounces the genitive "-его/-ого" of adjectives, numerals and
//! pronouns with a "в" ("красного" → "красново"), but not in nouns such as
//! "много" or "дорога". A [`MorphOracle`] supplies the part of speech; the
//! [`MorphHook`] rewrites the ending only when the best parse confirms one of
//! those classes.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::io::BufRead;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::OracleError;
use crate::phonetic::ending_rule;

/// Grammeme for full-form adjectives.
pub const ADJECTIVE: &str = "ADJF";
/// Grammeme for numerals.
pub const NUMERAL: &str = "NUMB";
/// Grammeme for pronoun-like nouns.
pub const PRONOUN: &str = "NPRO";

/// The grammemes of one morphological parse, in OpenCorpora notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MorphTag {
    grammemes: BTreeSet<String>,
}

impl MorphTag {
    /// Build a tag from individual grammemes.
    pub fn new<I, S>(grammemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MorphTag {
            grammemes: grammemes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a tag string such as `"ADJF,Qual masc,sing,gent"`.
    ///
    /// Grammemes may be separated by commas or whitespace.
    pub fn parse(tag: &str) -> Self {
        MorphTag::new(
            tag.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|g| !g.is_empty()),
        )
    }

    /// Returns true if the tag carries `grammeme`.
    pub fn contains(&self, grammeme: &str) -> bool {
        self.grammemes.contains(grammeme)
    }

    /// Full-form adjective.
    pub fn is_adjective(&self) -> bool {
        self.contains(ADJECTIVE)
    }

    /// Numeral.
    pub fn is_numeral(&self) -> bool {
        self.contains(NUMERAL)
    }

    /// Pronoun-like noun.
    pub fn is_pronoun_like(&self) -> bool {
        self.contains(PRONOUN)
    }

    /// Returns true if the "-его/-ого" rewrite applies to words with this tag.
    pub fn takes_v_ending(&self) -> bool {
        self.is_adjective() || self.is_numeral() || self.is_pronoun_like()
    }

    /// Iterate over the grammemes in sorted order.
    pub fn grammemes(&self) -> impl Iterator<Item = &str> {
        self.grammemes.iter().map(String::as_str)
    }
}

impl fmt::Display for MorphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.grammemes().collect();
        write!(f, "{}", joined.join(","))
    }
}

/// A part-of-speech oracle.
///
/// Implementations are shared across threads and queried read-only, so they
/// must be `Send + Sync`. Only the single best-ranked parse is ever requested.
pub trait MorphOracle: Send + Sync {
    /// The highest-confidence parse of `word`, or `None` if the word is
    /// unknown.
    fn best_parse(&self, word: &str) -> Result<Option<MorphTag>, OracleError>;
}

impl<F> MorphOracle for F
where
    F: Fn(&str) -> Result<Option<MorphTag>, OracleError> + Send + Sync,
{
    fn best_parse(&self, word: &str) -> Result<Option<MorphTag>, OracleError> {
        self(word)
    }
}

/// Gates the ending rewrite on the oracle's best parse.
#[derive(Clone)]
pub struct MorphHook {
    oracle: Arc<dyn MorphOracle>,
}

impl MorphHook {
    /// Wrap an oracle.
    pub fn new(oracle: Arc<dyn MorphOracle>) -> Self {
        MorphHook { oracle }
    }

    /// Rewrite the "-его/-ого" ending of `word` if its best parse is an
    /// adjective, numeral or pronoun-like form.
    ///
    /// A missing parse leaves the word untouched. An oracle failure is logged
    /// and treated the same way; it never propagates.
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let rule = ending_rule();
        if !rule.matches(word) {
            return Cow::Borrowed(word);
        }

        match self.oracle.best_parse(word) {
            Ok(Some(tag)) if tag.takes_v_ending() => {
                debug!(word, tag = %tag, "rewriting -его/-ого ending");
                rule.rewrite(word)
            }
            Ok(Some(tag)) => {
                debug!(word, tag = %tag, "ending kept: part of speech not eligible");
                Cow::Borrowed(word)
            }
            Ok(None) => {
                debug!(word, "ending kept: no parse");
                Cow::Borrowed(word)
            }
            Err(err) => {
                warn!(word, error = %err, "morphological oracle failed, ending kept");
                Cow::Borrowed(word)
            }
        }
    }
}

impl fmt::Debug for MorphHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphHook").finish_non_exhaustive()
    }
}

/// An in-memory oracle backed by a `word → tag` map.
///
/// Words are stored and looked up in lowercase.
#[derive(Debug, Clone, Default)]
pub struct DictionaryOracle {
    entries: FxHashMap<String, MorphTag>,
}

impl DictionaryOracle {
    /// Create an empty oracle; every lookup returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, tag)` pairs.
    pub fn from_entries<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, MorphTag)>,
        W: AsRef<str>,
    {
        let mut oracle = DictionaryOracle::new();
        for (word, tag) in entries {
            oracle.insert(word.as_ref(), tag);
        }
        oracle
    }

    /// Load a tab-separated dictionary: one `word<TAB>TAG,TAG,...` per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// [`OracleError::Malformed`] for a line without a tab, and
    /// [`OracleError::Unavailable`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, OracleError> {
        let mut oracle = DictionaryOracle::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| OracleError::Unavailable(e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (word, tag) = trimmed.split_once('\t').ok_or_else(|| OracleError::Malformed {
                line: index + 1,
                content: line.clone(),
            })?;
            oracle.insert(word.trim(), MorphTag::parse(tag));
        }

        Ok(oracle)
    }

    /// Add or replace the parse for `word`.
    pub fn insert(&mut self, word: &str, tag: MorphTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no word is known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MorphOracle for DictionaryOracle {
    fn best_parse(&self, word: &str) -> Result<Option<MorphTag>, OracleError> {
        Ok(self.entries.get(&word.to_lowercase()).cloned())
    }
}
