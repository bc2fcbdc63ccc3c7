//! Edit distance between Soundex codes.
//!
//! Two words sound alike when their codes are close. [`SoundexDistance`]
//! encodes both words and measures the codes with one of two metrics:
//!
//! - **Levenshtein**: insertion, deletion and substitution
//! - **Damerau-Levenshtein**: additionally counts an adjacent transposition
//!   as a single edit
//!
//! Both are space-optimized dynamic programs over `char`s, so Cyrillic
//! leading letters count as one symbol.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Result, SoundexError};
use crate::soundex::{PhoneticLanguage, Soundex};

/// Edit distance metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DistanceMetric {
    /// Insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Levenshtein plus adjacent transpositions.
    DamerauLevenshtein,
}

impl DistanceMetric {
    /// Distance between `source` and `target` under this metric.
    pub fn distance(self, source: &str, target: &str) -> usize {
        match self {
            DistanceMetric::Levenshtein => standard_distance(source, target),
            DistanceMetric::DamerauLevenshtein => transposition_distance(source, target),
        }
    }

    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::DamerauLevenshtein => "damerau-levenshtein",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = SoundexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "levenshtein" | "standard" => Ok(DistanceMetric::Levenshtein),
            "damerau-levenshtein" | "damerau" | "transposition" => {
                Ok(DistanceMetric::DamerauLevenshtein)
            }
            other => Err(SoundexError::invalid_input(format!(
                "unknown distance metric '{}'",
                other
            ))),
        }
    }
}

/// Compute the standard Levenshtein distance between two strings.
///
/// # Example
///
/// ```rust
/// use ru_soundex::distance::standard_distance;
///
/// assert_eq!(standard_distance("Х309050", "Х30905"), 1);
/// assert_eq!(standard_distance("", "Х3"), 2);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the Levenshtein distance with adjacent transpositions.
///
/// # Example
///
/// ```rust
/// use ru_soundex::distance::transposition_distance;
///
/// assert_eq!(transposition_distance("Х39", "Х93"), 1);
/// ```
pub fn transposition_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut two_ago = vec![0; n + 1];
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1);
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Phonetic distance: the edit distance between the Soundex codes of two
/// words.
#[derive(Debug, Clone)]
pub struct SoundexDistance<L: PhoneticLanguage> {
    soundex: Soundex<L>,
    metric: DistanceMetric,
}

impl<L: PhoneticLanguage> SoundexDistance<L> {
    /// Measure codes produced by `soundex` with `metric`.
    pub fn new(soundex: Soundex<L>, metric: DistanceMetric) -> Self {
        SoundexDistance { soundex, metric }
    }

    /// Distance between the full codes of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Propagates [`SoundexError::InvalidInput`] for an empty word.
    pub fn distance(&self, a: &str, b: &str) -> Result<usize> {
        let a = self.soundex.transform(a)?;
        let b = self.soundex.transform(b)?;
        Ok(self.metric.distance(a.as_str(), b.as_str()))
    }

    /// Distance between the coded tails, ignoring the leading letters.
    pub fn tail_distance(&self, a: &str, b: &str) -> Result<usize> {
        let a = self.soundex.transform(a)?;
        let b = self.soundex.transform(b)?;
        Ok(self.metric.distance(a.tail(), b.tail()))
    }

    /// The encoder.
    pub fn soundex(&self) -> &Soundex<L> {
        &self.soundex
    }

    /// The metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}
