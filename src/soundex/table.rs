//! Letter classification tables.

use rustc_hash::FxHashMap;

/// Maps letters to one-character phonetic class symbols and records which
/// letters are vowels.
///
/// Lookups are case-insensitive. Letters that are neither mapped nor vowels
/// are left for the caller to pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    classes: FxHashMap<char, char>,
    vowels: String,
}

impl TranslationTable {
    /// Build a table from `(letters, class)` groups and a vowel set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ru_soundex::soundex::TranslationTable;
    ///
    /// let table = TranslationTable::new(&[("бп", '1'), ("вф", '2')], "ао");
    /// assert_eq!(table.class_of('П'), Some('1'));
    /// assert!(table.is_vowel('о'));
    /// ```
    pub fn new(groups: &[(&str, char)], vowels: &str) -> Self {
        let classes = groups
            .iter()
            .flat_map(|(letters, class)| letters.chars().map(move |letter| (letter, *class)))
            .collect();

        TranslationTable {
            classes,
            vowels: vowels.to_owned(),
        }
    }

    /// Class symbol for a consonant, if the table maps it.
    #[inline]
    pub fn class_of(&self, letter: char) -> Option<char> {
        self.classes
            .get(&letter)
            .or_else(|| self.classes.get(&fold_case(letter)))
            .copied()
    }

    /// Returns true if `letter` belongs to the vowel set.
    #[inline]
    pub fn is_vowel(&self, letter: char) -> bool {
        self.vowels.contains(letter) || self.vowels.contains(fold_case(letter))
    }

    /// The vowel set, in declaration order.
    pub fn vowels(&self) -> &str {
        &self.vowels
    }

    /// Number of mapped consonants.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no consonant is mapped.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns true if every letter of `alphabet` is either mapped or a vowel.
    pub fn covers(&self, alphabet: &str) -> bool {
        alphabet
            .chars()
            .all(|letter| self.is_vowel(letter) || self.class_of(letter).is_some())
    }
}

#[inline]
fn fold_case(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
