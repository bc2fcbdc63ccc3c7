//! Symbol-sequence post-processing: run collapsing, placeholder stripping and
//! fixed-length fitting.

use smallvec::SmallVec;

/// Symbol substituted for a vowel during classification, and used to pad
/// codes to a fixed length.
pub const VOWEL_PLACEHOLDER: char = '0';

/// A classified word: one symbol per letter.
pub type Symbols = SmallVec<[char; 32]>;

/// Collapse every run of identical symbols to a single symbol.
///
/// Idempotent: `reduce(&reduce(s)) == reduce(s)`.
///
/// # Example
///
/// ```rust
/// use ru_soundex::soundex::reduce;
///
/// let symbols: Vec<char> = "3090050".chars().collect();
/// assert_eq!(reduce(&symbols).iter().collect::<String>(), "309050");
/// ```
pub fn reduce(symbols: &[char]) -> Symbols {
    let mut reduced = Symbols::from_slice(symbols);
    reduce_in_place(&mut reduced);
    reduced
}

/// In-place variant of [`reduce`].
#[inline]
pub fn reduce_in_place(symbols: &mut Symbols) {
    symbols.dedup();
}

/// Remove every vowel placeholder, then collapse the runs this creates
/// between consonants of the same class.
pub fn strip_placeholders(symbols: &mut Symbols) {
    symbols.retain(|symbol| *symbol != VOWEL_PLACEHOLDER);
    reduce_in_place(symbols);
}

/// Truncate to `len` symbols, or right-pad with [`VOWEL_PLACEHOLDER`].
pub fn fit_to_length(symbols: &mut Symbols, len: usize) {
    if symbols.len() >= len {
        symbols.truncate(len);
    } else {
        symbols.resize(len, VOWEL_PLACEHOLDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn symbols(s: &str) -> Symbols {
        s.chars().collect()
    }

    fn text(s: &Symbols) -> String {
        s.iter().collect()
    }

    #[test]
    fn test_reduce_collapses_runs() {
        assert_eq!(text(&reduce(&symbols("1100022"))), "102");
        assert_eq!(text(&reduce(&symbols("1"))), "1");
        assert_eq!(text(&reduce(&[])), "");
    }

    #[test]
    fn test_reduce_keeps_separated_repeats() {
        assert_eq!(text(&reduce(&symbols("10101"))), "10101");
    }

    #[test]
    fn test_strip_placeholders_recollapses() {
        let mut s = symbols("60602");
        strip_placeholders(&mut s);
        assert_eq!(text(&s), "62");
    }

    #[test]
    fn test_strip_placeholders_all_vowels() {
        let mut s = symbols("0");
        strip_placeholders(&mut s);
        assert!(s.is_empty());
    }

    #[test]
    fn test_fit_truncates() {
        let mut s = symbols("309050");
        fit_to_length(&mut s, 4);
        assert_eq!(text(&s), "3090");
    }

    #[test]
    fn test_fit_pads() {
        let mut s = symbols("38");
        fit_to_length(&mut s, 4);
        assert_eq!(text(&s), "3800");
    }

    #[test]
    fn test_fit_zero_length() {
        let mut s = symbols("38");
        fit_to_length(&mut s, 0);
        assert!(s.is_empty());
    }

    fn arb_symbols() -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(prop::sample::select(vec!['0', '1', '2', '3', 'J', 'A']), 0..24)
    }

    proptest! {
        #[test]
        fn prop_reduce_idempotent(s in arb_symbols()) {
            let once = reduce(&s);
            let twice = reduce(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_reduce_no_adjacent_duplicates(s in arb_symbols()) {
            let reduced = reduce(&s);
            prop_assert!(reduced.windows(2).all(|w| w[0] != w[1]));
        }

        #[test]
        fn prop_strip_leaves_no_placeholders(s in arb_symbols()) {
            let mut stripped = Symbols::from_vec(s);
            strip_placeholders(&mut stripped);
            prop_assert!(!stripped.contains(&VOWEL_PLACEHOLDER));
            prop_assert!(stripped.windows(2).all(|w| w[0] != w[1]));
        }

        #[test]
        fn prop_fit_exact_length(s in arb_symbols(), len in 0usize..10) {
            let mut fitted = Symbols::from_vec(s);
            fit_to_length(&mut fitted, len);
            prop_assert_eq!(fitted.len(), len);
        }
    }
}
