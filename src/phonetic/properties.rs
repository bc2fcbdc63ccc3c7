//! Property-based tests for the Russian rewrite rules.
//!
//! # Properties Tested
//!
//! 1. **Sequential composition**: applying the rule set equals folding the
//!    rules one by one
//! 2. **Bounded expansion**: a word grows by at most one character
//! 3. **Determinism**: the same word always normalizes the same way
//! 4. **Sign elimination**: no "ъ", "ь" or "й" survives normalization
//! 5. **Non-confluence**: reordering the rule set changes some outputs
