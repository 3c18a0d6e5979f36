//! Word catalog
//!
//! Difficulty-filtered random word selection and case-insensitive typing checks.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Built-in word list
pub const DEFAULT_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one",
    "our", "had", "day", "get", "use", "man", "new", "now", "way", "may", "say", "each",
    "which", "their", "time", "will", "about", "would", "there", "could", "other", "after",
    "first", "never", "these", "think", "where", "being", "every", "great", "might", "shall",
    "still", "those", "while", "write", "place", "right", "sound", "again", "below",
    "between", "important", "children", "example", "sentence", "following", "without",
    "another", "different", "thought", "through", "before", "picture", "country", "together",
    "followed", "programming", "computer", "keyboard", "function", "variable", "algorithm",
    "structure", "interface", "development", "framework", "library", "package", "compile",
    "execute",
];

/// Difficulty the catalog starts with
pub const DEFAULT_DIFFICULTY: u8 = 1;

/// Inclusive word-length band for a difficulty level (`None` = no filter)
pub fn length_band(difficulty: u8) -> Option<RangeInclusive<usize>> {
    match difficulty {
        1 => Some(3..=5),
        2 => Some(4..=8),
        3 => Some(6..=usize::MAX),
        _ => None,
    }
}

/// Human-readable label for a difficulty level
pub fn difficulty_label(difficulty: u8) -> &'static str {
    match difficulty {
        1 => "Easy",
        2 => "Medium",
        3 => "Hard",
        _ => "Any",
    }
}

/// Word source for platforms
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<String>,
    difficulty: u8,
    rng: Pcg32,
}

impl WordCatalog {
    /// Catalog over the built-in word list
    pub fn new(seed: u64) -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            difficulty: DEFAULT_DIFFICULTY,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Catalog over a custom word list. Returns `None` for an empty list.
    pub fn with_words<I, S>(words: I, seed: u64) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            difficulty: DEFAULT_DIFFICULTY,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Set the difficulty (1-3). Other values are ignored.
    pub fn set_difficulty(&mut self, level: u8) {
        if (1..=3).contains(&level) {
            if level != self.difficulty {
                log::debug!(
                    "Difficulty {} -> {}",
                    difficulty_label(self.difficulty),
                    difficulty_label(level)
                );
            }
            self.difficulty = level;
        }
    }

    /// Uniformly random word from the current difficulty band, lower-cased
    pub fn random_word(&mut self) -> String {
        let band = length_band(self.difficulty);
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|w| band.as_ref().is_none_or(|b| b.contains(&w.chars().count())))
            .collect();

        let word = if candidates.is_empty() {
            // Nothing fits the band - draw from the whole list
            &self.words[self.rng.random_range(0..self.words.len())]
        } else {
            candidates[self.rng.random_range(0..candidates.len())]
        };
        word.to_lowercase()
    }

    /// True once `typed` matches `word`, ignoring case
    pub fn is_complete(&self, word: &str, typed: &str) -> bool {
        word.to_lowercase() == typed.to_lowercase()
    }

    /// True if `ch` is the next expected letter of `word` after `typed`
    pub fn is_valid_next_char(&self, word: &str, typed: &str, ch: char) -> bool {
        let position = typed.chars().count();
        if position >= word.chars().count() {
            return false;
        }
        match word.chars().nth(position) {
            Some(expected) => expected.to_lowercase().eq(ch.to_lowercase()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BANDED: &[&str] = &["go", "cat", "word", "hello", "longer", "testing", "programming"];

    #[test]
    fn test_new_catalog_defaults() {
        let catalog = WordCatalog::new(1);
        assert!(!catalog.words.is_empty());
        assert_eq!(catalog.difficulty(), 1);
    }

    #[test]
    fn test_empty_word_list_rejected() {
        assert!(WordCatalog::with_words(Vec::<String>::new(), 1).is_none());
    }

    #[test]
    fn test_random_word_varies() {
        let mut catalog = WordCatalog::new(42);
        let first = catalog.random_word();
        assert!(!first.is_empty());

        let mut seen = std::collections::HashSet::new();
        for _ in 0..10 {
            seen.insert(catalog.random_word());
        }
        assert!(seen.len() >= 2, "expected some variety, got {:?}", seen);
    }

    #[test]
    fn test_random_word_is_lowercase() {
        let mut catalog = WordCatalog::with_words(["HELLO", "World"], 3).unwrap();
        for _ in 0..10 {
            let word = catalog.random_word();
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let mut a = WordCatalog::new(777);
        let mut b = WordCatalog::new(777);
        for _ in 0..20 {
            assert_eq!(a.random_word(), b.random_word());
        }
    }

    #[test]
    fn test_set_difficulty() {
        let mut catalog = WordCatalog::new(1);
        for level in 1..=3 {
            catalog.set_difficulty(level);
            assert_eq!(catalog.difficulty(), level);
        }

        let before = catalog.difficulty();
        catalog.set_difficulty(0);
        assert_eq!(catalog.difficulty(), before);
        catalog.set_difficulty(4);
        assert_eq!(catalog.difficulty(), before);
    }

    #[test]
    fn test_difficulty_filtering() {
        let mut catalog = WordCatalog::with_words(BANDED.iter().copied(), 9).unwrap();

        catalog.set_difficulty(1);
        for _ in 0..20 {
            let word = catalog.random_word();
            assert!((3..=5).contains(&word.len()), "easy returned {word}");
        }

        catalog.set_difficulty(3);
        for _ in 0..20 {
            let word = catalog.random_word();
            assert!(word.len() >= 6, "hard returned {word}");
        }

        catalog.set_difficulty(2);
        for _ in 0..20 {
            let word = catalog.random_word();
            assert!((4..=8).contains(&word.len()), "medium returned {word}");
        }
    }

    #[test]
    fn test_empty_band_falls_back_to_all_words() {
        let mut catalog = WordCatalog::with_words(["go", "at"], 5).unwrap();
        catalog.set_difficulty(3);
        for _ in 0..10 {
            let word = catalog.random_word();
            assert!(word == "go" || word == "at");
        }
    }

    #[test]
    fn test_unknown_difficulty_has_no_band() {
        assert!(length_band(0).is_none());
        assert!(length_band(7).is_none());
        assert_eq!(length_band(1), Some(3..=5));
    }

    #[test]
    fn test_is_complete() {
        let catalog = WordCatalog::new(1);
        let cases = [
            ("hello", "hello", true),
            ("hello", "Hell", false),
            ("hello", "hello!", false),
            ("HELLO", "hello", true),
            ("test", "test", true),
            ("test", "tes", false),
            ("", "", true),
        ];
        for (word, typed, expected) in cases {
            assert_eq!(
                catalog.is_complete(word, typed),
                expected,
                "is_complete({word:?}, {typed:?})"
            );
        }
    }

    #[test]
    fn test_is_valid_next_char() {
        let catalog = WordCatalog::new(1);
        let cases = [
            ("hello", "", 'h', true),
            ("hello", "h", 'e', true),
            ("hello", "he", 'l', true),
            ("hello", "", 'x', false),
            ("hello", "h", 'x', false),
            ("HELLO", "", 'h', true),
            ("HELLO", "", 'H', true),
            ("hello", "hello", 'x', false),
            ("hello", "hello", 'o', false),
        ];
        for (word, typed, ch, expected) in cases {
            assert_eq!(
                catalog.is_valid_next_char(word, typed, ch),
                expected,
                "is_valid_next_char({word:?}, {typed:?}, {ch:?})"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_expected_char_accepted_in_any_case(
            word in "[a-zA-Z]{1,12}",
            cut in 0usize..12,
            upper in any::<bool>(),
        ) {
            let catalog = WordCatalog::new(1);
            let cut = cut % word.len();
            let typed = &word[..cut];
            let expected = word.as_bytes()[cut] as char;
            let ch = if upper { expected.to_ascii_uppercase() } else { expected.to_ascii_lowercase() };
            prop_assert!(catalog.is_valid_next_char(&word, typed, ch));
        }

        #[test]
        fn prop_other_chars_rejected(
            word in "[a-z]{1,12}",
            cut in 0usize..12,
            ch in proptest::char::range('a', 'z'),
        ) {
            let catalog = WordCatalog::new(1);
            let cut = cut % word.len();
            let typed = &word[..cut];
            let expected = word.as_bytes()[cut] as char;
            prop_assume!(ch != expected);
            prop_assert!(!catalog.is_valid_next_char(&word, typed, ch));
        }

        #[test]
        fn prop_complete_iff_case_insensitive_equal(word in "[a-zA-Z]{0,10}", typed in "[a-zA-Z]{0,10}") {
            let catalog = WordCatalog::new(1);
            prop_assert_eq!(
                catalog.is_complete(&word, &typed),
                word.to_lowercase() == typed.to_lowercase()
            );
            prop_assert!(catalog.is_complete(&word, &word.to_uppercase()));
        }
    }
}
