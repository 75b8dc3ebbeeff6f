//! Word lists for the three difficulty tiers
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::SecretWord;

/// Convert an embedded string slice to `SecretWord`s, skipping invalid entries
///
/// # Examples
/// ```
/// use pendu::wordlists::{EASY, words_from_slice};
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EASY_COUNT, 20);
        assert_eq!(MEDIUM_COUNT, 20);
        assert_eq!(HARD_COUNT, 20);
    }

    #[test]
    fn all_words_are_valid_secret_words() {
        for list in [EASY, MEDIUM, HARD] {
            for &word in list {
                assert!(
                    SecretWord::new(word).is_ok(),
                    "Word '{word}' is not lowercase ASCII letters"
                );
            }
        }
    }

    #[test]
    fn easy_words_are_five_letters() {
        for &word in EASY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
        }
    }

    #[test]
    fn medium_words_are_ten_letters() {
        for &word in MEDIUM {
            assert_eq!(word.len(), 10, "Word '{word}' is not 10 letters");
        }
    }

    #[test]
    fn hard_words_are_long() {
        for &word in HARD {
            assert!(
                (13..=15).contains(&word.len()),
                "Word '{word}' has unexpected length {}",
                word.len()
            );
        }
    }

    #[test]
    fn no_duplicates_within_a_tier() {
        for list in [EASY, MEDIUM, HARD] {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn words_from_slice_converts_all_embedded() {
        assert_eq!(words_from_slice(EASY).len(), EASY_COUNT);
        assert_eq!(words_from_slice(MEDIUM).len(), MEDIUM_COUNT);
        assert_eq!(words_from_slice(HARD).len(), HARD_COUNT);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["balai", "caf\u{e9}", "mot1", "japon"];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "balai");
        assert_eq!(words[1].text(), "japon");
    }
}
