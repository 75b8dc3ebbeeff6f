//! Secret word representation
//!
//! A `SecretWord` stores the hidden word for a round and knows how to render
//! its masked display from a set of guessed letters.

use super::guesses::GuessedLetters;
use std::fmt;

/// The hidden word of a hangman round
///
/// Always lowercase ASCII letters internally; display is uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for SecretWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAscii => write!(f, "Secret word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Secret word contains invalid characters"),
        }
    }
}

impl std::error::Error for SecretWordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// The input is lowercased. Words of any length are accepted; the embedded
    /// corpora happen to use 5/10/13-15 letters per tier but nothing depends
    /// on that.
    ///
    /// # Errors
    /// Returns `SecretWordError` if the input is empty, non-ASCII, or contains
    /// anything besides letters.
    ///
    /// # Examples
    /// ```
    /// use pendu::core::SecretWord;
    ///
    /// let word = SecretWord::new("Paris").unwrap();
    /// assert_eq!(word.text(), "paris");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("caf\u{e9}").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretWordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if !text.is_ascii() {
            return Err(SecretWordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SecretWordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the word contains a letter, case-insensitively
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.contains(letter.to_ascii_lowercase())
    }

    /// The fully revealed word, uppercase, for win/loss banners
    #[must_use]
    pub fn reveal_all(&self) -> String {
        self.text.to_uppercase()
    }

    /// Render the masked display of this word for a set of guessed letters
    ///
    /// Each position shows its uppercase letter if that letter was guessed,
    /// else an underscore, space-separated. The first and last positions are
    /// always revealed, regardless of guesses; interior occurrences of those
    /// letters stay hidden until guessed.
    ///
    /// Pure function of the word and the guessed set. A round is won exactly
    /// when this contains no `_`.
    ///
    /// # Examples
    /// ```
    /// use pendu::core::{GuessedLetters, SecretWord};
    ///
    /// let word = SecretWord::new("japon").unwrap();
    /// let mut guessed = GuessedLetters::new();
    /// assert_eq!(word.masked_display(&guessed), "J _ _ _ N");
    ///
    /// guessed.insert('P');
    /// assert_eq!(word.masked_display(&guessed), "J _ P _ N");
    /// ```
    #[must_use]
    pub fn masked_display(&self, guessed: &GuessedLetters) -> String {
        let last = self.text.len() - 1;
        let cells: Vec<String> = self
            .text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let upper = c.to_ascii_uppercase();
                if i == 0 || i == last || guessed.contains(upper) {
                    upper.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();

        cells.join(" ")
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
