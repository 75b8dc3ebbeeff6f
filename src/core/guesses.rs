//! Guessed-letter tracking
//!
//! The set of letters the player has proposed this round, used both to block
//! duplicate guesses and to compute revealed blanks.

use rustc_hash::FxHashSet;

/// The letters proposed so far in the current round
///
/// Stored uppercase. Membership order is irrelevant for game logic, but
/// insertion order is kept for the "Lettres utilisées" display line.
#[derive(Debug, Clone, Default)]
pub struct GuessedLetters {
    set: FxHashSet<char>,
    order: Vec<char>,
}

impl GuessedLetters {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter, normalized to uppercase
    ///
    /// Returns `false` if the letter was already present (the caller rejects
    /// the guess in that case; duplicates are never double-counted).
    pub fn insert(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        if self.set.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }

    /// Check membership, case-insensitively
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.set.contains(&letter.to_ascii_uppercase())
    }

    /// Number of distinct letters guessed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Letters in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    /// Comma-joined uppercase history, in insertion order
    ///
    /// # Examples
    /// ```
    /// use pendu::core::GuessedLetters;
    ///
    /// let mut guessed = GuessedLetters::new();
    /// guessed.insert('a');
    /// guessed.insert('Z');
    /// assert_eq!(guessed.history(), "A, Z");
    /// ```
    #[must_use]
    pub fn history(&self) -> String {
        let letters: Vec<String> = self.order.iter().map(char::to_string).collect();
        letters.join(", ")
    }
}
