//! Round state machine
//!
//! One round: a secret word, the guessed-letter set, and the error count.
//! Guesses go through `propose_input`, which enforces the validation rules;
//! rejected input never changes state and the front ends re-prompt on it.

use super::difficulty::Difficulty;
use crate::core::{GuessedLetters, SecretWord};
use std::fmt;

/// Wrong guesses allowed before the round is lost
pub const MAX_ERRORS: u8 = 7;

/// Why a proposed guess was rejected
///
/// Rejections leave the round untouched; they cost neither an error nor an
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Empty input or more than one character
    NotOneLetter(usize),
    /// Not a plain ASCII letter: digits, accented letters, punctuation
    Disallowed(char),
    /// Already proposed this round
    AlreadyGuessed(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOneLetter(len) => {
                write!(f, "Expected exactly one letter, got {len} characters")
            }
            Self::Disallowed(c) => write!(f, "Character '{c}' is not a plain letter"),
            Self::AlreadyGuessed(c) => write!(f, "Letter '{c}' was already guessed"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word
    Hit,
    /// The letter is absent; the error count grew by one
    Miss,
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// State of one hangman round
///
/// Created fresh at difficulty selection, mutated by accepted guesses,
/// discarded at round end.
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: SecretWord,
    guessed: GuessedLetters,
    errors: u8,
    attempts: u32,
}

impl Round {
    /// Start a round for a drawn word
    #[must_use]
    pub fn new(difficulty: Difficulty, secret: SecretWord) -> Self {
        Self {
            difficulty,
            secret,
            guessed: GuessedLetters::new(),
            errors: 0,
            attempts: 0,
        }
    }

    /// Propose one validated letter
    ///
    /// The letter is normalized to uppercase and added to the guessed set; a
    /// miss increments the error count (capped at [`MAX_ERRORS`]). Every
    /// accepted guess counts one attempt.
    ///
    /// # Errors
    /// Returns [`GuessError`] without touching state when the character is not
    /// a plain ASCII letter or was already guessed.
    pub fn propose(&mut self, letter: char) -> Result<GuessOutcome, GuessError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::Disallowed(letter));
        }

        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.attempts += 1;

        if self.secret.contains_letter(letter) {
            Ok(GuessOutcome::Hit)
        } else {
            self.errors = (self.errors + 1).min(MAX_ERRORS);
            Ok(GuessOutcome::Miss)
        }
    }

    /// Propose raw input, enforcing the single-character rule first
    ///
    /// # Errors
    /// Returns [`GuessError::NotOneLetter`] for empty or multi-character
    /// input, then the same rejections as [`Round::propose`].
    pub fn propose_input(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.propose(letter),
            _ => Err(GuessError::NotOneLetter(input.chars().count())),
        }
    }

    /// Current status; the win check comes before the loss check
    ///
    /// Won exactly when the masked display has no blanks left (the first and
    /// last letters are revealed for free). Lost at [`MAX_ERRORS`] errors.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if !self.masked().contains('_') {
            RoundStatus::Won
        } else if self.errors >= MAX_ERRORS {
            RoundStatus::Lost
        } else {
            RoundStatus::Playing
        }
    }

    /// The masked display line for the current guesses
    #[must_use]
    pub fn masked(&self) -> String {
        self.secret.masked_display(&self.guessed)
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Wrong guesses so far, in `[0, MAX_ERRORS]`
    #[inline]
    #[must_use]
    pub const fn errors(&self) -> u8 {
        self.errors
    }

    /// Countdown shown in the HUD
    #[inline]
    #[must_use]
    pub const fn errors_remaining(&self) -> u8 {
        MAX_ERRORS - self.errors
    }

    /// Accepted guesses so far, hits and misses both
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(Difficulty::Easy, SecretWord::new(word).unwrap())
    }

    #[test]
    fn fresh_round_is_playing() {
        let r = round("balai");
        assert_eq!(r.status(), RoundStatus::Playing);
        assert_eq!(r.errors(), 0);
        assert_eq!(r.errors_remaining(), MAX_ERRORS);
        assert_eq!(r.attempts(), 0);
    }

    #[test]
    fn hit_does_not_increment_errors() {
        let mut r = round("balai");
        assert_eq!(r.propose('a'), Ok(GuessOutcome::Hit));
        assert_eq!(r.errors(), 0);
        assert_eq!(r.attempts(), 1);
    }

    #[test]
    fn miss_increments_errors() {
        let mut r = round("balai");
        assert_eq!(r.propose('z'), Ok(GuessOutcome::Miss));
        assert_eq!(r.errors(), 1);
        assert_eq!(r.errors_remaining(), 6);
        assert_eq!(r.attempts(), 1);
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        let mut r = round("balai");
        assert_eq!(r.propose('3'), Err(GuessError::Disallowed('3')));
        assert_eq!(r.propose('!'), Err(GuessError::Disallowed('!')));
        assert_eq!(r.errors(), 0);
        assert_eq!(r.attempts(), 0);
    }

    #[test]
    fn rejects_accented_letters() {
        let mut r = round("balai");
        assert_eq!(
            r.propose('\u{e9}'),
            Err(GuessError::Disallowed('\u{e9}'))
        );
        assert_eq!(r.errors(), 0);
    }

    #[test]
    fn rejects_duplicates_without_double_counting() {
        let mut r = round("balai");
        assert_eq!(r.propose('z'), Ok(GuessOutcome::Miss));
        assert_eq!(r.propose('z'), Err(GuessError::AlreadyGuessed('Z')));
        assert_eq!(r.propose('Z'), Err(GuessError::AlreadyGuessed('Z')));
        assert_eq!(r.errors(), 1);
        assert_eq!(r.attempts(), 1);

        // A correct letter cannot be re-counted toward the win either
        assert_eq!(r.propose('b'), Ok(GuessOutcome::Hit));
        assert_eq!(r.propose('B'), Err(GuessError::AlreadyGuessed('B')));
        assert_eq!(r.attempts(), 2);
    }

    #[test]
    fn propose_input_rejects_empty_and_multi_character() {
        let mut r = round("balai");
        assert_eq!(r.propose_input(""), Err(GuessError::NotOneLetter(0)));
        assert_eq!(r.propose_input("ab"), Err(GuessError::NotOneLetter(2)));
        assert_eq!(r.propose_input("oui"), Err(GuessError::NotOneLetter(3)));
        assert_eq!(r.attempts(), 0);
    }

    #[test]
    fn propose_input_accepts_single_letter() {
        let mut r = round("balai");
        assert_eq!(r.propose_input("a"), Ok(GuessOutcome::Hit));
        assert_eq!(r.propose_input("Z"), Ok(GuessOutcome::Miss));
    }

    #[test]
    fn errors_monotone_and_bounded() {
        let mut r = round("balai");
        let mut last = 0;
        for letter in ['c', 'd', 'e', 'f', 'g', 'h', 'j'] {
            assert_eq!(r.propose(letter), Ok(GuessOutcome::Miss));
            assert!(r.errors() >= last);
            assert!(r.errors() <= MAX_ERRORS);
            last = r.errors();
        }
        assert_eq!(r.errors(), MAX_ERRORS);
    }

    #[test]
    fn seven_misses_lose_the_round() {
        // spec scenario: "japon", seven consecutive wrong guesses
        let mut r = round("japon");
        for letter in ['b', 'c', 'd', 'e', 'f', 'g', 'h'] {
            assert_eq!(r.propose(letter), Ok(GuessOutcome::Miss));
        }
        assert_eq!(r.errors(), 7);
        assert_eq!(r.status(), RoundStatus::Lost);
        assert_eq!(r.secret().reveal_all(), "JAPON");
    }

    #[test]
    fn interior_letters_win_the_round() {
        // spec scenario: "paris" with first/last free, a/r/i suffice
        let mut r = round("paris");
        assert_eq!(r.status(), RoundStatus::Playing);
        r.propose('a').unwrap();
        r.propose('r').unwrap();
        assert_eq!(r.status(), RoundStatus::Playing);
        r.propose('i').unwrap();
        assert_eq!(r.masked(), "P A R I S");
        assert_eq!(r.status(), RoundStatus::Won);
        assert_eq!(r.attempts(), 3);
    }

    #[test]
    fn guessing_the_free_edge_letter_is_a_hit_but_reveals_nothing_new() {
        let mut r = round("paris");
        assert_eq!(r.propose('p'), Ok(GuessOutcome::Hit));
        assert_eq!(r.masked(), "P _ _ _ S");
        assert_eq!(r.status(), RoundStatus::Playing);
    }

    #[test]
    fn win_check_takes_precedence_at_the_boundary() {
        // Six misses, then the finishing hit: still a win
        let mut r = round("paris");
        for letter in ['b', 'c', 'd', 'e', 'f', 'g'] {
            r.propose(letter).unwrap();
        }
        assert_eq!(r.errors(), 6);
        for letter in ['a', 'r', 'i'] {
            r.propose(letter).unwrap();
        }
        assert_eq!(r.status(), RoundStatus::Won);
    }

    #[test]
    fn masked_tracks_guesses() {
        let mut r = round("japon");
        assert_eq!(r.masked(), "J _ _ _ N");
        r.propose('p').unwrap();
        assert_eq!(r.masked(), "J _ P _ N");
        r.propose('x').unwrap();
        assert_eq!(r.masked(), "J _ P _ N");
    }
}
