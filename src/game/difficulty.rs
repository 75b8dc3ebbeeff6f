//! Difficulty tiers
//!
//! Each tier ties together a menu token, a word corpus, and a win-score value.

use crate::core::SecretWord;
use crate::wordlists;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// One of the three difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a menu token: `f` (facile), `m` (moyen), `d` (difficile)
    ///
    /// Anything else is rejected; the caller re-prompts.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "f" => Some(Self::Easy),
            "m" => Some(Self::Medium),
            "d" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The menu token for this tier
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Easy => "f",
            Self::Medium => "m",
            Self::Hard => "d",
        }
    }

    /// French label, as shown in the difficulty menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "facile",
            Self::Medium => "moyen",
            Self::Hard => "difficile",
        }
    }

    /// Points awarded for winning a round at this tier
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// The embedded word corpus for this tier
    #[must_use]
    pub const fn word_list(self) -> &'static [&'static str] {
        match self {
            Self::Easy => wordlists::EASY,
            Self::Medium => wordlists::MEDIUM,
            Self::Hard => wordlists::HARD,
        }
    }

    /// Draw one word uniformly at random from this tier's corpus
    ///
    /// # Panics
    /// Will not panic: the corpora are non-empty and validated by unit tests.
    pub fn draw_word<R: Rng + ?Sized>(self, rng: &mut R) -> SecretWord {
        let word = self
            .word_list()
            .choose(rng)
            .expect("embedded word lists are non-empty");
        SecretWord::new(*word).expect("embedded word lists contain valid words")
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
