//! Jeu du pendu
//!
//! A French hangman game for the terminal: pick a difficulty tier, guess the
//! hidden word letter by letter, and keep the figure off the gallows. Seven
//! wrong guesses lose the round; the first and last letters are revealed from
//! the start.
//!
//! # Quick Start
//!
//! ```rust
//! use pendu::core::SecretWord;
//! use pendu::game::{Difficulty, Round, RoundStatus};
//!
//! let secret = SecretWord::new("paris").unwrap();
//! let mut round = Round::new(Difficulty::Easy, secret);
//!
//! round.propose('a').unwrap();
//! round.propose('r').unwrap();
//! round.propose('i').unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round and session logic
pub mod game;

// Gallows figure rendering
pub mod figure;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
