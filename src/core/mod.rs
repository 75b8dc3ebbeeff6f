//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero game-flow
//! dependencies. All types here are pure and directly testable.

mod guesses;
mod secret;

pub use guesses::GuessedLetters;
pub use secret::{SecretWord, SecretWordError};
