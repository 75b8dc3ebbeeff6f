//! Formatting utilities for the game HUD

use super::messages;
use crate::core::{GuessedLetters, SecretWord};
use crate::game::GuessError;

/// The errors-remaining countdown line
#[must_use]
pub fn errors_remaining_line(remaining: u8) -> String {
    format!("Nombre d'erreurs à ne pas dépasser : {remaining}")
}

/// The session score line
#[must_use]
pub fn score_line(score: u32) -> String {
    format!("Votre score : {score} pts")
}

/// The used-letters history line
#[must_use]
pub fn used_letters_line(guessed: &GuessedLetters) -> String {
    format!("Lettres utilisées : {}", guessed.history())
}

/// The congratulations banner for a won round
#[must_use]
pub fn win_banner(attempts: u32) -> String {
    format!("Félicitations ! Vous avez gagné ! Nombre de tentatives total : {attempts}")
}

/// The loss banner, revealing the secret word
#[must_use]
pub fn loss_banner(secret: &SecretWord) -> String {
    format!(
        "Vous avez commis 7 erreurs ! Perdu !\nLe mot à deviner était : {}",
        secret.reveal_all()
    )
}

/// The final score line printed at exit
#[must_use]
pub fn final_score_line(score: u32) -> String {
    format!("Voici votre score final : {score} pts")
}

/// The French re-prompt message for a rejected guess
#[must_use]
pub const fn rejection_message(error: &GuessError) -> &'static str {
    match error {
        GuessError::NotOneLetter(0) => messages::REJECT_EMPTY,
        GuessError::NotOneLetter(_) => messages::REJECT_MULTI,
        GuessError::Disallowed(_) => messages::REJECT_DISALLOWED,
        GuessError::AlreadyGuessed(_) => messages::REJECT_DUPLICATE,
    }
}
