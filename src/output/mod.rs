//! Terminal output: shared French game text and HUD formatting

pub mod formatters;
pub mod messages;

pub use formatters::{
    errors_remaining_line, final_score_line, loss_banner, rejection_message, score_line,
    used_letters_line, win_banner,
};
