//! Game logic: difficulty tiers, the round state machine, and session score

mod difficulty;
mod round;
mod session;

pub use difficulty::Difficulty;
pub use round::{GuessError, GuessOutcome, MAX_ERRORS, Round, RoundStatus};
pub use session::Session;
