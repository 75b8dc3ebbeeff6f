//! Session score
//!
//! The cumulative score lives for one program run, across replays. It is an
//! explicit object handed to the front ends, not process-wide state.

use super::difficulty::Difficulty;

/// Cumulative score across the rounds of one program run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    score: u32,
}

impl Session {
    /// Start a session at zero points
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Award the win bonus for a round played at the given tier
    ///
    /// Called only after a won round; lost rounds change nothing. Returns the
    /// updated total.
    pub fn award(&mut self, difficulty: Difficulty) -> u32 {
        self.score += difficulty.points();
        self.score
    }

    /// Current total
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_zero() {
        assert_eq!(Session::new().score(), 0);
    }

    #[test]
    fn award_adds_tier_points() {
        let mut session = Session::new();
        assert_eq!(session.award(Difficulty::Easy), 1);
        assert_eq!(session.award(Difficulty::Medium), 3);
        assert_eq!(session.award(Difficulty::Hard), 6);
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn award_uses_the_round_just_played() {
        // Replays re-select difficulty; each award stands alone
        let mut session = Session::new();
        session.award(Difficulty::Hard);
        session.award(Difficulty::Easy);
        assert_eq!(session.score(), 4);
    }
}
