//! Player identification.
//!
//! The game is strictly two-player, so a `PlayerId` is either seat 0 or
//! seat 1 and always has exactly one opponent.

use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier (seat 0 or seat 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// First seat.
    pub const ZERO: PlayerId = PlayerId(0);
    /// Second seat.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index out of range");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in table order.
    ///
    /// ```
    /// use gods_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::ZERO, PlayerId::ONE]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::new(0).index(), 0);
        assert_eq!(PlayerId::new(1).index(), 1);
        assert_eq!(format!("{}", PlayerId::ZERO), "Player 1");
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in PlayerId::all() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    #[should_panic(expected = "Player index out of range")]
    fn test_third_seat_rejected() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::ONE).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::ONE);
    }
}
