//! Binary snapshots of a game state.
//!
//! A front end that polls the table from another thread can take a
//! snapshot of the live state and decode it on its side. The encoding is
//! bincode over the serde derives of the data model, random stream
//! included, so a decoded state continues exactly like the original.

use crate::core::GameState;
use crate::error::Result;

/// Encode a state.
pub fn encode(state: &GameState) -> Result<Vec<u8>> {
    Ok(bincode::serialize(state)?)
}

/// Decode a state produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<GameState> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::setup::quick_setup;

    #[test]
    fn test_snapshot_restores_state() {
        let state = quick_setup(7).unwrap();
        let bytes = encode(&state).unwrap();
        let restored = decode(&bytes).unwrap();

        assert_eq!(restored.card_count(), state.card_count());
        assert_eq!(restored.players, state.players);
        assert_eq!(restored.peoples, state.peoples);
        assert!(restored.check_zones().is_ok());
    }

    #[test]
    fn test_snapshot_keeps_random_stream() {
        let mut state = quick_setup(3).unwrap();
        let mut restored = decode(&encode(&state).unwrap()).unwrap();

        assert_eq!(
            state.rng.gen_range_usize(0..1000),
            restored.rng.gen_range_usize(0..1000)
        );
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode(&[1, 2, 3]).is_err());
    }
}
