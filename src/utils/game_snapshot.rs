//! Persistable game snapshot.
//!
//! Three strings: 64 board symbols row-major (`.` empty, `w`/`W` WHITE
//! man/king, `b`/`B` BLACK man/king), the side to move, and the status, both
//! as enumeration names. Storage is the caller's concern; JSON helpers are
//! provided for key-value stores.

use serde::{Deserialize, Serialize};

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::{GameState, GameStatus};
use crate::utils::snapshot_generator::generate_snapshot;
use crate::utils::snapshot_parser::parse_snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: String,
    pub current_player: String,
    pub status: String,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        generate_snapshot(state)
    }

    pub fn restore(&self) -> DraughtsResult<GameState> {
        parse_snapshot(self)
    }

    pub fn to_json(&self) -> DraughtsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> DraughtsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Only unfinished games are worth saving; a finished one clears the slot.
#[inline]
pub fn should_persist(state: &GameState) -> bool {
    state.status() == GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DraughtsError;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{Player, PlayerColor};

    #[test]
    fn json_round_trip_restores_the_same_state() {
        let state = GameState::new_game(PlayerColor::Black);
        let json = GameSnapshot::capture(&state).to_json().unwrap();
        let restored = GameSnapshot::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn json_field_names_are_stable() {
        let json = GameSnapshot::capture(&GameState::new_game(PlayerColor::White))
            .to_json()
            .unwrap();
        assert!(json.contains("\"board\":\".b.b.b.b"));
        assert!(json.contains("\"current_player\":\"WHITE\""));
        assert!(json.contains("\"status\":\"IN_PROGRESS\""));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            GameSnapshot::from_json("{\"board\":"),
            Err(DraughtsError::Serialization(_))
        ));
    }

    #[test]
    fn finished_games_are_not_persisted() {
        let live = GameState::new_game(PlayerColor::White);
        let over = GameState::new(Board::new(), Player::new(PlayerColor::White), GameStatus::BlackWon);
        assert!(should_persist(&live));
        assert!(!should_persist(&over));
    }
}
