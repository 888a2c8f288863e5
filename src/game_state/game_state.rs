//! Immutable game snapshot.
//!
//! `GameState` owns its board outright. Transitions build a new value and never
//! touch the previous one, so two live states never share a board.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{GameStatus, Player, PlayerColor};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    pub fn new(board: Board, current_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            current_player,
            status,
        }
    }

    /// Initial layout with `starting_color` to move.
    pub fn new_game(starting_color: PlayerColor) -> Self {
        Self::new(
            Board::starting(),
            Player::new(starting_color),
            GameStatus::InProgress,
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(PlayerColor::White)
    }
}
