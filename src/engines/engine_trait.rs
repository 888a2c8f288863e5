//! Move-picking abstraction used by sessions and self-play.

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::{GameState, Move};

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move, or `None` if it has no legal move.
    fn choose_move(&mut self, state: &GameState) -> DraughtsResult<Option<Move>>;
}
