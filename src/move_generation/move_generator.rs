use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Move, Player};

/// Source of the legal move set for a side.
///
/// Implementations read the board and never mutate it, so one generator can be
/// shared across threads.
pub trait MoveGenerator: Send + Sync {
    fn available_moves(&self, board: &Board, player: Player) -> Vec<Move>;

    /// A move is valid iff it equals one of the available moves exactly.
    fn is_move_valid(&self, board: &Board, mv: &Move, player: Player) -> bool {
        self.available_moves(board, player).contains(mv)
    }

    fn has_capture(&self, board: &Board, player: Player) -> bool {
        self.available_moves(board, player)
            .iter()
            .any(Move::is_capture)
    }
}
