//! Men: forward-only steps, single-hop captures in all four directions.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::{forward_direction, DIAGONALS};
use crate::game_state::draughts_types::{Move, PlayerColor, Position};
use crate::move_generation::legal_move_shared::{is_empty, is_opponent, CaptureStep};

/// Non-capturing steps onto an empty forward diagonal neighbour.
pub fn generate_man_moves(board: &Board, from: Position, color: PlayerColor, out: &mut Vec<Move>) {
    let dr = forward_direction(color);
    for dc in [-1, 1] {
        if let Some(to) = from.offset((dr, dc), 1) {
            if is_empty(board, to) {
                out.push(Move::simple(from, to));
            }
        }
    }
}

/// Jumps over an adjacent opponent onto the empty cell directly behind it.
/// Backward jumps are allowed.
pub fn man_capture_steps(board: &Board, from: Position, color: PlayerColor) -> Vec<CaptureStep> {
    let mut steps = Vec::new();
    for direction in DIAGONALS {
        let Some(landing) = from.offset(direction, 2) else {
            continue;
        };
        let Some(captured) = from.offset(direction, 1) else {
            continue;
        };
        if is_opponent(board, captured, color) && is_empty(board, landing) {
            steps.push(CaptureStep { captured, landing });
        }
    }
    steps
}
