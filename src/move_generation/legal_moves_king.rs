//! Flying kings: long slides, and captures that may land on any empty cell
//! beyond the single opponent piece jumped on a ray.

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::DIAGONALS;
use crate::game_state::draughts_types::{Move, PlayerColor, Position};
use crate::move_generation::legal_move_shared::{empty_ray, CaptureStep};

pub fn generate_king_moves(board: &Board, from: Position, out: &mut Vec<Move>) {
    for direction in DIAGONALS {
        out.extend(empty_ray(board, from, direction).map(|to| Move::simple(from, to)));
    }
}

/// Per ray: skip empty cells, the first occupied cell must be an opponent, and
/// every empty cell after it up to the next obstruction is a landing.
pub fn king_capture_steps(board: &Board, from: Position, color: PlayerColor) -> Vec<CaptureStep> {
    let mut steps = Vec::new();
    for direction in DIAGONALS {
        let mut distance = 1;
        let captured = loop {
            match from.offset(direction, distance) {
                None => break None,
                Some(pos) => match board.get_piece(pos) {
                    None => distance += 1,
                    Some(piece) if piece.color != color => break Some(pos),
                    Some(_) => break None,
                },
            }
        };
        let Some(captured) = captured else {
            continue;
        };
        steps.extend(
            empty_ray(board, captured, direction).map(|landing| CaptureStep { captured, landing }),
        );
    }
    steps
}
