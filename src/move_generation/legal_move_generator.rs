//! Full legal move generation with the mandatory-capture rule.
//!
//! Scans the board row-major. Each piece of the side to move contributes its
//! maximal capture chains; if any piece can capture, only captures are legal,
//! otherwise every piece's ordinary moves are. Which piece captures is the
//! player's free choice, even when chain lengths differ.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Move, Player};
use crate::move_generation::capture_chains::generate_capture_chains;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_man::generate_man_moves;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct DraughtsRules;

impl MoveGenerator for DraughtsRules {
    fn available_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        get_available_moves(board, player)
    }
}

pub fn get_available_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut captures = Vec::new();
    let mut ordinary = Vec::new();

    for (from, piece) in board.pieces_of(player.color()) {
        generate_capture_chains(board, from, piece, &mut captures);
        if !captures.is_empty() {
            continue;
        }
        if piece.is_king {
            generate_king_moves(board, from, &mut ordinary);
        } else {
            generate_man_moves(board, from, piece.color, &mut ordinary);
        }
    }

    if captures.is_empty() {
        ordinary
    } else {
        captures
    }
}

pub fn is_move_valid(board: &Board, mv: &Move, player: Player) -> bool {
    get_available_moves(board, player).contains(mv)
}

pub fn has_capture(board: &Board, player: Player) -> bool {
    get_available_moves(board, player).iter().any(Move::is_capture)
}
