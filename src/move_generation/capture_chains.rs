//! Maximal capture-chain search.
//!
//! Depth-first over cloned board snapshots: each branch removes the jumped
//! piece and relocates the mover on its own copy, so sibling branches never
//! observe each other. A chain is emitted only where no further hop exists,
//! which makes every returned capture maximal. The piece keeps its man/king
//! kind for the whole chain; promotion is applied later, when the move is made.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{Move, Piece, Position};
use crate::move_generation::legal_move_shared::CaptureStep;
use crate::move_generation::legal_moves_king::king_capture_steps;
use crate::move_generation::legal_moves_man::man_capture_steps;

/// Single-hop captures for `piece` standing on `from`.
pub fn capture_steps(board: &Board, from: Position, piece: Piece) -> Vec<CaptureStep> {
    if piece.is_king {
        king_capture_steps(board, from, piece.color)
    } else {
        man_capture_steps(board, from, piece.color)
    }
}

/// All maximal capture chains for the piece on `origin`.
pub fn generate_capture_chains(board: &Board, origin: Position, piece: Piece, out: &mut Vec<Move>) {
    let mut captured = Vec::new();
    search(board, origin, origin, piece, &mut captured, out);
}

fn search(
    board: &Board,
    origin: Position,
    current: Position,
    piece: Piece,
    captured: &mut Vec<Position>,
    out: &mut Vec<Move>,
) {
    let steps = capture_steps(board, current, piece);

    if steps.is_empty() {
        if !captured.is_empty() {
            let chain = Move::capture(origin, current, captured.clone());
            trace!("capture chain {chain}");
            out.push(chain);
        }
        return;
    }

    for step in steps {
        let mut next = board.clone();
        next.set_piece(current, None);
        next.set_piece(step.captured, None);
        next.set_piece(step.landing, Some(piece));

        captured.push(step.captured);
        search(&next, origin, step.landing, piece, captured, out);
        captured.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::PlayerColor;

    fn chains(board: &Board, origin: Position) -> Vec<Move> {
        let piece = board.get_piece(origin).expect("origin should hold a piece");
        let mut out = Vec::new();
        generate_capture_chains(board, origin, piece, &mut out);
        out
    }

    #[test]
    fn no_capture_yields_no_chain() {
        let mut board = Board::new();
        board.set_piece(Position::at(5, 0), Some(Piece::man(PlayerColor::White)));
        assert!(chains(&board, Position::at(5, 0)).is_empty());
    }

    #[test]
    fn double_jump_is_returned_as_one_maximal_chain() {
        let mut board = Board::new();
        board.set_piece(Position::at(6, 1), Some(Piece::man(PlayerColor::White)));
        board.set_piece(Position::at(5, 2), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(3, 4), Some(Piece::man(PlayerColor::Black)));

        assert_eq!(
            chains(&board, Position::at(6, 1)),
            vec![Move::capture(
                Position::at(6, 1),
                Position::at(2, 5),
                vec![Position::at(5, 2), Position::at(3, 4)],
            )]
        );
    }

    #[test]
    fn branching_chains_are_all_emitted_in_depth_first_order() {
        // After landing on (2,5) the man can take either (1,4) or (1,6).
        let mut board = Board::new();
        board.set_piece(Position::at(4, 3), Some(Piece::man(PlayerColor::White)));
        board.set_piece(Position::at(3, 4), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(1, 4), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(1, 6), Some(Piece::man(PlayerColor::Black)));

        assert_eq!(
            chains(&board, Position::at(4, 3)),
            vec![
                Move::capture(
                    Position::at(4, 3),
                    Position::at(0, 3),
                    vec![Position::at(3, 4), Position::at(1, 4)],
                ),
                Move::capture(
                    Position::at(4, 3),
                    Position::at(0, 7),
                    vec![Position::at(3, 4), Position::at(1, 6)],
                ),
            ]
        );
    }

    #[test]
    fn man_is_not_promoted_mid_chain() {
        // Passing over row 0 must not turn the man into a flying king.
        let mut board = Board::new();
        board.set_piece(Position::at(2, 1), Some(Piece::man(PlayerColor::White)));
        board.set_piece(Position::at(1, 2), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(1, 4), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(4, 7), Some(Piece::man(PlayerColor::Black)));

        assert_eq!(
            chains(&board, Position::at(2, 1)),
            vec![Move::capture(
                Position::at(2, 1),
                Position::at(2, 5),
                vec![Position::at(1, 2), Position::at(1, 4)],
            )]
        );
    }

    #[test]
    fn flying_king_continues_chain_from_each_landing() {
        let mut board = Board::new();
        board.set_piece(Position::at(7, 0), Some(Piece::king(PlayerColor::White)));
        board.set_piece(Position::at(5, 2), Some(Piece::man(PlayerColor::Black)));
        board.set_piece(Position::at(2, 3), Some(Piece::man(PlayerColor::Black)));

        let found = chains(&board, Position::at(7, 0));
        // Only landing on (3,4) reaches the second piece, via the (-1,-1) ray.
        assert_eq!(
            found,
            vec![
                Move::capture(Position::at(7, 0), Position::at(4, 3), vec![Position::at(5, 2)]),
                Move::capture(
                    Position::at(7, 0),
                    Position::at(1, 2),
                    vec![Position::at(5, 2), Position::at(2, 3)],
                ),
                Move::capture(
                    Position::at(7, 0),
                    Position::at(0, 1),
                    vec![Position::at(5, 2), Position::at(2, 3)],
                ),
                Move::capture(Position::at(7, 0), Position::at(2, 5), vec![Position::at(5, 2)]),
                Move::capture(Position::at(7, 0), Position::at(1, 6), vec![Position::at(5, 2)]),
                Move::capture(Position::at(7, 0), Position::at(0, 7), vec![Position::at(5, 2)]),
            ]
        );
    }

    #[test]
    fn input_board_is_not_mutated() {
        let mut board = Board::new();
        board.set_piece(Position::at(3, 3), Some(Piece::man(PlayerColor::White)));
        board.set_piece(Position::at(2, 4), Some(Piece::man(PlayerColor::Black)));
        let before = board.clone();
        let _ = chains(&board, Position::at(3, 3));
        assert_eq!(board, before);
    }
}
