use crate::game_state::board::Board;
use crate::game_state::draughts_types::{PlayerColor, Position};

/// One hop of a capture chain: the opponent cell jumped and the landing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureStep {
    pub captured: Position,
    pub landing: Position,
}

#[inline]
pub fn is_empty(board: &Board, pos: Position) -> bool {
    board.get_piece(pos).is_none()
}

#[inline]
pub fn is_opponent(board: &Board, pos: Position, color: PlayerColor) -> bool {
    board.get_piece(pos).is_some_and(|piece| piece.color != color)
}

/// Empty cells along a diagonal ray from `from`, up to the first occupied cell.
pub fn empty_ray(board: &Board, from: Position, direction: (i8, i8)) -> impl Iterator<Item = Position> + '_ {
    (1..)
        .map_while(move |steps| from.offset(direction, steps))
        .take_while(move |pos| is_empty(board, *pos))
}
