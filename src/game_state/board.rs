//! 8x8 grid of optional pieces.
//!
//! The board accepts arbitrary placements so restored snapshots and test
//! setups can describe any position. Legality of where pieces stand is a
//! property of move generation, not of this type. `Clone` is a full deep copy,
//! which is how every hypothetical or resulting position is produced.

use std::fmt;

use crate::game_state::draughts_rules::{
    is_dark_cell, is_inside, BLACK_START_ROWS, BOARD_SIZE, WHITE_START_ROWS,
};
use crate::game_state::draughts_types::{Piece, PlayerColor, Position};
use crate::utils::render_game_state::render_board;

const SIDE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; SIDE]; SIDE],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board in the initial layout.
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    #[inline]
    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.cells[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Clear every cell, then place BLACK men on the dark cells of rows 0-2
    /// and WHITE men on the dark cells of rows 5-7.
    pub fn reset(&mut self) {
        self.cells = [[None; SIDE]; SIDE];
        for (rows, color) in [
            (BLACK_START_ROWS, PlayerColor::Black),
            (WHITE_START_ROWS, PlayerColor::White),
        ] {
            for row in rows {
                for col in 0..SIDE as u8 {
                    if is_dark_cell(row, col) {
                        self.set_piece(Position::at(row, col), Some(Piece::man(color)));
                    }
                }
            }
        }
    }

    #[inline]
    pub const fn is_inside(row: i8, col: i8) -> bool {
        is_inside(row, col)
    }

    /// All 64 cells in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        (0..SIDE as u8).flat_map(move |row| {
            (0..SIDE as u8).map(move |col| {
                let pos = Position::at(row, col);
                (pos, self.get_piece(pos))
            })
        })
    }

    /// Occupied cells holding a piece of `color`, row-major.
    pub fn pieces_of(&self, color: PlayerColor) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares().filter_map(move |(pos, piece)| match piece {
            Some(piece) if piece.color == color => Some((pos, piece)),
            _ => None,
        })
    }

    pub fn count_pieces(&self, color: PlayerColor) -> usize {
        self.pieces_of(color).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_places_twelve_men_per_side_on_dark_cells() {
        let board = Board::starting();
        assert_eq!(board.count_pieces(PlayerColor::White), 12);
        assert_eq!(board.count_pieces(PlayerColor::Black), 12);
        assert_eq!(board.get_piece(Position::at(0, 1)), Some(Piece::man(PlayerColor::Black)));
        assert_eq!(board.get_piece(Position::at(7, 0)), Some(Piece::man(PlayerColor::White)));
        assert_eq!(board.get_piece(Position::at(0, 0)), None);
        assert_eq!(board.get_piece(Position::at(3, 2)), None);
        for (pos, piece) in board.squares() {
            if piece.is_some() {
                assert!(is_dark_cell(pos.row(), pos.col()));
            }
        }
    }

    #[test]
    fn reset_clears_previous_placements() {
        let mut board = Board::new();
        board.set_piece(Position::at(3, 3), Some(Piece::king(PlayerColor::White)));
        board.reset();
        assert_eq!(board.get_piece(Position::at(3, 3)), None);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let original = Board::starting();
        let mut copy = original.clone();
        copy.set_piece(Position::at(5, 0), None);
        assert!(original.get_piece(Position::at(5, 0)).is_some());
        assert!(copy.get_piece(Position::at(5, 0)).is_none());
    }

    #[test]
    fn arbitrary_placements_are_accepted() {
        let mut board = Board::new();
        board.set_piece(Position::at(0, 0), Some(Piece::man(PlayerColor::White)));
        assert_eq!(board.get_piece(Position::at(0, 0)), Some(Piece::man(PlayerColor::White)));
    }

    #[test]
    fn squares_are_row_major() {
        let board = Board::new();
        let order: Vec<usize> = board.squares().map(|(pos, _)| pos.index()).collect();
        assert_eq!(order, (0..64).collect::<Vec<_>>());
    }
}
