//! Canonical draughts rule constants.
//!
//! Board geometry, starting layout rows, and promotion rows live here so the
//! board, move generators, and game engine agree on them.

use crate::game_state::draughts_types::PlayerColor;

/// Rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 64;

/// Rows filled with BLACK men at the start of a game.
pub const BLACK_START_ROWS: std::ops::Range<u8> = 0..3;

/// Rows filled with WHITE men at the start of a game.
pub const WHITE_START_ROWS: std::ops::Range<u8> = 5..8;

/// The four diagonal directions as `(row_delta, col_delta)`, in generation order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Initial position in snapshot notation (row-major, row 0 first).
pub const STARTING_BOARD_SNAPSHOT: &str = concat!(
    ".b.b.b.b",
    "b.b.b.b.",
    ".b.b.b.b",
    "........",
    "........",
    "w.w.w.w.",
    ".w.w.w.w",
    "w.w.w.w.",
);

#[inline]
pub const fn is_inside(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Playable cells are the dark ones, where `row + col` is odd.
#[inline]
pub const fn is_dark_cell(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}

/// Row delta of a man's non-capturing step.
#[inline]
pub const fn forward_direction(color: PlayerColor) -> i8 {
    match color {
        PlayerColor::White => -1,
        PlayerColor::Black => 1,
    }
}

/// Row on which a man of `color` becomes a king.
#[inline]
pub const fn promotion_row(color: PlayerColor) -> u8 {
    match color {
        PlayerColor::White => 0,
        PlayerColor::Black => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_covers_exactly_the_board() {
        assert!(is_inside(0, 0));
        assert!(is_inside(7, 7));
        assert!(!is_inside(-1, 3));
        assert!(!is_inside(3, 8));
    }

    #[test]
    fn starting_snapshot_marks_only_dark_cells() {
        for (index, symbol) in STARTING_BOARD_SNAPSHOT.chars().enumerate() {
            let (row, col) = ((index / 8) as u8, (index % 8) as u8);
            if symbol != '.' {
                assert!(is_dark_cell(row, col), "piece on light cell {index}");
            }
        }
        assert_eq!(STARTING_BOARD_SNAPSHOT.len(), CELL_COUNT);
    }
}
