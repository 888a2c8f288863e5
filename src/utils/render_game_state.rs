//! Plain-text board renderer.
//!
//! Uses the snapshot symbols, with row numbers down the side and column numbers
//! along the top and bottom. Row 0 (BLACK's home row) is printed first.

use crate::game_state::board::Board;
use crate::game_state::draughts_types::{GameState, Position};

const COLUMN_HEADER: &str = "  0 1 2 3 4 5 6 7";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(COLUMN_HEADER);
    out.push('\n');

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        for col in 0..8u8 {
            let pos = Position::at(row, col);
            out.push(' ');
            out.push(board.get_piece(pos).map_or('.', |p| p.symbol()));
        }
        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str(COLUMN_HEADER);
    out
}

pub fn render_game_state(state: &GameState) -> String {
    format!(
        "{}\nto move: {}  status: {}",
        render_board(state.board()),
        state.current_player().color(),
        state.status()
    )
}
