use crate::game_state::board::Board;
use crate::game_state::draughts_rules::CELL_COUNT;
use crate::game_state::draughts_types::GameState;
use crate::utils::game_snapshot::GameSnapshot;

pub fn generate_snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        board: generate_board_field(state.board()),
        current_player: state.current_player().color().name().to_owned(),
        status: state.status().name().to_owned(),
    }
}

/// 64 symbols, row 0 first.
pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(CELL_COUNT);
    for (_, piece) in board.squares() {
        out.push(piece.map_or('.', |p| p.symbol()));
    }
    out
}
