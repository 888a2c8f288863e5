//! Snapshot-to-GameState parser.
//!
//! Rebuilds a full state from the three snapshot fields. Any malformed field
//! fails the whole restore; nothing is partially applied.

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::board::Board;
use crate::game_state::draughts_rules::CELL_COUNT;
use crate::game_state::draughts_types::{GameState, GameStatus, Piece, Player, PlayerColor, Position};
use crate::utils::game_snapshot::GameSnapshot;

pub fn parse_snapshot(snapshot: &GameSnapshot) -> DraughtsResult<GameState> {
    let board = parse_board_field(&snapshot.board)?;
    let color: PlayerColor = snapshot.current_player.parse()?;
    let status: GameStatus = snapshot.status.parse()?;
    Ok(GameState::new(board, Player::new(color), status))
}

pub fn parse_board_field(field: &str) -> DraughtsResult<Board> {
    let cell_count = field.chars().count();
    if cell_count != CELL_COUNT {
        return Err(DraughtsError::InvalidBoardLength(cell_count));
    }

    let mut board = Board::new();
    for (index, symbol) in field.chars().enumerate() {
        let piece = match symbol {
            '.' => None,
            _ => Some(
                Piece::from_symbol(symbol)
                    .ok_or(DraughtsError::InvalidBoardSymbol { index, symbol })?,
            ),
        };
        board.set_piece(Position::at((index / 8) as u8, (index % 8) as u8), piece);
    }
    Ok(board)
}
