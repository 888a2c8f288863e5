//! Passive value types shared by the board, move generation, and engines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::moves::move_description::{Move, MoveKind};

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::{is_inside, BOARD_SIZE};

/// Side color. WHITE starts on rows 5-7 and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 2] = [PlayerColor::White, PlayerColor::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// Enumeration name used by the snapshot format.
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::White => "WHITE",
            PlayerColor::Black => "BLACK",
        }
    }
}

impl FromStr for PlayerColor {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHITE" => Ok(PlayerColor::White),
            "BLACK" => Ok(PlayerColor::Black),
            _ => Err(DraughtsError::UnknownPlayerColor(s.to_owned())),
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The side whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    color: PlayerColor,
}

impl Player {
    #[inline]
    pub const fn new(color: PlayerColor) -> Self {
        Self { color }
    }

    #[inline]
    pub const fn color(self) -> PlayerColor {
        self.color
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        Self::new(self.color.opposite())
    }
}

impl From<PlayerColor> for Player {
    fn from(color: PlayerColor) -> Self {
        Self::new(color)
    }
}

/// A piece on the board. Promotion produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PlayerColor,
    pub is_king: bool,
}

impl Piece {
    #[inline]
    pub const fn man(color: PlayerColor) -> Self {
        Self {
            color,
            is_king: false,
        }
    }

    #[inline]
    pub const fn king(color: PlayerColor) -> Self {
        Self {
            color,
            is_king: true,
        }
    }

    #[inline]
    pub const fn promoted(self) -> Self {
        Self::king(self.color)
    }

    /// Snapshot symbol: `w`/`W` for WHITE man/king, `b`/`B` for BLACK.
    pub const fn symbol(self) -> char {
        match (self.color, self.is_king) {
            (PlayerColor::White, false) => 'w',
            (PlayerColor::White, true) => 'W',
            (PlayerColor::Black, false) => 'b',
            (PlayerColor::Black, true) => 'B',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Piece::man(PlayerColor::White)),
            'W' => Some(Piece::king(PlayerColor::White)),
            'b' => Some(Piece::man(PlayerColor::Black)),
            'B' => Some(Piece::king(PlayerColor::Black)),
            _ => None,
        }
    }
}

/// A cell on the 8x8 board. Always in range: construction validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Checked constructor for coordinates coming from outside the crate.
    pub fn new(row: i8, col: i8) -> DraughtsResult<Self> {
        if is_inside(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(DraughtsError::InvalidPosition { row, col })
        }
    }

    /// Constructor for literal coordinates.
    ///
    /// Panics if `row` or `col` is not in `0..8`.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8,
            "position out of range"
        );
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// The cell `steps` diagonal hops away in direction `(dr, dc)`, if on-board.
    #[inline]
    pub fn offset(self, (dr, dc): (i8, i8), steps: i8) -> Option<Self> {
        let row = self.row as i8 + dr * steps;
        let col = self.col as i8 + dc * steps;
        Self::new(row, col).ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Outcome status of a game.
///
/// `Draw` is part of the persisted vocabulary but no rule currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameStatus {
    pub const fn name(self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::WhiteWon => "WHITE_WON",
            GameStatus::BlackWon => "BLACK_WON",
            GameStatus::Draw => "DRAW",
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Status in which `color` has won.
    #[inline]
    pub const fn won_by(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => GameStatus::WhiteWon,
            PlayerColor::Black => GameStatus::BlackWon,
        }
    }
}

impl FromStr for GameStatus {
    type Err = DraughtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(GameStatus::InProgress),
            "WHITE_WON" => Ok(GameStatus::WhiteWon),
            "BLACK_WON" => Ok(GameStatus::BlackWon),
            "DRAW" => Ok(GameStatus::Draw),
            _ => Err(DraughtsError::UnknownGameStatus(s.to_owned())),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range_coordinates() {
        assert!(Position::new(7, 7).is_ok());
        assert!(matches!(
            Position::new(8, 0),
            Err(DraughtsError::InvalidPosition { row: 8, col: 0 })
        ));
        assert!(Position::new(0, -1).is_err());
    }

    #[test]
    fn offset_walks_diagonals_and_stops_at_edges() {
        let pos = Position::at(3, 3);
        assert_eq!(pos.offset((-1, 1), 2), Some(Position::at(1, 5)));
        assert_eq!(pos.offset((1, 1), 4), Some(Position::at(7, 7)));
        assert_eq!(pos.offset((1, 1), 5), None);
    }

    #[test]
    fn enumeration_names_parse_back() {
        for color in PlayerColor::ALL {
            assert_eq!(color.name().parse::<PlayerColor>().unwrap(), color);
        }
        for status in [
            GameStatus::InProgress,
            GameStatus::WhiteWon,
            GameStatus::BlackWon,
            GameStatus::Draw,
        ] {
            assert_eq!(status.name().parse::<GameStatus>().unwrap(), status);
        }
        assert!("white".parse::<PlayerColor>().is_err());
        assert!("STALEMATE".parse::<GameStatus>().is_err());
    }

    #[test]
    fn promotion_returns_a_new_king_value() {
        let man = Piece::man(PlayerColor::Black);
        let king = man.promoted();
        assert!(!man.is_king);
        assert!(king.is_king);
        assert_eq!(king.color, PlayerColor::Black);
        assert_eq!(Piece::from_symbol(king.symbol()), Some(king));
    }

    #[test]
    fn serde_uses_enumeration_names() {
        let json = serde_json::to_string(&GameStatus::WhiteWon).unwrap();
        assert_eq!(json, "\"WHITE_WON\"");
        let color: PlayerColor = serde_json::from_str("\"BLACK\"").unwrap();
        assert_eq!(color, PlayerColor::Black);
    }
}
