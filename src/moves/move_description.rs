//! Move descriptors.
//!
//! A move is a start cell, an end cell, and the ordered list of opponent cells
//! it clears. An empty list is a simple step or slide; otherwise the move is a
//! whole capture chain. Equality compares all three, including capture order.

use std::fmt;

use crate::game_state::draughts_types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Vec<Position>,
}

/// Borrowed view of a move's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind<'a> {
    Simple,
    Capture(&'a [Position]),
}

impl Move {
    #[inline]
    pub fn simple(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }

    #[inline]
    pub fn capture(from: Position, to: Position, captured: Vec<Position>) -> Self {
        Self { from, to, captured }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    pub fn kind(&self) -> MoveKind<'_> {
        if self.captured.is_empty() {
            MoveKind::Simple
        } else {
            MoveKind::Capture(&self.captured)
        }
    }
}

/// `(5,0)-(4,1)` for simple moves, `(3,3)x(1,5)[(2,4)]` for captures.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            MoveKind::Simple => write!(f, "{}-{}", self.from, self.to),
            MoveKind::Capture(captured) => {
                write!(f, "{}x{}[", self.from, self.to)?;
                for (i, pos) in captured.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{pos}")?;
                }
                f.write_str("]")
            }
        }
    }
}
