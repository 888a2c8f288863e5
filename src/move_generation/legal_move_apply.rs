//! Move application and end-of-game evaluation.
//!
//! `GameEngine::make_move` validates the move against its rules, then builds a
//! fresh `GameState` on a cloned board. The input state is never modified;
//! rejection is reported as `MoveOutcome::Rejected`.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::draughts_rules::promotion_row;
use crate::game_state::draughts_types::{GameState, GameStatus, Move, Piece, Player, PlayerColor};
use crate::move_generation::legal_move_generator::DraughtsRules;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The game already has a result.
    GameOver,
    /// The move is not in the current player's legal move set.
    IllegalMove,
    /// A session received a human move while the computer is to move.
    AwaitingComputer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(GameState),
    Rejected(RejectReason),
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    pub fn applied(self) -> Option<GameState> {
        match self {
            MoveOutcome::Applied(state) => Some(state),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// The new state, or `previous` unchanged if the move was rejected.
    pub fn or_keep(self, previous: GameState) -> GameState {
        self.applied().unwrap_or(previous)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine<G: MoveGenerator = DraughtsRules> {
    rules: G,
}

impl GameEngine<DraughtsRules> {
    pub fn new() -> Self {
        Self::with_rules(DraughtsRules)
    }
}

impl<G: MoveGenerator> GameEngine<G> {
    pub fn with_rules(rules: G) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &G {
        &self.rules
    }

    pub fn make_move(&self, state: &GameState, mv: &Move) -> MoveOutcome {
        if state.status() != GameStatus::InProgress {
            debug!("rejected {mv}: game is over ({})", state.status());
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        let player = state.current_player();
        if !self.rules.is_move_valid(state.board(), mv, player) {
            debug!("rejected {mv}: not legal for {}", player.color());
            return MoveOutcome::Rejected(RejectReason::IllegalMove);
        }
        let Some(piece) = state.board().get_piece(mv.from) else {
            return MoveOutcome::Rejected(RejectReason::IllegalMove);
        };

        let board = apply_to_board(state.board(), mv, piece);
        let next_player = player.opponent();
        let status = self.evaluate_status(&board, next_player);

        MoveOutcome::Applied(GameState::new(board, next_player, status))
    }

    /// Status of `board` with `next_player` about to move.
    ///
    /// A side with no pieces loses, whichever side is to move. Otherwise the
    /// side to move loses when it has no legal move. `Draw` is never produced.
    pub fn evaluate_status(&self, board: &Board, next_player: Player) -> GameStatus {
        if board.count_pieces(PlayerColor::White) == 0 {
            return GameStatus::BlackWon;
        }
        if board.count_pieces(PlayerColor::Black) == 0 {
            return GameStatus::WhiteWon;
        }
        if self.rules.available_moves(board, next_player).is_empty() {
            return GameStatus::won_by(next_player.color().opposite());
        }
        GameStatus::InProgress
    }
}

/// Whether a man of `piece`'s color ending its move on `row` becomes a king.
#[inline]
pub fn should_promote(piece: Piece, row: u8) -> bool {
    !piece.is_king && row == promotion_row(piece.color)
}

fn apply_to_board(board: &Board, mv: &Move, piece: Piece) -> Board {
    let mut next = board.clone();
    next.set_piece(mv.from, None);
    for &captured in &mv.captured {
        next.set_piece(captured, None);
    }
    let placed = if should_promote(piece, mv.to.row()) {
        piece.promoted()
    } else {
        piece
    };
    next.set_piece(mv.to, Some(placed));
    next
}
