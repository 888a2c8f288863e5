//! Move-path enumeration for regression testing and benchmarking.
//!
//! Counts leaf moves `depth` plies below a state. Finished games contribute no
//! children, so counts stay meaningful once a side has been eliminated.

use std::sync::Arc;
use std::thread;

use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_rules::promotion_row;
use crate::game_state::draughts_types::{GameState, Move};
use crate::move_generation::legal_move_apply::{GameEngine, MoveOutcome};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub game_overs: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.game_overs += rhs.game_overs;
    }
}

pub fn perft<G: MoveGenerator>(engine: &GameEngine<G>, state: &GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    if state.status().is_over() {
        return total;
    }

    for mv in engine.rules().available_moves(state.board(), state.current_player()) {
        perft_recurse(engine, state, &mv, depth, &mut total);
    }
    total
}

/// Same counts as [`perft`], one thread per root move.
pub fn perft_multi_threaded<G>(
    engine: Arc<GameEngine<G>>,
    state: &GameState,
    depth: u8,
) -> DraughtsResult<PerftCounts>
where
    G: MoveGenerator + 'static,
{
    if depth == 0 || state.status().is_over() {
        return Ok(perft(engine.as_ref(), state, depth));
    }

    let root_moves = engine
        .rules()
        .available_moves(state.board(), state.current_player());
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let engine_ref = Arc::clone(&engine);
        let root = state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(engine_ref.as_ref(), &root, &mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| DraughtsError::Engine("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    engine: &GameEngine<G>,
    state: &GameState,
    mv: &Move,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let MoveOutcome::Applied(next) = engine.make_move(state, mv) else {
        return;
    };

    if depth == 1 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        let was_man = state.board().get_piece(mv.from).is_some_and(|p| !p.is_king);
        if was_man && mv.to.row() == promotion_row(state.current_player().color()) {
            counts.promotions += 1;
        }
        if next.status().is_over() {
            counts.game_overs += 1;
        }
        return;
    }

    counts.merge(perft(engine, &next, depth - 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::draughts_types::{GameStatus, Piece, Player, PlayerColor, Position};

    #[test]
    fn initial_position_counts() {
        let engine = GameEngine::new();
        let state = GameState::new_game(PlayerColor::White);
        assert_eq!(perft(&engine, &state, 0).nodes, 1);
        assert_eq!(perft(&engine, &state, 1).nodes, 7);
        assert_eq!(perft(&engine, &state, 2).nodes, 49);
        assert_eq!(perft(&engine, &state, 2).captures, 0);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let engine = GameEngine::new();
        let state = GameState::new_game(PlayerColor::Black);
        let single = perft(&engine, &state, 3);
        let multi = perft_multi_threaded(Arc::new(engine), &state, 3).expect("perft should run");
        assert_eq!(single, multi);
    }

    #[test]
    fn finishing_capture_is_counted_as_game_over() {
        let mut board = Board::new();
        board.set_piece(Position::at(3, 3), Some(Piece::man(PlayerColor::White)));
        board.set_piece(Position::at(2, 4), Some(Piece::man(PlayerColor::Black)));
        let state = GameState::new(board, Player::new(PlayerColor::White), GameStatus::InProgress);

        let counts = perft(&GameEngine::new(), &state, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                captures: 1,
                promotions: 0,
                game_overs: 1,
            }
        );
        assert_eq!(perft(&GameEngine::new(), &state, 2).nodes, 0);
    }
}
