//! Head-to-head self-play harness.
//!
//! Plays two engines against each other from the initial position, without
//! any session or UI, and records every move. Used by the series binary and
//! by the playout tests.

use std::time::Instant;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{GameState, GameStatus, Move, PlayerColor};
use crate::move_generation::legal_move_apply::{GameEngine, MoveOutcome};

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub starting_color: PlayerColor,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            starting_color: PlayerColor::White,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub final_state: GameState,
    pub moves: Vec<Move>,
    pub elapsed_ns: u128,
}

impl MatchResult {
    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// `None` when the ply limit was reached first.
    pub fn outcome(&self) -> Option<GameStatus> {
        let status = self.final_state.status();
        status.is_over().then_some(status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub unfinished: u16,
    pub total_plies: usize,
    pub total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        };
        let avg_ms = if self.total_plies == 0 {
            0.0
        } else {
            self.total_time_ns as f64 / self.total_plies as f64 / 1_000_000.0
        };
        format!(
            "games={} white_wins={} black_wins={} unfinished={} avg_plies={:.1} avg_ply_ms={:.4}",
            self.games, self.white_wins, self.black_wins, self.unfinished, avg_plies, avg_ms
        )
    }
}

/// Play one match between `white` and `black`.
pub fn play_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &MatchConfig,
) -> DraughtsResult<MatchResult> {
    let engine = GameEngine::new();
    let mut state = GameState::new_game(config.starting_color);
    let mut moves = Vec::new();
    white.new_game();
    black.new_game();

    let started = Instant::now();
    for _ in 0..config.max_plies {
        if state.status().is_over() {
            break;
        }
        let mover = state.current_player().color();
        let choice = match mover {
            PlayerColor::White => white.choose_move(&state)?,
            PlayerColor::Black => black.choose_move(&state)?,
        };
        let Some(mv) = choice else {
            break;
        };
        match engine.make_move(&state, &mv) {
            MoveOutcome::Applied(next) => {
                state = next;
                moves.push(mv);
            }
            MoveOutcome::Rejected(reason) => {
                return Err(DraughtsError::Engine(format!(
                    "{mover} engine proposed rejected move {mv}: {reason:?}"
                )));
            }
        }
    }

    Ok(MatchResult {
        final_state: state,
        moves,
        elapsed_ns: started.elapsed().as_nanos(),
    })
}

/// Two seeded random engines, one game.
pub fn play_random_match(config: &MatchConfig) -> DraughtsResult<MatchResult> {
    let mut white = RandomEngine::with_seed(config.seed);
    let mut black = RandomEngine::with_seed(config.seed.wrapping_add(1));
    play_match(&mut white, &mut black, config)
}

/// `games` random matches with consecutive seeds starting at `config.seed`.
pub fn play_random_series(games: u16, config: &MatchConfig) -> DraughtsResult<MatchSeriesStats> {
    let mut stats = MatchSeriesStats {
        games,
        ..MatchSeriesStats::default()
    };
    for game in 0..games {
        let game_config = MatchConfig {
            seed: config.seed.wrapping_add(u64::from(game) * 2),
            ..config.clone()
        };
        let result = play_random_match(&game_config)?;
        match result.outcome() {
            Some(GameStatus::WhiteWon) => stats.white_wins += 1,
            Some(GameStatus::BlackWon) => stats.black_wins += 1,
            _ => stats.unfinished += 1,
        }
        stats.total_plies += result.plies();
        stats.total_time_ns += result.elapsed_ns;
    }
    Ok(stats)
}
