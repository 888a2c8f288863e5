//! Random-move engine.
//!
//! Samples uniformly from the legal move set. This is the computer opponent;
//! it does no search or evaluation.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::{DraughtsError, DraughtsResult};
use crate::game_state::draughts_types::{GameState, Move};
use crate::move_generation::legal_move_generator::DraughtsRules;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    rules: DraughtsRules,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rules: DraughtsRules,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rules: DraughtsRules,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Warcaby Random"
    }

    fn choose_move(&mut self, state: &GameState) -> DraughtsResult<Option<Move>> {
        let legal_moves = self
            .rules
            .available_moves(state.board(), state.current_player());

        if legal_moves.is_empty() {
            return Ok(None);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or_else(|| DraughtsError::Engine("failed to choose a random move".to_owned()))?;

        debug!(
            "random engine picked {picked} out of {} legal moves",
            legal_moves.len()
        );
        Ok(Some(picked.clone()))
    }
}
