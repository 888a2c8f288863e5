//! A single running game with optional computer opponent.
//!
//! Holds the current `GameState`, applies human moves through the game engine,
//! and lets the computer (always BLACK) answer immediately when enabled.

use log::{info, warn};

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::draughts_types::{GameState, GameStatus, Move, PlayerColor};
use crate::move_generation::legal_move_apply::{GameEngine, MoveOutcome, RejectReason};
use crate::move_generation::move_generator::MoveGenerator;
use crate::session::session_settings::SessionSettings;

/// The side the computer plays when enabled.
pub const COMPUTER_COLOR: PlayerColor = PlayerColor::Black;

pub struct GameSession {
    engine: GameEngine,
    computer: Box<dyn Engine>,
    settings: SessionSettings,
    state: GameState,
}

impl GameSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_computer(settings, Box::new(RandomEngine::new()))
    }

    pub fn with_computer(settings: SessionSettings, computer: Box<dyn Engine>) -> Self {
        let mut session = Self {
            engine: GameEngine::new(),
            computer,
            settings,
            state: GameState::new_game(settings.starting_color),
        };
        session.restart();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn available_moves(&self) -> Vec<Move> {
        self.engine
            .rules()
            .available_moves(self.state.board(), self.state.current_player())
    }

    /// Whether the side to move is under the mandatory-capture rule.
    pub fn has_capture(&self) -> bool {
        self.engine
            .rules()
            .has_capture(self.state.board(), self.state.current_player())
    }

    /// Apply a human move, then the computer's reply if it is due.
    pub fn on_move(&mut self, mv: &Move) -> MoveOutcome {
        if self.is_computer_turn() {
            return MoveOutcome::Rejected(RejectReason::AwaitingComputer);
        }
        match self.engine.make_move(&self.state, mv) {
            MoveOutcome::Applied(next) => {
                self.set_current(next);
                self.play_computer_if_needed();
                MoveOutcome::Applied(self.state.clone())
            }
            rejected => rejected,
        }
    }

    pub fn restart(&mut self) {
        self.state = GameState::new_game(self.settings.starting_color);
        self.computer.new_game();
        self.play_computer_if_needed();
    }

    pub fn set_starting_color(&mut self, color: PlayerColor) {
        self.settings.starting_color = color;
        self.restart();
    }

    pub fn set_vs_computer(&mut self, enabled: bool) {
        self.settings.vs_computer = enabled;
        self.restart();
    }

    /// Store new settings; restart only if they changed and `restart_if_changed`.
    pub fn update_settings(&mut self, color: PlayerColor, vs_computer: bool, restart_if_changed: bool) {
        let changed =
            self.settings.starting_color != color || self.settings.vs_computer != vs_computer;
        self.settings = SessionSettings {
            starting_color: color,
            vs_computer,
        };
        if restart_if_changed && changed {
            self.restart();
        }
    }

    /// Replace the current game, e.g. with a restored snapshot.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    fn is_computer_turn(&self) -> bool {
        self.settings.vs_computer && self.state.current_player().color() == COMPUTER_COLOR
    }

    fn play_computer_if_needed(&mut self) {
        if !self.is_computer_turn() || self.state.status() != GameStatus::InProgress {
            return;
        }
        let choice = match self.computer.choose_move(&self.state) {
            Ok(choice) => choice,
            Err(err) => {
                warn!("{} failed to move: {err}", self.computer.name());
                return;
            }
        };
        let Some(mv) = choice else {
            return;
        };
        match self.engine.make_move(&self.state, &mv) {
            MoveOutcome::Applied(next) => self.set_current(next),
            MoveOutcome::Rejected(reason) => {
                warn!("{} proposed {mv}, rejected: {reason:?}", self.computer.name());
            }
        }
    }

    fn set_current(&mut self, next: GameState) {
        if next.status().is_over() {
            info!("game over: {}", next.status());
        }
        self.state = next;
    }
}
