//! Crate root module declarations for the Warcaby draughts engine.
//!
//! Exposes the rules core (board, value types, move generation, move
//! application) together with the random computer opponent, a headless game
//! session, snapshot save/restore, and self-play utilities, so binaries, tests,
//! and front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_description;
}

pub mod move_generation {
    pub mod capture_chains;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod session_settings;
}

pub mod utils {
    pub mod game_snapshot;
    pub mod match_harness;
    pub mod render_game_state;
    pub mod snapshot_generator;
    pub mod snapshot_parser;
}
