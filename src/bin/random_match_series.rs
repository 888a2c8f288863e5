//! Standalone random-vs-random series runner.
//!
//! Run with:
//! `cargo run --release --bin random_match_series`
//! `cargo run --release --bin random_match_series -- --verbose`
//!
//! Set `RUST_LOG=debug` to see every move the engines pick.

use warcaby::errors::DraughtsResult;
use warcaby::utils::match_harness::{play_random_match, play_random_series, MatchConfig};
use warcaby::utils::render_game_state::render_game_state;

fn main() -> DraughtsResult<()> {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let config = MatchConfig {
        max_plies: 200,
        seed: 1234,
        ..MatchConfig::default()
    };

    if verbose {
        let first = play_random_match(&config)?;
        for (ply, mv) in first.moves.iter().enumerate() {
            println!("{:>3}. {mv}", ply + 1);
        }
        println!("{}", render_game_state(&first.final_state));
    }

    let stats = play_random_series(20, &config)?;
    println!("{}", stats.report());
    Ok(())
}
