//! Player-facing game settings.
//!
//! Defaults are WHITE to start and two human players. Settings serialize to
//! JSON for the caller's preference store and can be overridden from the
//! environment with `WARCABY_START_COLOR` and `WARCABY_VS_COMPUTER`.

use serde::{Deserialize, Serialize};

use crate::errors::DraughtsResult;
use crate::game_state::draughts_types::PlayerColor;

pub const START_COLOR_ENV: &str = "WARCABY_START_COLOR";
pub const VS_COMPUTER_ENV: &str = "WARCABY_VS_COMPUTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub starting_color: PlayerColor,
    pub vs_computer: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            starting_color: PlayerColor::White,
            vs_computer: false,
        }
    }
}

impl SessionSettings {
    /// Defaults overlaid with any parsable environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(START_COLOR_ENV).ok().as_deref(),
            std::env::var(VS_COMPUTER_ENV).ok().as_deref(),
        )
    }

    /// Applies textual overrides; unparsable values leave the field unchanged.
    pub fn with_overrides(mut self, starting_color: Option<&str>, vs_computer: Option<&str>) -> Self {
        if let Some(color) = starting_color.and_then(|s| s.trim().parse().ok()) {
            self.starting_color = color;
        }
        if let Some(flag) = vs_computer.and_then(parse_flag) {
            self.vs_computer = flag;
        }
        self
    }

    pub fn to_json(&self) -> DraughtsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> DraughtsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
