//! A save slot: the player plus turn bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregates::Player;
use crate::ids::MissionId;

/// Turn bookkeeping kept next to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub turn: u32,
    pub last_mission: Option<MissionId>,
    /// Epoch milliseconds on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
}

impl GameState {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            turn: 0,
            last_mission: None,
            start_time,
        }
    }

    pub fn record_mission(&mut self, mission: MissionId) {
        self.turn = self.turn.saturating_add(1);
        self.last_mission = Some(mission);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSave {
    pub player: Player,
    pub game_state: GameState,
}

impl GameSave {
    pub fn new(player: Player, game_state: GameState) -> Self {
        Self { player, game_state }
    }
}
