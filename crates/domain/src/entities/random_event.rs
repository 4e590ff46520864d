//! Random events that can follow a successful mission.

use serde::{Deserialize, Serialize};

/// What a random event does to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum EventEffect {
    Money(i64),
    Heat(i32),
    Energy(i32),
    BonusXp(u32),
    /// The next successful mission pays double XP and money.
    DoubleRewardNext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomEvent {
    pub name: String,
    pub message: String,
    pub effect: EventEffect,
}
