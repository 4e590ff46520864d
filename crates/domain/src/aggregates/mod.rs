//! Aggregates: entities with mutable state and invariants.

mod game_save;
mod player;

pub use game_save::{GameSave, GameState};
pub use player::{MissionProgress, MissionRewards, Player};
