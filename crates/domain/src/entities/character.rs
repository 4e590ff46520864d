//! Playable character archetypes.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::SkillSet;

/// A selectable starting character. Static content, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterArchetype {
    pub id: CharacterId,
    pub name: String,
    pub avatar: String,
    pub backstory: String,
    pub skills: SkillSet,
    pub starting_money: u64,
}
