//! Hacker Tycoon domain.
//!
//! Pure game rules: no I/O, no clock, no randomness. The engine feeds in
//! outcomes and persists the results.
//!
//! ## Structure
//!
//! - `ids` - identifiers for saves and static content
//! - `value_objects` - skills, requirements, game rules
//! - `entities` - static content (characters, missions, shop, achievements, story)
//! - `aggregates` - the mutable `Player` and its `GameSave`

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{GameSave, GameState, MissionProgress, MissionRewards, Player};
pub use entities::{
    Achievement, AchievementCondition, CharacterArchetype, EndingType, EventEffect, Mission,
    MissionType, RandomEvent, ShopItem, StoryChoice, StoryGraph, StoryNode,
};
pub use error::DomainError;
pub use ids::{AchievementId, CharacterId, ItemId, MissionId, PlayerId, StoryNodeId};
pub use value_objects::{GameRules, Requirement, Skill, SkillSet};
