//! Requirement predicates gating story choices.
//!
//! A requirement is evaluated against the current player state only; it never
//! mutates the player.

use serde::{Deserialize, Serialize};

use crate::aggregates::Player;
use crate::entities::MissionType;
use crate::value_objects::Skill;

/// A condition the player must satisfy to take a story choice.
///
/// Serialized with a `type` tag, e.g. `{"type":"heat","max":20}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Requirement {
    /// Player level at least `value`
    Level { value: u32 },
    /// Money on hand at least `value`
    Money { value: u64 },
    /// Heat at most `max`
    Heat { max: u32 },
    /// A single skill at least `value`
    Skill { skill: Skill, value: u32 },
    /// At least `count` completed missions of the given type
    Missions {
        #[serde(rename = "missionType")]
        mission_type: MissionType,
        count: u32,
    },
}

impl Requirement {
    pub fn is_met(&self, player: &Player) -> bool {
        match self {
            Requirement::Level { value } => player.level() >= *value,
            Requirement::Money { value } => player.money() >= *value,
            Requirement::Heat { max } => player.heat() <= *max,
            Requirement::Skill { skill, value } => player.skills().get(*skill) >= *value,
            Requirement::Missions {
                mission_type,
                count,
            } => player.missions_of_type(*mission_type) >= *count,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Requirement::Level { value } => format!("Requires level {value}"),
            Requirement::Money { value } => format!("Requires ${value}"),
            Requirement::Heat { max } => format!("Requires heat of {max} or less"),
            Requirement::Skill { skill, value } => format!("Requires {skill} {value}"),
            Requirement::Missions {
                mission_type,
                count,
            } => format!("Requires {count} completed {mission_type} missions"),
        }
    }
}
