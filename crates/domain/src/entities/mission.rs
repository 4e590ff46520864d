//! Missions the player can take on for XP and money.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::MissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionType {
    Legal,
    Illegal,
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionType::Legal => f.write_str("legal"),
            MissionType::Illegal => f.write_str("illegal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub name: String,
    #[serde(rename = "type")]
    pub mission_type: MissionType,
    pub difficulty: u32,
    pub xp: u32,
    pub money: u64,
    /// Energy spent whether the mission succeeds or not
    pub energy: u32,
    /// Heat gained on success; failures add a fraction of it
    pub heat: u32,
    pub story: String,
}

impl Mission {
    /// Highest difficulty unlocked at `level`.
    pub fn max_difficulty_for_level(level: u32) -> u32 {
        level / 2 + 2
    }

    pub fn is_unlocked_at(&self, level: u32) -> bool {
        self.difficulty <= Self::max_difficulty_for_level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mission(difficulty: u32) -> Mission {
        Mission {
            id: MissionId::new(1),
            name: "Job".to_string(),
            mission_type: MissionType::Legal,
            difficulty,
            xp: 10,
            money: 10,
            energy: 5,
            heat: 0,
            story: String::new(),
        }
    }

    #[test]
    fn difficulty_unlocks_every_two_levels() {
        assert!(mission(2).is_unlocked_at(1));
        assert!(!mission(3).is_unlocked_at(1));
        assert!(mission(3).is_unlocked_at(2));
        assert!(!mission(4).is_unlocked_at(3));
        assert!(mission(5).is_unlocked_at(6));
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_value(mission(1)).unwrap();
        assert_eq!(json["type"], "legal");
        assert_eq!(json["id"], 1);
    }
}
