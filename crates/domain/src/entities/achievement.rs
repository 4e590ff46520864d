//! Achievements and their unlock conditions.

use serde::{Deserialize, Serialize};

use crate::aggregates::Player;
use crate::entities::MissionType;
use crate::error::DomainError;
use crate::ids::AchievementId;

/// The threshold an achievement waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCondition {
    MinLevel(u32),
    MinMoney(u64),
    LegalMissions(u32),
    IllegalMissions(u32),
    MissionsCompleted(u32),
    MissionStreak(u32),
    ItemsOwned(u32),
    /// Any single skill at or above the level
    SkillLevel(u32),
}

impl AchievementCondition {
    pub fn is_met(&self, player: &Player) -> bool {
        match *self {
            AchievementCondition::MinLevel(level) => player.level() >= level,
            AchievementCondition::MinMoney(money) => player.money() >= money,
            AchievementCondition::LegalMissions(n) => {
                player.missions_of_type(MissionType::Legal) >= n
            }
            AchievementCondition::IllegalMissions(n) => {
                player.missions_of_type(MissionType::Illegal) >= n
            }
            AchievementCondition::MissionsCompleted(n) => player.missions_completed() >= n,
            AchievementCondition::MissionStreak(n) => player.mission_streak() >= n,
            AchievementCondition::ItemsOwned(n) => player.inventory().len() >= n as usize,
            AchievementCondition::SkillLevel(level) => player.skills().max_level() >= level,
        }
    }
}

/// An unlockable achievement.
///
/// On the wire the condition is flattened into a single threshold key, e.g.
/// `{"id":"cash","name":"Money Maker","desc":"Earn $5000","money":5000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AchievementRecord", try_from = "AchievementRecord")]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub desc: String,
    pub condition: AchievementCondition,
}

impl Achievement {
    pub fn new(
        id: &str,
        name: &str,
        desc: &str,
        condition: AchievementCondition,
    ) -> Self {
        Self {
            id: AchievementId::new(id),
            name: name.to_string(),
            desc: desc.to_string(),
            condition,
        }
    }

    pub fn is_met(&self, player: &Player) -> bool {
        self.condition.is_met(player)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AchievementRecord {
    id: AchievementId,
    name: String,
    desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    money: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    legal_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    illegal_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    missions_completed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    streak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items_owned: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skill_level: Option<u32>,
}

impl From<Achievement> for AchievementRecord {
    fn from(value: Achievement) -> Self {
        let mut record = AchievementRecord {
            id: value.id,
            name: value.name,
            desc: value.desc,
            ..Default::default()
        };
        match value.condition {
            AchievementCondition::MinLevel(n) => record.level = Some(n),
            AchievementCondition::MinMoney(n) => record.money = Some(n),
            AchievementCondition::LegalMissions(n) => record.legal_count = Some(n),
            AchievementCondition::IllegalMissions(n) => record.illegal_count = Some(n),
            AchievementCondition::MissionsCompleted(n) => record.missions_completed = Some(n),
            AchievementCondition::MissionStreak(n) => record.streak = Some(n),
            AchievementCondition::ItemsOwned(n) => record.items_owned = Some(n),
            AchievementCondition::SkillLevel(n) => record.skill_level = Some(n),
        }
        record
    }
}

impl TryFrom<AchievementRecord> for Achievement {
    type Error = DomainError;

    fn try_from(record: AchievementRecord) -> Result<Self, Self::Error> {
        let conditions = [
            record.level.map(AchievementCondition::MinLevel),
            record.money.map(AchievementCondition::MinMoney),
            record.legal_count.map(AchievementCondition::LegalMissions),
            record.illegal_count.map(AchievementCondition::IllegalMissions),
            record
                .missions_completed
                .map(AchievementCondition::MissionsCompleted),
            record.streak.map(AchievementCondition::MissionStreak),
            record.items_owned.map(AchievementCondition::ItemsOwned),
            record.skill_level.map(AchievementCondition::SkillLevel),
        ];
        let mut present = conditions.into_iter().flatten();
        let condition = present.next().ok_or_else(|| {
            DomainError::validation(format!("Achievement {} has no condition", record.id))
        })?;
        if present.next().is_some() {
            return Err(DomainError::validation(format!(
                "Achievement {} has more than one condition",
                record.id
            )));
        }
        Ok(Achievement {
            id: record.id,
            name: record.name,
            desc: record.desc,
            condition,
        })
    }
}
