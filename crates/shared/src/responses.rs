//! Response bodies returned by the REST API.

use serde::{Deserialize, Serialize};

use hacktycoon_domain::{
    Achievement, MissionRewards, Player, RandomEvent, Requirement, ShopItem, Skill, StoryNode,
    StoryNodeId,
};

/// `POST /api/game/new`: the created save plus its slot id, which the
/// server assigns when the client sent none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub player_id: String,
    pub player: Player,
    pub game_state: hacktycoon_domain::GameState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionOutcome {
    pub succeeded: bool,
    pub level_up: bool,
    pub new_level: u32,
    /// Percent chance used for the roll
    pub success_chance: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<MissionRewards>,
    /// Last achievement unlocked by this mission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_achievement: Option<Achievement>,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_event: Option<RandomEvent>,
    pub player: Player,
    pub game_over: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub player: Player,
    pub item: ShopItem,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTrainingResponse {
    pub player: Player,
    pub skill: Skill,
    pub new_level: u32,
    pub cost: u64,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub player: Player,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryChoiceResponse {
    pub next_node: StoryNode,
    pub player: Player,
    pub is_ending: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryProgress {
    pub current_node: StoryNodeId,
    pub story_path: Vec<StoryNodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryOverview {
    pub message: String,
    pub start_node: StoryNodeId,
    pub available_nodes: Vec<StoryNodeId>,
    pub total_nodes: usize,
    pub endings: Vec<StoryNodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub name: String,
    pub level: u32,
    pub money: u64,
    pub missions_completed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON error body: `{"error": "..."}`, plus the unmet requirement when a
/// story choice is gated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Requirement>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            requirement: None,
        }
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = Some(requirement);
        self
    }
}
