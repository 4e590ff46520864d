//! Request bodies and query strings accepted by the REST API.

use serde::{Deserialize, Serialize};

use hacktycoon_domain::{CharacterId, GameState, ItemId, MissionId, Player, Skill, StoryNodeId};

/// `POST /api/game/new`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    pub character_id: CharacterId,
    /// Client-chosen save slot; the server assigns one when omitted.
    #[serde(default)]
    pub player_id: Option<String>,
}

/// `POST /api/game/save` - the client's full state, stored as sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGameRequest {
    #[serde(default)]
    pub player_id: Option<String>,
    pub player: Player,
    pub game_state: GameState,
}

/// `POST /api/mission/complete`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMissionRequest {
    pub player_id: String,
    pub mission_id: MissionId,
    /// Outcome decided by the client; rolled on the server when absent.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub mini_game_success: bool,
}

/// `POST /api/shop/buy`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyItemRequest {
    pub player_id: String,
    pub item_id: ItemId,
}

/// `POST /api/skills/train`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSkillRequest {
    pub player_id: String,
    pub skill: Skill,
}

/// Body of actions that only name the save slot (`rest`, `lay-low`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerActionRequest {
    pub player_id: String,
}

/// `POST /api/story/choice`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryChoiceRequest {
    pub player_id: String,
    /// Node the client believes it is on; defaults to the saved pointer.
    #[serde(default)]
    pub current_node: Option<StoryNodeId>,
    pub choice_index: usize,
}

/// `GET /api/missions?level=N`
///
/// `level` is kept raw so a malformed value lists level 1 missions instead
/// of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionListQuery {
    #[serde(default)]
    pub level: Option<String>,
}

impl MissionListQuery {
    /// Leading digits of `level`, or `None` when absent, unparseable or zero.
    pub fn level(&self) -> Option<u32> {
        let raw = self.level.as_deref()?.trim();
        let digits = raw
            .find(|c: char| !c.is_ascii_digit())
            .map_or(raw, |end| &raw[..end]);
        digits.parse().ok().filter(|level| *level > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(level: &str) -> MissionListQuery {
        MissionListQuery {
            level: Some(level.to_string()),
        }
    }

    #[test]
    fn level_reads_leading_digits() {
        assert_eq!(query("6").level(), Some(6));
        assert_eq!(query(" 3abc").level(), Some(3));
        assert_eq!(MissionListQuery::default().level(), None);
    }

    #[test]
    fn malformed_level_is_ignored() {
        assert_eq!(query("abc").level(), None);
        assert_eq!(query("0").level(), None);
        assert_eq!(query("-2").level(), None);
        assert_eq!(query("").level(), None);
    }
}
