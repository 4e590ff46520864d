//! Static game content.
//!
//! Loaded once at startup and shared read-only by every use case.

mod catalog;
mod story;

use hacktycoon_domain::{
    Achievement, CharacterArchetype, DomainError, Mission, MissionId, RandomEvent, ShopItem,
    StoryGraph, StoryNodeId,
};

pub use story::START_NODE;

/// Everything a player can pick, buy, unlock or read.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub characters: Vec<CharacterArchetype>,
    pub missions: Vec<Mission>,
    pub shop: Vec<ShopItem>,
    pub achievements: Vec<Achievement>,
    pub events: Vec<RandomEvent>,
    pub story: StoryGraph,
}

impl GameContent {
    /// The shipped content set. Fails only if the story graph is malformed.
    pub fn standard() -> Result<Self, DomainError> {
        let story = StoryGraph::new(story::nodes(), StoryNodeId::new(START_NODE))?;
        Ok(Self {
            characters: catalog::characters(),
            missions: catalog::missions(),
            shop: catalog::shop_items(),
            achievements: catalog::achievements(),
            events: catalog::random_events(),
            story,
        })
    }

    pub fn character(&self, id: &str) -> Option<&CharacterArchetype> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn mission(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&ShopItem> {
        self.shop.iter().find(|i| i.id == id)
    }

    /// Missions unlocked at `level`, in catalog order.
    pub fn missions_for_level(&self, level: u32) -> Vec<Mission> {
        self.missions
            .iter()
            .filter(|m| m.is_unlocked_at(level))
            .cloned()
            .collect()
    }
}
