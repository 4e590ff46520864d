//! List missions use case.

use std::sync::Arc;

use hacktycoon_domain::Mission;

use crate::content::GameContent;

pub struct ListMissions {
    content: Arc<GameContent>,
}

impl ListMissions {
    pub fn new(content: Arc<GameContent>) -> Self {
        Self { content }
    }

    /// Missions unlocked at `level`, level 1 when unspecified.
    pub fn execute(&self, level: Option<u32>) -> Vec<Mission> {
        self.content.missions_for_level(level.unwrap_or(1))
    }
}
