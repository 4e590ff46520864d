//! Load game use case.

use std::sync::Arc;

use hacktycoon_domain::{GameSave, PlayerId};

use crate::infrastructure::ports::SaveRepo;

use super::error::GameError;

pub struct LoadGame {
    saves: Arc<dyn SaveRepo>,
}

impl LoadGame {
    pub fn new(saves: Arc<dyn SaveRepo>) -> Self {
        Self { saves }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<GameSave, GameError> {
        self.saves
            .get(player_id)
            .await?
            .ok_or_else(|| GameError::NotFound(player_id.clone()))
    }
}
