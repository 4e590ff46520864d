//! Rest use case.
//!
//! Recovers energy and sheds a little heat. Always succeeds for an existing
//! save.

use std::sync::Arc;

use hacktycoon_domain::{GameRules, Player, PlayerId};

use crate::infrastructure::ports::SaveRepo;

use super::error::GameError;

pub struct Rest {
    saves: Arc<dyn SaveRepo>,
    rules: GameRules,
}

impl Rest {
    pub fn new(saves: Arc<dyn SaveRepo>, rules: GameRules) -> Self {
        Self { saves, rules }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<Player, GameError> {
        let mut save = self
            .saves
            .get(player_id)
            .await?
            .ok_or_else(|| GameError::NotFound(player_id.clone()))?;

        save.player.rest(&self.rules);
        self.saves.save(player_id, &save).await?;

        tracing::debug!(
            player_id = %player_id,
            energy = save.player.energy(),
            heat = save.player.heat(),
            "Player rested"
        );

        Ok(save.player)
    }
}
