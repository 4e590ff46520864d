//! Lay low use case.
//!
//! Pays to drop heat faster than resting does.

use std::sync::Arc;

use hacktycoon_domain::{GameRules, Player, PlayerId};

use crate::infrastructure::ports::SaveRepo;

use super::error::GameError;

pub struct LayLow {
    saves: Arc<dyn SaveRepo>,
    rules: GameRules,
}

impl LayLow {
    pub fn new(saves: Arc<dyn SaveRepo>, rules: GameRules) -> Self {
        Self { saves, rules }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<Player, GameError> {
        let mut save = self
            .saves
            .get(player_id)
            .await?
            .ok_or_else(|| GameError::NotFound(player_id.clone()))?;

        save.player.lay_low(&self.rules)?;
        self.saves.save(player_id, &save).await?;

        tracing::info!(
            player_id = %player_id,
            heat = save.player.heat(),
            money = save.player.money(),
            "Player laid low"
        );

        Ok(save.player)
    }
}
