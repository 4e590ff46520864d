//! Buy item use case.

use std::sync::Arc;

use hacktycoon_domain::{ItemId, PlayerId};
use hacktycoon_shared::PurchaseResponse;

use crate::content::GameContent;
use crate::infrastructure::ports::SaveRepo;

use super::error::ShopError;

/// Buy item use case.
///
/// Orchestrates: catalog lookup, ownership and funds checks, skill boost,
/// achievement re-check.
pub struct BuyItem {
    saves: Arc<dyn SaveRepo>,
    content: Arc<GameContent>,
}

impl BuyItem {
    pub fn new(saves: Arc<dyn SaveRepo>, content: Arc<GameContent>) -> Self {
        Self { saves, content }
    }

    pub async fn execute(
        &self,
        player_id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<PurchaseResponse, ShopError> {
        let item = self
            .content
            .item(item_id.as_str())
            .ok_or_else(|| ShopError::InvalidItem(item_id.to_string()))?;

        let mut save = self
            .saves
            .get(player_id)
            .await?
            .ok_or_else(|| ShopError::NotFound(player_id.clone()))?;

        let skill_level = save.player.purchase(item)?;
        let new_achievements = save.player.unlock_achievements(&self.content.achievements);
        self.saves.save(player_id, &save).await?;

        tracing::info!(
            player_id = %player_id,
            item_id = %item.id,
            skill = %item.effect,
            skill_level,
            "Item purchased"
        );

        Ok(PurchaseResponse {
            player: save.player,
            item: item.clone(),
            new_achievements,
        })
    }
}
