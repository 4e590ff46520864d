//! Save game use case.
//!
//! Stores the client's state as sent. The client owns its save between
//! requests, so nothing is recomputed here.

use std::sync::Arc;

use hacktycoon_domain::{GameSave, PlayerId};

use crate::infrastructure::ports::SaveRepo;

use super::error::GameError;

pub struct SaveGame {
    saves: Arc<dyn SaveRepo>,
}

impl SaveGame {
    pub fn new(saves: Arc<dyn SaveRepo>) -> Self {
        Self { saves }
    }

    pub async fn execute(&self, player_id: &PlayerId, save: GameSave) -> Result<(), GameError> {
        self.saves.save(player_id, &save).await?;
        tracing::debug!(player_id = %player_id, turn = save.game_state.turn, "Game saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use crate::infrastructure::in_memory::InMemorySaveRepo;
    use chrono::Utc;
    use hacktycoon_domain::{GameState, Player};

    #[tokio::test]
    async fn stores_state_verbatim() {
        let content = GameContent::standard().unwrap();
        let player = Player::from_archetype(&content.characters[1], content.story.start().clone());
        let mut state = GameState::new(Utc::now());
        state.turn = 7;
        let save = GameSave::new(player, state);

        let repo = Arc::new(InMemorySaveRepo::new());
        let player_id = PlayerId::new("slot").unwrap();
        SaveGame::new(repo.clone())
            .execute(&player_id, save.clone())
            .await
            .unwrap();

        assert_eq!(repo.get(&player_id).await.unwrap(), Some(save));
    }
}
