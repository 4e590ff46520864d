//! Story progress use case.

use std::sync::Arc;

use hacktycoon_domain::PlayerId;
use hacktycoon_shared::StoryProgress;

use crate::infrastructure::ports::SaveRepo;

use super::error::StoryError;

pub struct GetProgress {
    saves: Arc<dyn SaveRepo>,
}

impl GetProgress {
    pub fn new(saves: Arc<dyn SaveRepo>) -> Self {
        Self { saves }
    }

    pub async fn execute(&self, player_id: &PlayerId) -> Result<StoryProgress, StoryError> {
        let save = self
            .saves
            .get(player_id)
            .await?
            .ok_or_else(|| StoryError::NotFound(player_id.clone()))?;

        Ok(StoryProgress {
            current_node: save.player.current_story_node().clone(),
            story_path: save.player.story_path().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockSaveRepo;

    #[tokio::test]
    async fn when_save_missing_returns_not_found() {
        let mut saves = MockSaveRepo::new();
        saves.expect_get().returning(|_| Ok(None));

        let result = GetProgress::new(Arc::new(saves))
            .execute(&PlayerId::new("p").unwrap())
            .await;

        assert!(matches!(result, Err(StoryError::NotFound(_))));
    }
}
