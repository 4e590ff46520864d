//! In-memory save store.
//!
//! Saves live for the lifetime of the process; nothing is written to disk.

use async_trait::async_trait;
use dashmap::DashMap;
use hacktycoon_domain::{GameSave, PlayerId};

use crate::infrastructure::ports::{RepoError, SaveRepo};

#[derive(Default)]
pub struct InMemorySaveRepo {
    saves: DashMap<PlayerId, GameSave>,
}

impl InMemorySaveRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }
}

#[async_trait]
impl SaveRepo for InMemorySaveRepo {
    async fn get(&self, id: &PlayerId) -> Result<Option<GameSave>, RepoError> {
        Ok(self.saves.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, id: &PlayerId, save: &GameSave) -> Result<(), RepoError> {
        self.saves.insert(id.clone(), save.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<(PlayerId, GameSave)>, RepoError> {
        Ok(self
            .saves
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use chrono::Utc;
    use hacktycoon_domain::{GameState, Player};

    fn sample_save() -> GameSave {
        let content = GameContent::standard().unwrap();
        let player = Player::from_archetype(&content.characters[0], content.story.start().clone());
        GameSave::new(player, GameState::new(Utc::now()))
    }

    #[tokio::test]
    async fn save_then_get_returns_copy() {
        let repo = InMemorySaveRepo::new();
        let id = PlayerId::new("p1").unwrap();
        assert!(repo.get(&id).await.unwrap().is_none());

        let save = sample_save();
        repo.save(&id, &save).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap(), Some(save));
    }

    #[tokio::test]
    async fn save_overwrites_slot() {
        let repo = InMemorySaveRepo::new();
        let id = PlayerId::new("p1").unwrap();
        let mut save = sample_save();
        repo.save(&id, &save).await.unwrap();
        save.game_state.turn = 9;
        repo.save(&id, &save).await.unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&id).await.unwrap().unwrap().game_state.turn, 9);
    }

    #[tokio::test]
    async fn list_all_returns_every_slot() {
        let repo = InMemorySaveRepo::new();
        for name in ["a", "b", "c"] {
            repo.save(&PlayerId::new(name).unwrap(), &sample_save())
                .await
                .unwrap();
        }
        let mut ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
