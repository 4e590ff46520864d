//! Repository port traits for save storage.

use async_trait::async_trait;
use hacktycoon_domain::{GameSave, PlayerId};

use super::error::RepoError;

/// Per-player save slots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SaveRepo: Send + Sync {
    async fn get(&self, id: &PlayerId) -> Result<Option<GameSave>, RepoError>;
    /// Insert or overwrite the slot.
    async fn save(&self, id: &PlayerId, save: &GameSave) -> Result<(), RepoError>;
    async fn list_all(&self) -> Result<Vec<(PlayerId, GameSave)>, RepoError>;
}
