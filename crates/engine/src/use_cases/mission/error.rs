//! Mission operation errors.

use hacktycoon_domain::{DomainError, MissionId, PlayerId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("Invalid mission: {0}")]
    InvalidMission(MissionId),
    #[error("Game not found: {0}")]
    NotFound(PlayerId),
    #[error("Mission {mission} is locked at level {level}")]
    MissionLocked { mission: MissionId, level: u32 },
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
