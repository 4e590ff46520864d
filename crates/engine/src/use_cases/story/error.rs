//! Story operation errors.

use hacktycoon_domain::{PlayerId, Requirement, StoryNodeId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("Story node not found: {0}")]
    NodeNotFound(StoryNodeId),
    #[error("Game not found: {0}")]
    NotFound(PlayerId),
    /// The client is looking at a different node than the save points to.
    #[error("Story out of sync: player is at {saved}, request was for {claimed}")]
    OutOfSync {
        saved: StoryNodeId,
        claimed: StoryNodeId,
    },
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    #[error("Requirements not met: {}", .0.describe())]
    RequirementsNotMet(Requirement),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
