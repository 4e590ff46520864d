//! Shop operation errors.

use hacktycoon_domain::{DomainError, PlayerId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("Invalid item: {0}")]
    InvalidItem(String),
    #[error("Game not found: {0}")]
    NotFound(PlayerId),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
