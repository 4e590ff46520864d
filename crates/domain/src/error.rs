//! Unified error types for the domain layer
//!
//! Provides a common error type for every rule the player aggregate and the
//! story graph enforce, so the engine can map failures to responses without
//! string matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule or content invariant violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The player cannot afford an action
    #[error("Not enough money: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// The player does not have enough energy left for a mission
    #[error("Not enough energy: need {needed}, have {available}")]
    InsufficientEnergy { needed: u32, available: u32 },

    /// The item is already in the player's inventory
    #[error("Item already owned: {0}")]
    AlreadyOwned(String),
}

impl DomainError {
    /// Creates a validation error for malformed input.
    ///
    /// # Example
    /// ```ignore
    /// if id.is_empty() {
    ///     return Err(DomainError::validation("Player ID required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}
