use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length for client-chosen player identifiers
const MAX_PLAYER_ID_LENGTH: usize = 128;

macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Static content keys
define_key!(CharacterId);
define_key!(ItemId);
define_key!(AchievementId);
define_key!(StoryNodeId);

// ============================================================================
// PlayerId
// ============================================================================

/// Identifier of a save slot, chosen by the client (non-empty, <=128 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new validated player id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is empty after trimming or
    /// longer than 128 characters.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player ID required"));
        }
        if trimmed.len() > MAX_PLAYER_ID_LENGTH {
            return Err(DomainError::validation(format!(
                "Player ID cannot exceed {} characters",
                MAX_PLAYER_ID_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlayerId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(value: PlayerId) -> Self {
        value.0
    }
}

// ============================================================================
// MissionId
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(u32);

impl MissionId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MissionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_is_trimmed() {
        let id = PlayerId::new("  player_42  ").unwrap();
        assert_eq!(id.as_str(), "player_42");
    }

    #[test]
    fn player_id_rejects_blank() {
        assert!(matches!(
            PlayerId::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn player_id_rejects_overlong() {
        let long = "x".repeat(MAX_PLAYER_ID_LENGTH + 1);
        assert!(PlayerId::new(long).is_err());
    }

    #[test]
    fn player_id_deserialization_validates() {
        let ok: PlayerId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(ok.as_str(), "abc");
        assert!(serde_json::from_str::<PlayerId>("\"\"").is_err());
    }

    #[test]
    fn mission_id_serializes_as_number() {
        let json = serde_json::to_string(&MissionId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
