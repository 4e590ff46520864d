//! Make story choice use case.
//!
//! The save's story pointer is authoritative. A request naming a different
//! node is rejected rather than silently re-based.

use std::sync::Arc;

use hacktycoon_domain::{PlayerId, StoryNodeId};
use hacktycoon_shared::StoryChoiceResponse;

use crate::content::GameContent;
use crate::infrastructure::ports::SaveRepo;

use super::error::StoryError;

#[derive(Debug, Clone)]
pub struct StoryChoiceInput {
    pub player_id: PlayerId,
    /// Node the client believes it is on; the saved pointer when `None`.
    pub current_node: Option<StoryNodeId>,
    pub choice_index: usize,
}

pub struct MakeChoice {
    saves: Arc<dyn SaveRepo>,
    content: Arc<GameContent>,
}

impl MakeChoice {
    pub fn new(saves: Arc<dyn SaveRepo>, content: Arc<GameContent>) -> Self {
        Self { saves, content }
    }

    pub async fn execute(
        &self,
        input: StoryChoiceInput,
    ) -> Result<StoryChoiceResponse, StoryError> {
        let mut save = self
            .saves
            .get(&input.player_id)
            .await?
            .ok_or_else(|| StoryError::NotFound(input.player_id.clone()))?;

        let saved = save.player.current_story_node().clone();
        if let Some(claimed) = input.current_node {
            if claimed != saved {
                return Err(StoryError::OutOfSync { saved, claimed });
            }
        }

        let story = &self.content.story;
        let node = story
            .node(&saved)
            .ok_or_else(|| StoryError::InvalidChoice(format!("unknown story node {saved}")))?;
        let choice = node.choice(input.choice_index).ok_or_else(|| {
            StoryError::InvalidChoice(format!(
                "node {} has no choice {}",
                node.id, input.choice_index
            ))
        })?;

        if let Some(requirement) = &choice.requirement {
            if !requirement.is_met(&save.player) {
                tracing::debug!(
                    player_id = %input.player_id,
                    node = %node.id,
                    requirement = %requirement.describe(),
                    "Story choice blocked"
                );
                return Err(StoryError::RequirementsNotMet(requirement.clone()));
            }
        }

        let next = story.node(&choice.next).ok_or_else(|| {
            StoryError::InvalidChoice(format!("unknown story node {}", choice.next))
        })?;

        save.player.advance_story(next.id.clone());
        self.saves.save(&input.player_id, &save).await?;

        tracing::info!(
            player_id = %input.player_id,
            from = %node.id,
            to = %next.id,
            ending = next.ending,
            "Story advanced"
        );

        Ok(StoryChoiceResponse {
            next_node: next.clone(),
            player: save.player,
            is_ending: next.ending,
        })
    }
}
