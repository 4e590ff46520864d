//! Train skill use case.
//!
//! Each point costs the current level times the configured rate, so the
//! price climbs as the skill does.

use std::sync::Arc;

use hacktycoon_domain::{GameRules, PlayerId, Skill};
use hacktycoon_shared::SkillTrainingResponse;

use crate::content::GameContent;
use crate::infrastructure::ports::SaveRepo;

use super::error::ShopError;

pub struct TrainSkill {
    saves: Arc<dyn SaveRepo>,
    content: Arc<GameContent>,
    rules: GameRules,
}

impl TrainSkill {
    pub fn new(saves: Arc<dyn SaveRepo>, content: Arc<GameContent>, rules: GameRules) -> Self {
        Self {
            saves,
            content,
            rules,
        }
    }

    pub async fn execute(
        &self,
        player_id: &PlayerId,
        skill: Skill,
    ) -> Result<SkillTrainingResponse, ShopError> {
        let mut save = self
            .saves
            .get(player_id)
            .await?
            .ok_or_else(|| ShopError::NotFound(player_id.clone()))?;

        let (new_level, cost) = save.player.train_skill(skill, &self.rules)?;
        let new_achievements = save.player.unlock_achievements(&self.content.achievements);
        self.saves.save(player_id, &save).await?;

        tracing::info!(player_id = %player_id, %skill, new_level, cost, "Skill trained");

        Ok(SkillTrainingResponse {
            player: save.player,
            skill,
            new_level,
            cost,
            new_achievements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemorySaveRepo;
    use chrono::Utc;
    use hacktycoon_domain::{DomainError, GameSave, GameState, Player};

    async fn nexus_repo(content: &GameContent) -> (Arc<InMemorySaveRepo>, PlayerId) {
        let player = Player::from_archetype(&content.characters[3], content.story.start().clone());
        let repo = Arc::new(InMemorySaveRepo::new());
        let player_id = PlayerId::new("nexus").unwrap();
        repo.save(&player_id, &GameSave::new(player, GameState::new(Utc::now())))
            .await
            .unwrap();
        (repo, player_id)
    }

    #[tokio::test]
    async fn cost_scales_with_current_level() {
        let content = Arc::new(GameContent::standard().unwrap());
        let (repo, player_id) = nexus_repo(&content).await;
        let rules = GameRules::default();
        let use_case = TrainSkill::new(repo.clone(), content, rules);

        // Nexus starts with stealth 5 and $600.
        let result = use_case.execute(&player_id, Skill::Stealth).await;
        assert!(matches!(
            result,
            Err(ShopError::Domain(DomainError::InsufficientFunds {
                needed: 2_500,
                available: 600
            }))
        ));
    }

    #[tokio::test]
    async fn training_is_persisted() {
        let content = Arc::new(GameContent::standard().unwrap());
        let (repo, player_id) = nexus_repo(&content).await;
        let mut save = repo.get(&player_id).await.unwrap().unwrap();
        // Five crypto windfalls: 600 + 5 * 500.
        for _ in 0..5 {
            save.player.apply_event(&content.events[9], &GameRules::default());
        }
        repo.save(&player_id, &save).await.unwrap();

        let use_case = TrainSkill::new(repo.clone(), content, GameRules::default());
        let response = use_case.execute(&player_id, Skill::Social).await.unwrap();

        assert_eq!(response.new_level, 7);
        assert_eq!(response.cost, 3_000);
        assert_eq!(response.player.money(), 100);
        let stored = repo.get(&player_id).await.unwrap().unwrap();
        assert_eq!(stored.player.skills().social, 7);
    }
}
