//! Start game use case.
//!
//! Creates a fresh save for a character archetype, overwriting whatever the
//! slot held before.

use std::sync::Arc;

use hacktycoon_domain::{CharacterId, GameSave, GameState, Player, PlayerId};

use crate::content::GameContent;
use crate::infrastructure::ports::{ClockPort, RandomPort, SaveRepo};

use super::error::GameError;

/// A newly created save and the slot it was written to.
#[derive(Debug, Clone)]
pub struct StartedGame {
    pub player_id: PlayerId,
    pub save: GameSave,
}

pub struct StartGame {
    saves: Arc<dyn SaveRepo>,
    content: Arc<GameContent>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl StartGame {
    pub fn new(
        saves: Arc<dyn SaveRepo>,
        content: Arc<GameContent>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            saves,
            content,
            clock,
            random,
        }
    }

    /// Execute the start game use case.
    ///
    /// # Arguments
    /// * `character_id` - Archetype to play
    /// * `player_id` - Slot to write; a fresh uuid is assigned when `None`
    pub async fn execute(
        &self,
        character_id: &CharacterId,
        player_id: Option<PlayerId>,
    ) -> Result<StartedGame, GameError> {
        let archetype = self
            .content
            .character(character_id.as_str())
            .ok_or_else(|| GameError::InvalidCharacter(character_id.to_string()))?;

        let player_id = match player_id {
            Some(id) => id,
            None => PlayerId::new(self.random.new_save_id().to_string())?,
        };

        let player = Player::from_archetype(archetype, self.content.story.start().clone());
        let save = GameSave::new(player, GameState::new(self.clock.now()));
        self.saves.save(&player_id, &save).await?;

        tracing::info!(
            player_id = %player_id,
            character_id = %character_id,
            "New game started"
        );

        Ok(StartedGame { player_id, save })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRoll};
    use crate::infrastructure::ports::MockSaveRepo;
    use chrono::{TimeZone, Utc};

    fn use_case(saves: MockSaveRepo) -> StartGame {
        StartGame::new(
            Arc::new(saves),
            Arc::new(GameContent::standard().unwrap()),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())),
            Arc::new(FixedRoll(0)),
        )
    }

    #[tokio::test]
    async fn when_character_unknown_returns_error() {
        let saves = MockSaveRepo::new();

        let result = use_case(saves)
            .execute(&CharacterId::new("rebel"), None)
            .await;

        assert!(matches!(result, Err(GameError::InvalidCharacter(id)) if id == "rebel"));
    }

    #[tokio::test]
    async fn when_valid_creates_fresh_save() {
        let player_id = PlayerId::new("player_1").unwrap();
        let expected_id = player_id.clone();

        let mut saves = MockSaveRepo::new();
        saves
            .expect_save()
            .withf(move |id, save| *id == expected_id && save.game_state.turn == 0)
            .times(1)
            .returning(|_, _| Ok(()));

        let started = use_case(saves)
            .execute(&CharacterId::new("ghost"), Some(player_id.clone()))
            .await
            .unwrap();

        assert_eq!(started.player_id, player_id);
        let player = &started.save.player;
        assert_eq!(player.level(), 1);
        assert_eq!(player.money(), 500);
        assert_eq!(player.current_story_node().as_str(), "intro");
        assert_eq!(
            started.save.game_state.start_time,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn when_player_id_missing_assigns_uuid() {
        let mut saves = MockSaveRepo::new();
        saves.expect_save().returning(|_, _| Ok(()));

        let started = use_case(saves)
            .execute(&CharacterId::new("nexus"), None)
            .await
            .unwrap();

        assert_eq!(
            started.player_id.as_str(),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
