//! Complete mission use case.
//!
//! Resolves one mission attempt against a stored save:
//! 1. Gate on level and energy
//! 2. Roll (or accept) the outcome
//! 3. Apply rewards or the failure penalty
//! 4. On success, maybe trigger a random event, then unlock achievements
//! 5. Advance the turn counter and store the save

use std::sync::Arc;

use hacktycoon_domain::{GameRules, MissionId, Player, PlayerId, RandomEvent};
use hacktycoon_shared::MissionOutcome;

use crate::content::GameContent;
use crate::infrastructure::ports::{RandomPort, SaveRepo};

use super::error::MissionError;

/// Input for a mission attempt.
#[derive(Debug, Clone)]
pub struct CompleteMissionInput {
    pub player_id: PlayerId,
    pub mission_id: MissionId,
    /// Outcome already decided by the client; rolled when `None`.
    pub success: Option<bool>,
    pub mini_game_success: bool,
}

pub struct CompleteMission {
    saves: Arc<dyn SaveRepo>,
    content: Arc<GameContent>,
    random: Arc<dyn RandomPort>,
    rules: GameRules,
}

impl CompleteMission {
    pub fn new(
        saves: Arc<dyn SaveRepo>,
        content: Arc<GameContent>,
        random: Arc<dyn RandomPort>,
        rules: GameRules,
    ) -> Self {
        Self {
            saves,
            content,
            random,
            rules,
        }
    }

    pub async fn execute(
        &self,
        input: CompleteMissionInput,
    ) -> Result<MissionOutcome, MissionError> {
        let mission = self
            .content
            .mission(input.mission_id)
            .ok_or(MissionError::InvalidMission(input.mission_id))?;

        let mut save = self
            .saves
            .get(&input.player_id)
            .await?
            .ok_or_else(|| MissionError::NotFound(input.player_id.clone()))?;
        let player = &mut save.player;

        if !mission.is_unlocked_at(player.level()) {
            return Err(MissionError::MissionLocked {
                mission: mission.id,
                level: player.level(),
            });
        }
        player.ensure_energy_for(mission)?;

        let success_chance = player.success_chance(&self.rules, input.mini_game_success);
        let succeeded = match input.success {
            Some(decided) => decided,
            None => self.random.roll_percent() < success_chance,
        };

        let mut outcome = MissionOutcome {
            succeeded,
            level_up: false,
            new_level: player.level(),
            success_chance,
            rewards: None,
            new_achievement: None,
            new_achievements: Vec::new(),
            random_event: None,
            player: player.clone(),
            game_over: false,
        };

        if succeeded {
            let progress = player.complete_mission(mission, &self.rules);
            outcome.level_up = progress.level_up;
            outcome.new_level = progress.new_level;
            outcome.rewards = Some(progress.rewards);
            outcome.random_event = self.maybe_random_event(player);
            outcome.new_achievements = player.unlock_achievements(&self.content.achievements);
            outcome.new_achievement = outcome.new_achievements.last().cloned();
        } else {
            player.fail_mission(mission, &self.rules);
        }

        outcome.game_over = player.is_busted(&self.rules);
        outcome.player = player.clone();
        save.game_state.record_mission(mission.id);
        self.saves.save(&input.player_id, &save).await?;

        tracing::info!(
            player_id = %input.player_id,
            mission_id = %mission.id,
            succeeded,
            success_chance,
            level_up = outcome.level_up,
            game_over = outcome.game_over,
            "Mission resolved"
        );
        if outcome.game_over {
            tracing::warn!(
                player_id = %input.player_id,
                heat = outcome.player.heat(),
                "Player busted"
            );
        }

        Ok(outcome)
    }

    fn maybe_random_event(&self, player: &mut Player) -> Option<RandomEvent> {
        let events = &self.content.events;
        if events.is_empty() || self.random.roll_percent() >= self.rules.random_event_chance {
            return None;
        }
        let event = events.get(self.random.pick_index(events.len()))?.clone();
        player.apply_event(&event, &self.rules);
        tracing::debug!(event = %event.name, "Random event triggered");
        Some(event)
    }
}
