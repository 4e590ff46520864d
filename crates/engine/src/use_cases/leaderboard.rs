//! Leaderboard use case.
//!
//! Ranks every stored save by level, then money. Ties fall back to the
//! player id so the order is stable between requests.

use std::cmp::Reverse;
use std::sync::Arc;

use hacktycoon_domain::GameRules;
use hacktycoon_shared::LeaderboardEntry;

use crate::infrastructure::ports::{RepoError, SaveRepo};

pub struct GetLeaderboard {
    saves: Arc<dyn SaveRepo>,
    rules: GameRules,
}

impl GetLeaderboard {
    pub fn new(saves: Arc<dyn SaveRepo>, rules: GameRules) -> Self {
        Self { saves, rules }
    }

    pub async fn execute(&self) -> Result<Vec<LeaderboardEntry>, RepoError> {
        let mut entries: Vec<LeaderboardEntry> = self
            .saves
            .list_all()
            .await?
            .into_iter()
            .map(|(player_id, save)| LeaderboardEntry {
                player_id: player_id.to_string(),
                name: save.player.name().to_string(),
                level: save.player.level(),
                money: save.player.money(),
                missions_completed: save.player.missions_completed(),
            })
            .collect();

        entries.sort_by(|a, b| {
            (Reverse(a.level), Reverse(a.money), &a.player_id).cmp(&(
                Reverse(b.level),
                Reverse(b.money),
                &b.player_id,
            ))
        });
        entries.truncate(self.rules.leaderboard_size);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use crate::infrastructure::ports::MockSaveRepo;
    use chrono::Utc;
    use hacktycoon_domain::{GameSave, GameState, Mission, MissionId, MissionType, Player, PlayerId};

    fn save_with(content: &GameContent, character: usize, xp: u32, money: u64) -> GameSave {
        let mut player =
            Player::from_archetype(&content.characters[character], content.story.start().clone());
        let job = Mission {
            id: MissionId::new(1),
            name: "Job".to_string(),
            mission_type: MissionType::Legal,
            difficulty: 1,
            xp,
            money,
            energy: 0,
            heat: 0,
            story: String::new(),
        };
        player.complete_mission(&job, &GameRules::default());
        GameSave::new(player, GameState::new(Utc::now()))
    }

    #[tokio::test]
    async fn orders_by_level_then_money_then_id() {
        let content = GameContent::standard().unwrap();
        let saves = vec![
            (PlayerId::new("b").unwrap(), save_with(&content, 0, 10, 0)),
            (PlayerId::new("a").unwrap(), save_with(&content, 0, 10, 0)),
            (PlayerId::new("rich").unwrap(), save_with(&content, 3, 10, 0)),
            (PlayerId::new("pro").unwrap(), save_with(&content, 1, 100, 0)),
        ];
        let mut repo = MockSaveRepo::new();
        repo.expect_list_all()
            .returning(move || Ok(saves.clone()));

        let board = GetLeaderboard::new(Arc::new(repo), GameRules::default())
            .execute()
            .await
            .unwrap();

        let ids: Vec<&str> = board.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(ids, vec!["pro", "rich", "a", "b"]);
        assert_eq!(board[0].level, 2);
        assert_eq!(board[0].missions_completed, 1);
    }

    #[tokio::test]
    async fn truncates_to_configured_size() {
        let content = GameContent::standard().unwrap();
        let saves: Vec<_> = (0..5)
            .map(|i| {
                (
                    PlayerId::new(format!("p{i}")).unwrap(),
                    save_with(&content, 0, 0, u64::from(i as u32) * 10),
                )
            })
            .collect();
        let mut repo = MockSaveRepo::new();
        repo.expect_list_all()
            .returning(move || Ok(saves.clone()));

        let rules = GameRules::default().with_leaderboard_size(3);
        let board = GetLeaderboard::new(Arc::new(repo), rules)
            .execute()
            .await
            .unwrap();

        assert_eq!(board.len(), 3);
        assert_eq!(board[0].player_id, "p4");
    }
}
