//! Application state and composition.

use std::sync::Arc;

use hacktycoon_domain::GameRules;

use crate::content::GameContent;
use crate::infrastructure::ports::{ClockPort, RandomPort, SaveRepo};
use crate::use_cases::{
    game::{GameUseCases, LayLow, LoadGame, Rest, SaveGame, StartGame},
    mission::{CompleteMission, ListMissions, MissionUseCases},
    shop::{BuyItem, ShopUseCases, TrainSkill},
    story::{GetNode, GetProgress, MakeChoice, StoryOverviewQuery, StoryUseCases},
    GetLeaderboard,
};

/// Main application state.
///
/// Holds the static content and all use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub content: Arc<GameContent>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub game: GameUseCases,
    pub mission: MissionUseCases,
    pub shop: ShopUseCases,
    pub story: StoryUseCases,
    pub leaderboard: Arc<GetLeaderboard>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        saves: Arc<dyn SaveRepo>,
        content: Arc<GameContent>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        rules: GameRules,
    ) -> Self {
        let game = GameUseCases::new(
            Arc::new(StartGame::new(
                saves.clone(),
                content.clone(),
                clock,
                random.clone(),
            )),
            Arc::new(SaveGame::new(saves.clone())),
            Arc::new(LoadGame::new(saves.clone())),
            Arc::new(Rest::new(saves.clone(), rules.clone())),
            Arc::new(LayLow::new(saves.clone(), rules.clone())),
        );

        let mission = MissionUseCases::new(
            Arc::new(ListMissions::new(content.clone())),
            Arc::new(CompleteMission::new(
                saves.clone(),
                content.clone(),
                random,
                rules.clone(),
            )),
        );

        let shop = ShopUseCases::new(
            Arc::new(BuyItem::new(saves.clone(), content.clone())),
            Arc::new(TrainSkill::new(saves.clone(), content.clone(), rules.clone())),
        );

        let story = StoryUseCases::new(
            Arc::new(GetNode::new(content.clone())),
            Arc::new(MakeChoice::new(saves.clone(), content.clone())),
            Arc::new(GetProgress::new(saves.clone())),
            Arc::new(StoryOverviewQuery::new(content.clone())),
        );

        let leaderboard = Arc::new(GetLeaderboard::new(saves, rules));

        Self {
            content,
            use_cases: UseCases {
                game,
                mission,
                shop,
                story,
                leaderboard,
            },
        }
    }
}
