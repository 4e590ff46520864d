//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use hacktycoon_domain::{
    Achievement, CharacterArchetype, GameSave, Mission, PlayerId, ShopItem, StoryNode, StoryNodeId,
};
use hacktycoon_shared::{
    BuyItemRequest, CompleteMissionRequest, LeaderboardEntry, MessageResponse, MissionListQuery,
    MissionOutcome, NewGameRequest, NewGameResponse, PlayerActionRequest, PlayerResponse,
    PurchaseResponse, SaveGameRequest, SkillTrainingResponse, StoryChoiceRequest,
    StoryChoiceResponse, StoryOverview, StoryProgress, TrainSkillRequest,
};

use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery};
use crate::app::App;
use crate::use_cases::{mission::CompleteMissionInput, story::StoryChoiceInput};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        // Catalog
        .route("/api/characters", get(list_characters))
        .route("/api/missions", get(list_missions))
        .route("/api/shop", get(list_shop))
        .route("/api/achievements", get(list_achievements))
        // Save slots
        .route("/api/game/new", post(new_game))
        .route("/api/game/save", post(save_game))
        .route("/api/game/load/{player_id}", get(load_game))
        .route("/api/game/rest", post(rest))
        .route("/api/game/lay-low", post(lay_low))
        // Actions
        .route("/api/mission/complete", post(complete_mission))
        .route("/api/shop/buy", post(buy_item))
        .route("/api/skills/train", post(train_skill))
        .route("/api/leaderboard", get(leaderboard))
        // Story
        .route("/api/story", get(story_overview))
        .route("/api/story/choice", post(story_choice))
        .route("/api/story/progress/{player_id}", get(story_progress))
        .route("/api/story/{node_id}", get(story_node))
}

async fn health() -> &'static str {
    "OK"
}

fn player_id(raw: impl Into<String>) -> Result<PlayerId, ApiError> {
    Ok(PlayerId::new(raw)?)
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_characters(State(app): State<Arc<App>>) -> Json<Vec<CharacterArchetype>> {
    Json(app.content.characters.clone())
}

async fn list_missions(
    State(app): State<Arc<App>>,
    ApiQuery(query): ApiQuery<MissionListQuery>,
) -> Json<Vec<Mission>> {
    Json(app.use_cases.mission.list.execute(query.level()))
}

async fn list_shop(State(app): State<Arc<App>>) -> Json<Vec<ShopItem>> {
    Json(app.content.shop.clone())
}

async fn list_achievements(State(app): State<Arc<App>>) -> Json<Vec<Achievement>> {
    Json(app.content.achievements.clone())
}

// =============================================================================
// Save slots
// =============================================================================

async fn new_game(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<NewGameRequest>,
) -> Result<Json<NewGameResponse>, ApiError> {
    let requested = req.player_id.map(player_id).transpose()?;
    let started = app
        .use_cases
        .game
        .start
        .execute(&req.character_id, requested)
        .await?;
    Ok(Json(NewGameResponse {
        player_id: started.player_id.to_string(),
        player: started.save.player,
        game_state: started.save.game_state,
    }))
}

async fn save_game(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<SaveGameRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = player_id(req.player_id.unwrap_or_default())?;
    app.use_cases
        .game
        .save
        .execute(&id, GameSave::new(req.player, req.game_state))
        .await?;
    Ok(Json(MessageResponse::new("Game saved successfully")))
}

async fn load_game(
    State(app): State<Arc<App>>,
    Path(raw_id): Path<String>,
) -> Result<Json<GameSave>, ApiError> {
    let save = app.use_cases.game.load.execute(&player_id(raw_id)?).await?;
    Ok(Json(save))
}

async fn rest(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<PlayerActionRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = app
        .use_cases
        .game
        .rest
        .execute(&player_id(req.player_id)?)
        .await?;
    Ok(Json(PlayerResponse { player }))
}

async fn lay_low(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<PlayerActionRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = app
        .use_cases
        .game
        .lay_low
        .execute(&player_id(req.player_id)?)
        .await?;
    Ok(Json(PlayerResponse { player }))
}

// =============================================================================
// Actions
// =============================================================================

async fn complete_mission(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<CompleteMissionRequest>,
) -> Result<Json<MissionOutcome>, ApiError> {
    let input = CompleteMissionInput {
        player_id: player_id(req.player_id)?,
        mission_id: req.mission_id,
        success: req.success,
        mini_game_success: req.mini_game_success,
    };
    let outcome = app.use_cases.mission.complete.execute(input).await?;
    Ok(Json(outcome))
}

async fn buy_item(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<BuyItemRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let response = app
        .use_cases
        .shop
        .buy
        .execute(&player_id(req.player_id)?, &req.item_id)
        .await?;
    Ok(Json(response))
}

async fn train_skill(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<TrainSkillRequest>,
) -> Result<Json<SkillTrainingResponse>, ApiError> {
    let response = app
        .use_cases
        .shop
        .train
        .execute(&player_id(req.player_id)?, req.skill)
        .await?;
    Ok(Json(response))
}

async fn leaderboard(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    Ok(Json(app.use_cases.leaderboard.execute().await?))
}

// =============================================================================
// Story
// =============================================================================

async fn story_overview(State(app): State<Arc<App>>) -> Json<StoryOverview> {
    Json(app.use_cases.story.overview.execute())
}

async fn story_node(
    State(app): State<Arc<App>>,
    Path(node_id): Path<String>,
) -> Result<Json<StoryNode>, ApiError> {
    let node = app
        .use_cases
        .story
        .node
        .execute(&StoryNodeId::new(node_id))?;
    Ok(Json(node))
}

async fn story_choice(
    State(app): State<Arc<App>>,
    ApiJson(req): ApiJson<StoryChoiceRequest>,
) -> Result<Json<StoryChoiceResponse>, ApiError> {
    let input = StoryChoiceInput {
        player_id: player_id(req.player_id)?,
        current_node: req.current_node,
        choice_index: req.choice_index,
    };
    let response = app.use_cases.story.choice.execute(input).await?;
    Ok(Json(response))
}

async fn story_progress(
    State(app): State<Arc<App>>,
    Path(raw_id): Path<String>,
) -> Result<Json<StoryProgress>, ApiError> {
    let progress = app
        .use_cases
        .story
        .progress
        .execute(&player_id(raw_id)?)
        .await?;
    Ok(Json(progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use crate::infrastructure::clock::{FixedClock, FixedRoll};
    use crate::infrastructure::in_memory::InMemorySaveRepo;
    use crate::infrastructure::ports::SaveRepo;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use hacktycoon_domain::{GameRules, GameState, Player};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct TestApp {
        app: Arc<App>,
        saves: Arc<InMemorySaveRepo>,
    }

    impl TestApp {
        /// `roll` is returned for every random draw: 0 always succeeds and
        /// always triggers the first random event, 99 never does either.
        fn new(roll: u32) -> Self {
            let saves = Arc::new(InMemorySaveRepo::new());
            let app = Arc::new(App::new(
                saves.clone(),
                Arc::new(GameContent::standard().unwrap()),
                Arc::new(FixedClock(Utc::now())),
                Arc::new(FixedRoll(roll)),
                GameRules::default(),
            ));
            Self { app, saves }
        }

        async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
            let response = routes()
                .with_state(self.app.clone())
                .oneshot(request)
                .await
                .unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, body)
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
        }

        async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
        }

        async fn seed(&self, id: &str, player: Player) {
            self.saves
                .save(
                    &PlayerId::new(id).unwrap(),
                    &GameSave::new(player, GameState::new(Utc::now())),
                )
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn health_check() {
        let response = routes()
            .with_state(TestApp::new(99).app)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn catalog_endpoints() {
        let test = TestApp::new(99);

        let (status, characters) = test.get("/api/characters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(characters.as_array().unwrap().len(), 4);
        assert_eq!(characters[0]["startingMoney"], 500);

        let (_, missions) = test.get("/api/missions").await;
        assert_eq!(missions.as_array().unwrap().len(), 4);
        assert_eq!(missions[2]["type"], "illegal");

        let (_, missions) = test.get("/api/missions?level=6").await;
        assert_eq!(missions.as_array().unwrap().len(), 10);

        let (_, shop) = test.get("/api/shop").await;
        assert_eq!(shop.as_array().unwrap().len(), 6);

        let (_, achievements) = test.get("/api/achievements").await;
        assert_eq!(achievements[1], json!({
            "id": "cash",
            "name": "Money Maker",
            "desc": "Earn $5000",
            "money": 5000
        }));
    }

    #[tokio::test]
    async fn malformed_bodies_are_json_bad_requests() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "ghost", "playerId": "p1"}))
            .await;

        let cases = [
            ("/api/mission/complete", json!({"playerId": "p1"})),
            (
                "/api/story/choice",
                json!({"playerId": "p1", "currentNode": "intro", "choiceIndex": -1}),
            ),
            ("/api/shop/buy", json!({"itemId": "vpn"})),
        ];
        for (uri, body) in cases {
            let response = routes()
                .with_state(test.app.clone())
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .header("content-type", "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                response.headers()["content-type"],
                "application/json",
                "{uri}"
            );
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert!(body["error"].is_string(), "{uri}: {body}");
        }

        let (status, body) = test
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/api/game/rest")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = test
            .send(
                Request::builder()
                    .method("POST")
                    .uri("/api/game/rest")
                    .body(Body::from(r#"{"playerId":"p1"}"#))
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_mission_level_lists_level_one() {
        let test = TestApp::new(99);
        let (_, level_one) = test.get("/api/missions").await;

        for uri in ["/api/missions?level=abc", "/api/missions?level=0", "/api/missions?level="] {
            let (status, missions) = test.get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(missions, level_one, "{uri}");
        }
    }

    #[tokio::test]
    async fn new_game_then_load() {
        let test = TestApp::new(99);

        let (status, created) = test
            .post("/api/game/new", json!({"characterId": "phoenix", "playerId": "p1"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["playerId"], "p1");
        assert_eq!(created["player"]["money"], 300);
        assert_eq!(created["player"]["currentStoryNode"], "intro");
        assert_eq!(created["gameState"]["turn"], 0);

        let (status, loaded) = test.get("/api/game/load/p1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(loaded["player"], created["player"]);
    }

    #[tokio::test]
    async fn new_game_rejects_unknown_character() {
        let test = TestApp::new(99);
        let (status, body) = test
            .post("/api/game/new", json!({"characterId": "rebel", "playerId": "p1"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid character"}));
    }

    #[tokio::test]
    async fn load_missing_save_is_not_found() {
        let test = TestApp::new(99);
        let (status, body) = test.get("/api/game/load/ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No game found");
    }

    #[tokio::test]
    async fn save_requires_player_id() {
        let test = TestApp::new(99);
        let (_, created) = test
            .post("/api/game/new", json!({"characterId": "ghost", "playerId": "p1"}))
            .await;

        let (status, body) = test
            .post(
                "/api/game/save",
                json!({"player": created["player"], "gameState": created["gameState"]}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Player ID required");

        let (status, body) = test
            .post(
                "/api/game/save",
                json!({
                    "playerId": "p2",
                    "player": created["player"],
                    "gameState": created["gameState"]
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Game saved successfully");
        assert_eq!(test.saves.len(), 2);
    }

    #[tokio::test]
    async fn mission_round_trip_over_http() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "ghost", "playerId": "p1"}))
            .await;

        let (status, outcome) = test
            .post(
                "/api/mission/complete",
                json!({"playerId": "p1", "missionId": 1, "success": true}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["succeeded"], true);
        assert_eq!(outcome["rewards"], json!({"xp": 20, "money": 50, "doubled": false}));
        assert_eq!(outcome["newAchievement"]["id"], "first");
        assert_eq!(outcome["player"]["money"], 550);
        assert_eq!(outcome["gameOver"], false);
        assert!(outcome.get("randomEvent").is_none());

        let (status, body) = test
            .post(
                "/api/mission/complete",
                json!({"playerId": "p1", "missionId": 99, "success": true}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid mission");
    }

    #[tokio::test]
    async fn rest_and_lay_low() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "cipher", "playerId": "p1"}))
            .await;

        let (status, body) = test.post("/api/game/rest", json!({"playerId": "p1"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"]["energy"], 100);

        let (status, body) = test.post("/api/game/lay-low", json!({"playerId": "p1"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"]["money"], 100);

        let (status, body) = test.post("/api/game/lay-low", json!({"playerId": "p1"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not enough money");

        let (status, _) = test.post("/api/game/rest", json!({"playerId": "nobody"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn shop_purchase_rules() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "nexus", "playerId": "p1"}))
            .await;

        let (status, body) = test
            .post("/api/shop/buy", json!({"playerId": "p1", "itemId": "vpn"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"]["skills"]["stealth"], 7);
        assert_eq!(body["item"]["id"], "vpn");

        let (status, body) = test
            .post("/api/shop/buy", json!({"playerId": "p1", "itemId": "vpn"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Item already owned");

        let (status, body) = test
            .post("/api/shop/buy", json!({"playerId": "p1", "itemId": "exploit"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not enough money");

        let (status, body) = test
            .post("/api/shop/buy", json!({"playerId": "p1", "itemId": "laser"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid item");
    }

    #[tokio::test]
    async fn skill_training() {
        let test = TestApp::new(99);
        let content = GameContent::standard().unwrap();
        let mut player = Player::from_archetype(&content.characters[0], StoryNodeId::new("intro"));
        for _ in 0..10 {
            player.apply_event(&content.events[9], &GameRules::default());
        }
        test.seed("p1", player).await;

        let (status, body) = test
            .post("/api/skills/train", json!({"playerId": "p1", "skill": "social"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["newLevel"], 6);
        assert_eq!(body["cost"], 2500);
        assert_eq!(body["player"]["money"], 3000);

        let (status, _) = test
            .post("/api/skills/train", json!({"playerId": "p1", "skill": "charm"}))
            .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn story_flow() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "ghost", "playerId": "p1"}))
            .await;

        let (status, overview) = test.get("/api/story").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(overview["startNode"], "intro");
        assert_eq!(overview["totalNodes"], 30);

        let (status, intro) = test.get("/api/story/intro").await;
        assert_eq!(status, StatusCode::OK);
        let next = intro["choices"][0]["next"].clone();

        let (status, body) = test
            .post(
                "/api/story/choice",
                json!({"playerId": "p1", "currentNode": "intro", "choiceIndex": 0}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nextNode"]["id"], next);
        assert_eq!(body["isEnding"], false);

        let (status, body) = test
            .post(
                "/api/story/choice",
                json!({"playerId": "p1", "currentNode": "intro", "choiceIndex": 0}),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].as_str().unwrap().contains("out of sync"));

        let (status, progress) = test.get("/api/story/progress/p1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(progress, json!({"currentNode": next, "storyPath": ["intro"]}));

        let (status, body) = test.get("/api/story/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Story node not found");
    }

    #[tokio::test]
    async fn story_requirement_is_returned() {
        let test = TestApp::new(99);
        let content = GameContent::standard().unwrap();
        let fresh = Player::from_archetype(&content.characters[0], StoryNodeId::new("intro"));
        let (node, index, requirement) = content
            .story
            .node_ids()
            .into_iter()
            .find_map(|id| {
                let node = content.story.node(&id)?;
                node.choices.iter().enumerate().find_map(|(index, choice)| {
                    let req = choice.requirement.as_ref()?;
                    (!req.is_met(&fresh)).then(|| (id.clone(), index, req.clone()))
                })
            })
            .unwrap();
        test.seed(
            "p1",
            Player::from_archetype(&content.characters[0], node.clone()),
        )
        .await;

        let (status, body) = test
            .post(
                "/api/story/choice",
                json!({"playerId": "p1", "currentNode": node, "choiceIndex": index}),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Requirements not met");
        assert_eq!(body["requirement"], serde_json::to_value(requirement).unwrap());
    }

    #[tokio::test]
    async fn leaderboard_lists_saves() {
        let test = TestApp::new(99);
        test.post("/api/game/new", json!({"characterId": "ghost", "playerId": "a"}))
            .await;
        test.post("/api/game/new", json!({"characterId": "nexus", "playerId": "b"}))
            .await;

        let (status, board) = test.get("/api/leaderboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(board[0]["playerId"], "b");
        assert_eq!(board[0]["name"], "Nexus");
        assert_eq!(board[1]["playerId"], "a");
    }
}
