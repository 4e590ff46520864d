//! Use cases - User story orchestration.
//!
//! Each module groups the operations of one area of the game. Use cases load
//! a save, apply domain rules to the player, and store the result.

pub mod game;
pub mod leaderboard;
pub mod mission;
pub mod shop;
pub mod story;

pub use game::GameUseCases;
pub use leaderboard::GetLeaderboard;
pub use mission::MissionUseCases;
pub use shop::ShopUseCases;
pub use story::StoryUseCases;
