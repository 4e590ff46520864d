//! Hacker Tycoon Shared - wire types for the REST API
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **camelCase JSON** - matches the browser client
//! 3. **Domain types embedded as-is** - the player aggregate and catalog
//!    entries already carry their wire format

pub mod requests;
pub mod responses;

pub use requests::{
    BuyItemRequest, CompleteMissionRequest, MissionListQuery, NewGameRequest,
    PlayerActionRequest, SaveGameRequest, StoryChoiceRequest, TrainSkillRequest,
};
pub use responses::{
    ErrorBody, LeaderboardEntry, MessageResponse, MissionOutcome, NewGameResponse,
    PlayerResponse, PurchaseResponse, SkillTrainingResponse, StoryChoiceResponse,
    StoryOverview, StoryProgress,
};
