//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": "..."}` with a status code.
//! Internal errors are logged and their details withheld from the client.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hacktycoon_domain::{DomainError, Requirement};
use hacktycoon_shared::ErrorBody;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::{
    game::GameError, mission::MissionError, shop::ShopError, story::StoryError,
};

const NO_GAME: &str = "No game found";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    RequirementsNotMet(Requirement),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::new(msg)),
            ApiError::RequirementsNotMet(requirement) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Requirements not met").with_requirement(requirement),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            DomainError::InsufficientFunds { .. } => {
                ApiError::BadRequest("Not enough money".into())
            }
            DomainError::InsufficientEnergy { .. } => {
                ApiError::BadRequest("Not enough energy".into())
            }
            DomainError::AlreadyOwned(_) => ApiError::BadRequest("Item already owned".into()),
            DomainError::Constraint(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::InvalidCharacter(_) => ApiError::BadRequest("Invalid character".into()),
            GameError::NotFound(_) => ApiError::NotFound(NO_GAME.into()),
            GameError::Domain(e) => e.into(),
            GameError::Repo(e) => e.into(),
        }
    }
}

impl From<MissionError> for ApiError {
    fn from(e: MissionError) -> Self {
        match e {
            MissionError::InvalidMission(_) => ApiError::BadRequest("Invalid mission".into()),
            MissionError::NotFound(_) => ApiError::NotFound(NO_GAME.into()),
            MissionError::MissionLocked { .. } => ApiError::BadRequest(e.to_string()),
            MissionError::Domain(e) => e.into(),
            MissionError::Repo(e) => e.into(),
        }
    }
}

impl From<ShopError> for ApiError {
    fn from(e: ShopError) -> Self {
        match e {
            ShopError::InvalidItem(_) => ApiError::BadRequest("Invalid item".into()),
            ShopError::NotFound(_) => ApiError::NotFound(NO_GAME.into()),
            ShopError::Domain(e) => e.into(),
            ShopError::Repo(e) => e.into(),
        }
    }
}

impl From<StoryError> for ApiError {
    fn from(e: StoryError) -> Self {
        match e {
            StoryError::NodeNotFound(_) => ApiError::NotFound("Story node not found".into()),
            StoryError::NotFound(_) => ApiError::NotFound(NO_GAME.into()),
            StoryError::OutOfSync { .. } => ApiError::Conflict(e.to_string()),
            StoryError::InvalidChoice(_) => ApiError::BadRequest("Invalid choice".into()),
            StoryError::RequirementsNotMet(requirement) => {
                ApiError::RequirementsNotMet(requirement)
            }
            StoryError::Repo(e) => e.into(),
        }
    }
}
