//! API layer - HTTP entry points.

pub mod error;
pub mod extract;
pub mod http;

pub use error::ApiError;
