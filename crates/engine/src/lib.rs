//! Hacker Tycoon Engine library.
//!
//! This crate contains all server-side code for the Hacker Tycoon backend.
//!
//! ## Structure
//!
//! - `content/` - Static catalog and story graph
//! - `use_cases/` - User story orchestration over the player aggregate
//! - `infrastructure/` - Port traits, in-memory store, clock, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod content;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
