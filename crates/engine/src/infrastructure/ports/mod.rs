//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Save storage (in-memory today, could swap to a database)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::SaveRepo;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockSaveRepo;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
