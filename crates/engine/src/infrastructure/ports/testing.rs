//! Ports for the two things a test must be able to pin down: the wall clock
//! and dice rolls.

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of chance for mission rolls, random events and fresh save ids.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform roll in `0..100`.
    fn roll_percent(&self) -> u32;
    /// Uniform index in `0..len`. Callers never pass zero.
    fn pick_index(&self, len: usize) -> usize;
    fn new_save_id(&self) -> Uuid;
}
