//! Mission use cases: browsing the job board and resolving a job.

mod complete;
mod error;
mod list;

use std::sync::Arc;

pub use complete::{CompleteMission, CompleteMissionInput};
pub use error::MissionError;
pub use list::ListMissions;

/// Container for mission use cases.
pub struct MissionUseCases {
    pub list: Arc<ListMissions>,
    pub complete: Arc<CompleteMission>,
}

impl MissionUseCases {
    pub fn new(list: Arc<ListMissions>, complete: Arc<CompleteMission>) -> Self {
        Self { list, complete }
    }
}
