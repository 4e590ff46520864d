//! Save slot lifecycle: start, save, load, and the between-mission actions
//! that only touch resources.

mod error;
mod lay_low;
mod load;
mod rest;
mod save;
mod start;

use std::sync::Arc;

pub use error::GameError;
pub use lay_low::LayLow;
pub use load::LoadGame;
pub use rest::Rest;
pub use save::SaveGame;
pub use start::{StartGame, StartedGame};

/// Container for save slot use cases.
pub struct GameUseCases {
    pub start: Arc<StartGame>,
    pub save: Arc<SaveGame>,
    pub load: Arc<LoadGame>,
    pub rest: Arc<Rest>,
    pub lay_low: Arc<LayLow>,
}

impl GameUseCases {
    pub fn new(
        start: Arc<StartGame>,
        save: Arc<SaveGame>,
        load: Arc<LoadGame>,
        rest: Arc<Rest>,
        lay_low: Arc<LayLow>,
    ) -> Self {
        Self {
            start,
            save,
            load,
            rest,
            lay_low,
        }
    }
}
