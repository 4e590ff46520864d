//! Story use cases: reading nodes and walking the choice graph.

mod choice;
mod error;
mod node;
mod overview;
mod progress;

use std::sync::Arc;

pub use choice::{MakeChoice, StoryChoiceInput};
pub use error::StoryError;
pub use node::GetNode;
pub use overview::StoryOverviewQuery;
pub use progress::GetProgress;

/// Container for story use cases.
pub struct StoryUseCases {
    pub node: Arc<GetNode>,
    pub choice: Arc<MakeChoice>,
    pub progress: Arc<GetProgress>,
    pub overview: Arc<StoryOverviewQuery>,
}

impl StoryUseCases {
    pub fn new(
        node: Arc<GetNode>,
        choice: Arc<MakeChoice>,
        progress: Arc<GetProgress>,
        overview: Arc<StoryOverviewQuery>,
    ) -> Self {
        Self {
            node,
            choice,
            progress,
            overview,
        }
    }
}
