//! Story overview: a summary of the loaded graph for clients and tooling.

use std::sync::Arc;

use hacktycoon_shared::StoryOverview;

use crate::content::GameContent;

pub struct StoryOverviewQuery {
    content: Arc<GameContent>,
}

impl StoryOverviewQuery {
    pub fn new(content: Arc<GameContent>) -> Self {
        Self { content }
    }

    pub fn execute(&self) -> StoryOverview {
        let story = &self.content.story;
        StoryOverview {
            message: "Story system loaded".to_string(),
            start_node: story.start().clone(),
            available_nodes: story.node_ids(),
            total_nodes: story.len(),
            endings: story.endings().map(|node| node.id.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarises_standard_story() {
        let content = Arc::new(GameContent::standard().unwrap());
        let overview = StoryOverviewQuery::new(content).execute();
        assert_eq!(overview.start_node, "intro");
        assert_eq!(overview.total_nodes, overview.available_nodes.len());
        assert_eq!(overview.endings.len(), 13);
        let mut sorted = overview.available_nodes.clone();
        sorted.sort();
        assert_eq!(sorted, overview.available_nodes);
    }
}
