//! Get story node use case.

use std::sync::Arc;

use hacktycoon_domain::{StoryNode, StoryNodeId};

use crate::content::GameContent;

use super::error::StoryError;

pub struct GetNode {
    content: Arc<GameContent>,
}

impl GetNode {
    pub fn new(content: Arc<GameContent>) -> Self {
        Self { content }
    }

    pub fn execute(&self, node_id: &StoryNodeId) -> Result<StoryNode, StoryError> {
        self.content
            .story
            .node(node_id)
            .cloned()
            .ok_or_else(|| StoryError::NodeNotFound(node_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_known_node() {
        let use_case = GetNode::new(Arc::new(GameContent::standard().unwrap()));
        let node = use_case.execute(&StoryNodeId::new("intro")).unwrap();
        assert_eq!(node.id, "intro");
        assert!(!node.choices.is_empty());
    }

    #[test]
    fn unknown_node_is_not_found() {
        let use_case = GetNode::new(Arc::new(GameContent::standard().unwrap()));
        let result = use_case.execute(&StoryNodeId::new("nowhere"));
        assert!(matches!(result, Err(StoryError::NodeNotFound(_))));
    }
}
