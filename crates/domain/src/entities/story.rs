//! Story graph: narrative nodes connected by requirement-gated choices.
//!
//! # Invariants
//!
//! Enforced by [`StoryGraph::new`]:
//! - node ids are unique and the start node exists
//! - every choice points at an existing node
//! - ending nodes carry an ending type and have no choices
//! - every other node offers at least one choice

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::StoryNodeId;
use crate::value_objects::Requirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingType {
    Good,
    Neutral,
    Bad,
}

/// An outgoing edge of a story node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChoice {
    pub text: String,
    pub next: StoryNodeId,
    #[serde(default)]
    pub requirement: Option<Requirement>,
}

impl StoryChoice {
    pub fn open(text: &str, next: &str) -> Self {
        Self {
            text: text.to_string(),
            next: StoryNodeId::new(next),
            requirement: None,
        }
    }

    pub fn gated(text: &str, next: &str, requirement: Requirement) -> Self {
        Self {
            text: text.to_string(),
            next: StoryNodeId::new(next),
            requirement: Some(requirement),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryNode {
    pub id: StoryNodeId,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub choices: Vec<StoryChoice>,
    #[serde(default)]
    pub ending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_type: Option<EndingType>,
}

impl StoryNode {
    pub fn chapter(id: &str, title: &str, text: &str, choices: Vec<StoryChoice>) -> Self {
        Self {
            id: StoryNodeId::new(id),
            title: title.to_string(),
            text: text.to_string(),
            choices,
            ending: false,
            ending_type: None,
        }
    }

    pub fn ending(id: &str, title: &str, text: &str, ending_type: EndingType) -> Self {
        Self {
            id: StoryNodeId::new(id),
            title: title.to_string(),
            text: text.to_string(),
            choices: Vec::new(),
            ending: true,
            ending_type: Some(ending_type),
        }
    }

    pub fn choice(&self, index: usize) -> Option<&StoryChoice> {
        self.choices.get(index)
    }
}

/// Validated, immutable story graph.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    nodes: BTreeMap<StoryNodeId, StoryNode>,
    start: StoryNodeId,
}

impl StoryGraph {
    pub fn new(
        nodes: impl IntoIterator<Item = StoryNode>,
        start: StoryNodeId,
    ) -> Result<Self, DomainError> {
        let mut map = BTreeMap::new();
        for node in nodes {
            if let Some(dup) = map.insert(node.id.clone(), node) {
                return Err(DomainError::constraint(format!(
                    "Duplicate story node: {}",
                    dup.id
                )));
            }
        }

        if !map.contains_key(&start) {
            return Err(DomainError::constraint(format!(
                "Start node {start} does not exist"
            )));
        }

        for node in map.values() {
            if node.ending {
                if !node.choices.is_empty() {
                    return Err(DomainError::constraint(format!(
                        "Ending {} must not offer choices",
                        node.id
                    )));
                }
                if node.ending_type.is_none() {
                    return Err(DomainError::constraint(format!(
                        "Ending {} has no ending type",
                        node.id
                    )));
                }
                continue;
            }
            if node.choices.is_empty() {
                return Err(DomainError::constraint(format!(
                    "Story node {} is a dead end",
                    node.id
                )));
            }
            if let Some(choice) = node.choices.iter().find(|c| !map.contains_key(&c.next)) {
                return Err(DomainError::constraint(format!(
                    "Story node {} links to missing node {}",
                    node.id, choice.next
                )));
            }
        }

        Ok(Self { nodes: map, start })
    }

    pub fn start(&self) -> &StoryNodeId {
        &self.start
    }

    pub fn node(&self, id: &StoryNodeId) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    /// All node ids in sorted order.
    pub fn node_ids(&self) -> Vec<StoryNodeId> {
        self.nodes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn endings(&self) -> impl Iterator<Item = &StoryNode> {
        self.nodes.values().filter(|n| n.ending)
    }

    /// Nodes reachable from `from`, ignoring requirements.
    pub fn reachable_from(&self, from: &StoryNodeId) -> HashSet<StoryNodeId> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        if self.nodes.contains_key(from) {
            seen.insert(from.clone());
            queue.push_back(from.clone());
        }
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            for choice in &node.choices {
                if seen.insert(choice.next.clone()) {
                    queue.push_back(choice.next.clone());
                }
            }
        }
        seen
    }
}
