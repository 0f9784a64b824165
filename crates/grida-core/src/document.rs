//! Document definition: a flat node map plus the id of the tree's entry node.

use crate::id::NodeId;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Dangling references found by [`DocumentDefinition::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Root node {0:?} is not in the document")]
    MissingRoot(NodeId),
    #[error("Node {parent:?} references missing child {child:?}")]
    MissingChild { parent: NodeId, child: NodeId },
}

/// Output of every importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefinition {
    /// All nodes, keyed by id.
    pub nodes: HashMap<NodeId, Node>,
    /// Insertion order of `nodes` (back to front for flat rendering).
    #[serde(default)]
    pub order: Vec<NodeId>,
    pub root_id: NodeId,
}

impl DocumentDefinition {
    /// Empty document whose root will be `root_id`.
    pub fn new(root_id: impl Into<NodeId>) -> Self {
        Self {
            nodes: HashMap::new(),
            order: Vec::new(),
            root_id: root_id.into(),
        }
    }

    /// Insert a node keyed by its id. A node replacing an existing id keeps the
    /// original position in `order`.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        let id = node.id().clone();
        let previous = self.nodes.insert(id.clone(), node);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.get(&self.root_id)
    }

    /// Children of `id` in order. Unknown ids are skipped.
    pub fn children_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Node> + use<'a> {
        self.get(id)
            .map(|node| node.children())
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.nodes.get(child))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Check that the root and every child reference resolve.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if !self.contains(&self.root_id) {
            return Err(DocumentError::MissingRoot(self.root_id.clone()));
        }
        for node in self.iter() {
            if let Some(child) = node.children().iter().find(|c| !self.contains(c)) {
                return Err(DocumentError::MissingChild {
                    parent: node.id().clone(),
                    child: child.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
