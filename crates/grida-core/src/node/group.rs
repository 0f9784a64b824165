//! Group node.

use super::{NodeBase, Positioning};
use crate::id::NodeId;
use crate::paint::BlendMode;
use serde::{Deserialize, Serialize};

/// Pure grouping: no paint, no layout of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(flatten)]
    pub positioning: Positioning,
    #[serde(default)]
    pub blend_mode: BlendMode,
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl GroupNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            positioning: Positioning::default(),
            blend_mode: BlendMode::default(),
            children: Vec::new(),
        }
    }
}
