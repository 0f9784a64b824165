//! Rectangle node.

use super::{CornerRadius, NodeBase, Positioning};
use crate::paint::{BoxShadow, Paint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(flatten)]
    pub positioning: Positioning,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default)]
    pub corner_radius: CornerRadius,
    #[serde(default)]
    pub effects: Vec<BoxShadow>,
}

impl RectangleNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            positioning: Positioning::default(),
            fill: None,
            corner_radius: CornerRadius::default(),
            effects: Vec::new(),
        }
    }
}
