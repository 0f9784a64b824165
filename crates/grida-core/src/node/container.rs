//! Container node.

use super::{Border, CornerRadius, FlexLayout, NodeBase, Padding, Positioning};
use crate::id::NodeId;
use crate::paint::{BlendMode, BoxShadow, Paint};
use serde::{Deserialize, Serialize};

/// A box that lays out and optionally clips its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(flatten)]
    pub positioning: Positioning,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default)]
    pub corner_radius: CornerRadius,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub box_shadows: Vec<BoxShadow>,
    #[serde(flatten)]
    pub flex: FlexLayout,
    #[serde(default)]
    pub clips_content: bool,
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Ordered child ids.
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl ContainerNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            positioning: Positioning::default(),
            fill: None,
            border: None,
            corner_radius: CornerRadius::default(),
            padding: None,
            box_shadows: Vec::new(),
            flex: FlexLayout::default(),
            clips_content: false,
            blend_mode: BlendMode::default(),
            children: Vec::new(),
        }
    }

    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = positioning;
        self
    }

    pub fn with_fill(mut self, fill: Option<Paint>) -> Self {
        self.fill = fill;
        self
    }
}
