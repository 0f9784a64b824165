//! Node prototypes.
//!
//! Nodes reference their children by id; the owning
//! [`DocumentDefinition`](crate::DocumentDefinition) holds every node in a flat map.

mod container;
mod group;
mod rectangle;
mod text;
mod vector;

pub use container::ContainerNode;
pub use group::GroupNode;
pub use rectangle::RectangleNode;
pub use text::{TextAlign, TextAlignVertical, TextDecoration, TextNode, TextStyle};
pub use vector::{Stroke, VectorNode};

use crate::color::Rgba32F;
use crate::css::{self, FillTarget, StyleAttributes, StyleConfig, StyleProperties};
use crate::id::NodeId;
use crate::paint::Paint;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

/// Attributes shared by every node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBase {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    /// Visibility.
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub locked: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub z_index: i32,
}

impl NodeBase {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            locked: false,
            rotation: 0.0,
            opacity: 1.0,
            z_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Absolute,
    Relative,
}

impl Position {
    pub fn as_css(&self) -> &'static str {
        match self {
            Position::Absolute => "absolute",
            Position::Relative => "relative",
        }
    }
}

/// A CSS length: plain pixels, a unit-bearing length, a percentage, or `auto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Px(f64),
    Length { value: f64, unit: String },
    Percentage(f64),
    Auto,
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Dimension::Px(px)
    }
}

/// Box placement within the parent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Positioning {
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

impl Positioning {
    /// Absolute box at `(left, top)` with a fixed pixel size.
    pub fn absolute(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position::Absolute,
            left: Some(left),
            top: Some(top),
            right: None,
            bottom: None,
            width: Some(Dimension::Px(width)),
            height: Some(Dimension::Px(height)),
        }
    }
}

/// Corner radius, either uniform or per corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    Rectangular {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

impl Default for CornerRadius {
    fn default() -> Self {
        CornerRadius::Uniform(0.0)
    }
}

impl CornerRadius {
    /// `[top_left, top_right, bottom_right, bottom_left]`
    pub fn corners(&self) -> [f64; 4] {
        match *self {
            CornerRadius::Uniform(r) => [r; 4],
            CornerRadius::Rectangular {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => [top_left, top_right, bottom_right, bottom_left],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.corners().iter().all(|r| *r == 0.0)
    }
}

/// Per-side lengths in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides(EdgeInsets),
}

impl From<EdgeInsets> for Padding {
    /// Collapses to [`Padding::Uniform`] when all four sides agree.
    fn from(insets: EdgeInsets) -> Self {
        if insets.is_uniform() {
            Padding::Uniform(insets.top)
        } else {
            Padding::Sides(insets)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderWidth {
    Uniform(f64),
    Sides(EdgeInsets),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    pub color: Rgba32F,
    pub width: BorderWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Flow,
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}

impl MainAxisAlignment {
    /// CSS `justify-content` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            MainAxisAlignment::Start => "start",
            MainAxisAlignment::End => "end",
            MainAxisAlignment::Center => "center",
            MainAxisAlignment::SpaceBetween => "space-between",
            MainAxisAlignment::SpaceAround => "space-around",
            MainAxisAlignment::SpaceEvenly => "space-evenly",
            MainAxisAlignment::Stretch => "stretch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    Stretch,
}

impl CrossAxisAlignment {
    /// CSS `align-items` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            CrossAxisAlignment::Start => "start",
            CrossAxisAlignment::End => "end",
            CrossAxisAlignment::Center => "center",
            CrossAxisAlignment::Stretch => "stretch",
        }
    }
}

/// Flex container settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlexLayout {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub direction: Axis,
    #[serde(default)]
    pub main_axis_alignment: MainAxisAlignment,
    #[serde(default)]
    pub cross_axis_alignment: CrossAxisAlignment,
    #[serde(default)]
    pub main_axis_gap: f64,
    #[serde(default)]
    pub cross_axis_gap: f64,
}

/// A node prototype, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Container(ContainerNode),
    Group(GroupNode),
    Text(TextNode),
    Rectangle(RectangleNode),
    Vector(VectorNode),
}

impl Node {
    pub fn base(&self) -> &NodeBase {
        match self {
            Node::Container(n) => &n.base,
            Node::Group(n) => &n.base,
            Node::Text(n) => &n.base,
            Node::Rectangle(n) => &n.base,
            Node::Vector(n) => &n.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Node::Container(n) => &mut n.base,
            Node::Group(n) => &mut n.base,
            Node::Text(n) => &mut n.base,
            Node::Rectangle(n) => &mut n.base,
            Node::Vector(n) => &mut n.base,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Discriminant name as used in serialized documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Container(_) => "container",
            Node::Group(_) => "group",
            Node::Text(_) => "text",
            Node::Rectangle(_) => "rectangle",
            Node::Vector(_) => "vector",
        }
    }

    pub fn positioning(&self) -> &Positioning {
        match self {
            Node::Container(n) => &n.positioning,
            Node::Group(n) => &n.positioning,
            Node::Text(n) => &n.positioning,
            Node::Rectangle(n) => &n.positioning,
            Node::Vector(n) => &n.positioning,
        }
    }

    pub fn positioning_mut(&mut self) -> &mut Positioning {
        match self {
            Node::Container(n) => &mut n.positioning,
            Node::Group(n) => &mut n.positioning,
            Node::Text(n) => &mut n.positioning,
            Node::Rectangle(n) => &mut n.positioning,
            Node::Vector(n) => &mut n.positioning,
        }
    }

    pub fn fill(&self) -> Option<&Paint> {
        match self {
            Node::Container(n) => n.fill.as_ref(),
            Node::Text(n) => n.fill.as_ref(),
            Node::Rectangle(n) => n.fill.as_ref(),
            Node::Vector(n) => n.fill.as_ref(),
            Node::Group(_) => None,
        }
    }

    /// Child ids, empty for leaf nodes.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Container(n) => &n.children,
            Node::Group(n) => &n.children,
            Node::Text(_) | Node::Rectangle(_) | Node::Vector(_) => &[],
        }
    }

    /// Mutable child ids, `None` for node types that cannot have children.
    pub fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            Node::Container(n) => Some(&mut n.children),
            Node::Group(n) => Some(&mut n.children),
            Node::Text(_) | Node::Rectangle(_) | Node::Vector(_) => None,
        }
    }

    /// Style facets carried by this node.
    pub fn style_attributes(&self) -> StyleAttributes {
        let base = self.base();
        let positioning = self.positioning();
        let mut attrs = StyleAttributes {
            position: Some(positioning.position),
            left: positioning.left,
            top: positioning.top,
            right: positioning.right,
            bottom: positioning.bottom,
            width: positioning.width.clone(),
            height: positioning.height.clone(),
            z_index: Some(base.z_index),
            opacity: Some(base.opacity),
            rotation: Some(base.rotation),
            fill: self.fill().cloned(),
            ..Default::default()
        };

        match self {
            Node::Container(n) => {
                attrs.border = n.border;
                attrs.corner_radius = Some(n.corner_radius);
                attrs.padding = n.padding;
                attrs.box_shadows = n.box_shadows.clone();
                attrs.flex = Some(n.flex);
            }
            Node::Text(n) => {
                attrs.border = n.border;
                attrs.text_style = Some(n.style.clone());
            }
            Node::Rectangle(n) => {
                attrs.corner_radius = Some(n.corner_radius);
                attrs.box_shadows = n.effects.clone();
            }
            Node::Group(_) | Node::Vector(_) => {}
        }

        attrs
    }

    /// Fill target and text gating matching the node type.
    pub fn style_config(&self) -> StyleConfig {
        match self {
            Node::Text(_) => StyleConfig {
                fill: FillTarget::Color,
                has_text_style: true,
            },
            Node::Container(_) | Node::Rectangle(_) => StyleConfig {
                fill: FillTarget::Background,
                has_text_style: false,
            },
            Node::Vector(_) => StyleConfig {
                fill: FillTarget::Fill,
                has_text_style: false,
            },
            Node::Group(_) => StyleConfig {
                fill: FillTarget::None,
                has_text_style: false,
            },
        }
    }

    /// Project this node into inline style properties.
    pub fn to_style(&self) -> StyleProperties {
        css::to_style(&self.style_attributes(), &self.style_config())
    }
}

impl From<ContainerNode> for Node {
    fn from(node: ContainerNode) -> Self {
        Node::Container(node)
    }
}

impl From<GroupNode> for Node {
    fn from(node: GroupNode) -> Self {
        Node::Group(node)
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<RectangleNode> for Node {
    fn from(node: RectangleNode) -> Self {
        Node::Rectangle(node)
    }
}

impl From<VectorNode> for Node {
    fn from(node: VectorNode) -> Self {
        Node::Vector(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_corner_radius_default_is_zero() {
        assert_eq!(CornerRadius::default(), CornerRadius::Uniform(0.0));
        assert!(CornerRadius::default().is_zero());
    }

    #[test]
    fn test_corner_radius_serde_shapes() {
        let uniform: CornerRadius = serde_json::from_value(json!(4.0)).unwrap();
        assert_eq!(uniform.corners(), [4.0; 4]);

        let each: CornerRadius = serde_json::from_value(json!({
            "top_left": 1.0, "top_right": 2.0, "bottom_right": 3.0, "bottom_left": 4.0
        }))
        .unwrap();
        assert_eq!(each.corners(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_padding_collapses_uniform_sides() {
        assert_eq!(Padding::from(EdgeInsets::new(8.0, 8.0, 8.0, 8.0)), Padding::Uniform(8.0));
        assert!(matches!(
            Padding::from(EdgeInsets::new(1.0, 2.0, 3.0, 4.0)),
            Padding::Sides(_)
        ));
    }

    #[test]
    fn test_node_serializes_with_type_tag() {
        let node = Node::from(RectangleNode::new(NodeBase::new("r", "Rect")));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "rectangle");
        assert_eq!(value["id"], "r");
        assert_eq!(value["corner_radius"], 0.0);

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_base_defaults_when_deserializing() {
        let node: Node = serde_json::from_value(json!({
            "type": "group",
            "id": "g",
            "children": []
        }))
        .unwrap();
        let base = node.base();
        assert!(base.active);
        assert!(!base.locked);
        assert!((base.opacity - 1.0).abs() < f32::EPSILON);
        assert_eq!(node.kind(), "group");
    }

    #[test]
    fn test_leaf_nodes_have_no_children() {
        let mut node = Node::from(TextNode::new(NodeBase::new("t", "Text"), "Hi"));
        assert!(node.children().is_empty());
        assert!(node.children_mut().is_none());
    }

    #[test]
    fn test_style_config_per_type() {
        let text = Node::from(TextNode::new(NodeBase::new("t", "Text"), "Hi"));
        assert_eq!(text.style_config().fill, FillTarget::Color);
        assert!(text.style_config().has_text_style);

        let group = Node::from(GroupNode::new(NodeBase::new("g", "Group")));
        assert_eq!(group.style_config().fill, FillTarget::None);
    }
}
