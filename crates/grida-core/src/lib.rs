//! Grida Core
//!
//! Document model of the Grida canvas: colors, paints, node prototypes, vector
//! networks and the CSS projection of nodes.

pub mod color;
pub mod css;
pub mod document;
pub mod id;
pub mod node;
pub mod paint;
pub mod transform;
pub mod vn;

pub use color::{ColorError, Rgba32F, Rgba8888};
pub use css::{FillTarget, StyleAttributes, StyleConfig, StyleProperties};
pub use document::{DocumentDefinition, DocumentError};
pub use id::{IdGenerator, NodeId, UuidGenerator};
pub use node::{
    ContainerNode, CornerRadius, Dimension, GroupNode, Node, NodeBase, Positioning,
    RectangleNode, TextNode, VectorNode,
};
pub use paint::{BlendMode, BoxShadow, GradientPaint, GradientStop, Paint};
pub use vn::{VectorNetwork, VectorNetworkError};
