//! Figma importer.
//!
//! Converts a node subtree fetched from the Figma REST API into a
//! [`DocumentDefinition`]. Only the requested root and its direct children are
//! converted:
//! - [`document`] - convert a deserialized subtree
//! - [`document_from_json`] - parse and convert a JSON subtree
//! - API types for the REST node schema

pub mod api_types;
pub mod conversion;


pub use api_types::{
    FigmaColor, FigmaEffect, FigmaNode, FigmaNodeType, FigmaPaint, FigmaPaintType,
    FigmaTypeStyle, FigmaVector,
};
pub use conversion::node_without_children;

use grida_core::node::Position;
use grida_core::{DocumentDefinition, IdGenerator};
use log::{debug, warn};
use thiserror::Error;

/// Figma import errors.
#[derive(Debug, Error)]
pub enum FigmaImportError {
    /// Known Figma type without a mapping yet.
    #[error("Unsupported node type: {0}")]
    UnsupportedNodeType(FigmaNodeType),
    /// FigJam or unrecognized type.
    #[error("Unknown node type: {0}")]
    UnknownNodeType(FigmaNodeType),
    #[error("Root node {0:?} does not convert to a node")]
    EmptyRoot(String),
    #[error("Invalid Figma JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FigmaImportError>;

/// Convert `node` and its direct children.
///
/// The root is placed at the origin with relative positioning. Children that
/// convert to no node (groups) are omitted; an unsupported child type fails the
/// whole conversion.
pub fn document(node: &FigmaNode, ids: &dyn IdGenerator) -> Result<DocumentDefinition> {
    let mut root = node_without_children(node, None, ids)?
        .ok_or_else(|| FigmaImportError::EmptyRoot(node.id.clone()))?;

    let positioning = root.positioning_mut();
    positioning.position = Position::Relative;
    positioning.left = Some(0.0);
    positioning.top = Some(0.0);

    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        match node_without_children(child, Some(node), ids)? {
            Some(converted) => children.push(converted),
            None => debug!("child {:?} of {:?} omitted", child.id, node.id),
        }
    }

    let child_ids: Vec<_> = children.iter().map(|c| c.id().clone()).collect();
    match root.children_mut() {
        Some(slot) => *slot = child_ids,
        None if !child_ids.is_empty() => {
            warn!(
                "{} root {:?} cannot hold children, {} converted children left unreferenced",
                node.node_type,
                node.id,
                child_ids.len()
            );
        }
        None => {}
    }

    let mut document = DocumentDefinition::new(root.id().clone());
    document.insert(root);
    for child in children {
        document.insert(child);
    }
    debug!("imported Figma node {:?}: {} nodes", node.id, document.len());
    Ok(document)
}

/// Parse a REST node subtree and convert it with [`document`].
pub fn document_from_json(json: &str, ids: &dyn IdGenerator) -> Result<DocumentDefinition> {
    let node: FigmaNode = serde_json::from_str(json)?;
    document(&node, ids)
}
