//! SVG importer.
//!
//! Converts the IR emitted by the native SVG resolver into a
//! [`DocumentDefinition`]: the `<svg>` root becomes a container, groups become
//! group nodes and paths become vector nodes. Text and images are not converted.

pub mod conversion;
pub mod ir;

pub use ir::{
    IrSvgChildNode, IrSvgGroupNode, IrSvgImageNode, IrSvgInitialContainerNode, IrSvgPathNode,
    IrSvgTextNode, SvgFillAttributes, SvgGradientStop, SvgLinearGradientPaint, SvgPaint,
    SvgRadialGradientPaint, SvgStrokeAttributes,
};

use conversion::Converter;
use grida_core::node::Position;
use grida_core::{ContainerNode, DocumentDefinition, IdGenerator, Node, NodeBase, Positioning};
use log::debug;
use thiserror::Error;

/// SVG import errors.
#[derive(Debug, Error)]
pub enum SvgImportError {
    #[error("Invalid SVG IR JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SvgImportError>;

/// Importer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgImportOptions {
    /// Deepest nesting level converted; deeper nodes are omitted.
    pub max_depth: usize,
    /// Name of the root container and prefix of generated child names.
    pub root_name: String,
}

impl Default for SvgImportOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            root_name: "svg".to_string(),
        }
    }
}

/// Convert a resolved SVG document.
///
/// The root container sits at the origin, sized to the SVG viewport. Every
/// converted descendant is stored flat in the returned document and referenced by
/// id from its parent.
pub fn convert(
    svg: &IrSvgInitialContainerNode,
    ids: &dyn IdGenerator,
    options: &SvgImportOptions,
) -> DocumentDefinition {
    let root = ContainerNode::new(NodeBase::new(ids.next_id(), options.root_name.as_str()))
        .with_positioning(Positioning {
            position: Position::Relative,
            ..Positioning::absolute(0.0, 0.0, svg.width, svg.height)
        });
    let root_id = root.base.id.clone();

    let mut converter = Converter {
        ids,
        options,
        document: DocumentDefinition::new(root_id.clone()),
    };
    converter.document.insert(root.into());
    let children = converter.children(&svg.children, &options.root_name, 1);
    if let Some(slot) = converter.document.get_mut(&root_id).and_then(Node::children_mut) {
        *slot = children;
    }

    debug!(
        "imported SVG {}x{}: {} nodes",
        svg.width,
        svg.height,
        converter.document.len()
    );
    converter.document
}

/// Parse serialized IR and convert it with [`convert`].
pub fn convert_from_json(
    json: &str,
    ids: &dyn IdGenerator,
    options: &SvgImportOptions,
) -> Result<DocumentDefinition> {
    let svg: IrSvgInitialContainerNode = serde_json::from_str(json)?;
    Ok(convert(&svg, ids, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grida_core::node::{Dimension, Stroke};
    use grida_core::paint::{FillRule, StrokeCap};
    use grida_core::{Paint, Rgba32F};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sequential() -> impl Fn() -> String + Send + Sync {
        let counter = AtomicUsize::new(0);
        move || format!("id-{}", counter.fetch_add(1, Ordering::Relaxed))
    }

    fn import(value: serde_json::Value) -> DocumentDefinition {
        let ids = sequential();
        convert_from_json(&value.to_string(), &ids, &SvgImportOptions::default()).unwrap()
    }

    fn only_child(doc: &DocumentDefinition) -> &Node {
        let root = doc.root().unwrap();
        assert_eq!(root.children().len(), 1);
        doc.get(&root.children()[0]).unwrap()
    }

    fn triangle() -> serde_json::Value {
        json!({
            "width": 100.0,
            "height": 50.0,
            "children": [{
                "kind": "path",
                "d": "M0 0 L10 0 L10 10 Z",
                "fill": { "paint": { "kind": "solid", "color": [0, 0, 0, 255] } }
            }]
        })
    }

    #[test]
    fn test_path_becomes_vector() {
        let doc = import(triangle());
        assert_eq!(doc.len(), 2);

        let Node::Vector(vector) = only_child(&doc) else {
            panic!("expected vector node");
        };
        assert!((vector.layout_target_width - 10.0).abs() < f64::EPSILON);
        assert!((vector.layout_target_height - 10.0).abs() < f64::EPSILON);
        assert_eq!(vector.fill, Some(Paint::solid(Rgba32F::BLACK)));
        assert!(vector.stroke.is_none());
        assert_eq!(vector.fill_rule, FillRule::NonZero);
        assert_eq!(vector.base.name, "svg_0_child");
    }

    #[test]
    fn test_root_container() {
        let doc = import(triangle());
        let Node::Container(root) = doc.root().unwrap() else {
            panic!("expected container root");
        };
        assert_eq!(root.base.name, "svg");
        assert_eq!(root.positioning.position, Position::Relative);
        assert_eq!(root.positioning.left, Some(0.0));
        assert_eq!(root.positioning.width, Some(Dimension::Px(100.0)));
        assert_eq!(root.positioning.height, Some(Dimension::Px(50.0)));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_path_positioned_at_bounding_box() {
        let doc = import(json!({
            "width": 100.0,
            "height": 100.0,
            "children": [{
                "kind": "path",
                "transform": [[1.0, 0.0, 5.0], [0.0, 1.0, 5.0]],
                "d": "M20 30 L40 30 L40 50"
            }]
        }));
        let Node::Vector(vector) = only_child(&doc) else {
            panic!("expected vector node");
        };
        assert_eq!(vector.positioning.left, Some(25.0));
        assert_eq!(vector.positioning.top, Some(35.0));
        assert_eq!(vector.vector_network.vertices[0], kurbo::Point::ZERO);
        assert!(vector.fill.is_none());
    }

    #[test]
    fn test_fill_opacity_on_node() {
        let doc = import(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [{
                "kind": "path",
                "d": "M0 0 L10 10",
                "fill": {
                    "paint": { "kind": "solid", "color": [255, 0, 0, 255] },
                    "fill_opacity": 0.5,
                    "fill_rule": "evenodd"
                }
            }]
        }));
        let Node::Vector(vector) = only_child(&doc) else {
            panic!("expected vector node");
        };
        assert!((vector.base.opacity - 0.5).abs() < f32::EPSILON);
        assert_eq!(vector.fill_rule, FillRule::EvenOdd);
        let color = vector.fill.as_ref().and_then(Paint::as_solid).unwrap();
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stroke_attributes() {
        let doc = import(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [{
                "kind": "path",
                "d": "M0 0 L10 10",
                "stroke": {
                    "paint": { "kind": "solid", "color": [0, 0, 255, 255] },
                    "stroke_width": 2.0,
                    "stroke_linecap": "round",
                    "stroke_dasharray": [4.0, 2.0],
                    "stroke_opacity": 0.5
                }
            }]
        }));
        let Node::Vector(vector) = only_child(&doc) else {
            panic!("expected vector node");
        };
        let Stroke {
            paint,
            width,
            cap,
            dash_array,
            ..
        } = vector.stroke.clone().unwrap();
        assert!((width - 2.0).abs() < f64::EPSILON);
        assert_eq!(cap, StrokeCap::Round);
        assert_eq!(dash_array, Some(vec![4.0, 2.0]));
        let color = paint.as_solid().unwrap();
        assert!((color.b - 1.0).abs() < f32::EPSILON);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_none_paint_is_skipped() {
        let doc = import(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [{
                "kind": "path",
                "d": "M0 0 L10 10",
                "fill": { "paint": { "kind": "none" } },
                "stroke": { "paint": { "kind": "none" } }
            }]
        }));
        let Node::Vector(vector) = only_child(&doc) else {
            panic!("expected vector node");
        };
        assert!(vector.fill.is_none());
        assert!(vector.stroke.is_none());
    }

    #[test]
    fn test_gradient_carries_opacity() {
        let ids = sequential();
        let gradient = SvgPaint::LinearGradient(SvgLinearGradientPaint {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 0.0,
            transform: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            stops: vec![
                SvgGradientStop {
                    offset: 0.0,
                    color: [255, 0, 0, 255],
                },
                SvgGradientStop {
                    offset: 1.0,
                    color: [0, 0, 255, 255],
                },
            ],
        });
        let paint = conversion::paint(&gradient, 0.25, &ids).unwrap();
        let Paint::LinearGradient(g) = &paint else {
            panic!("expected linear gradient");
        };
        assert!((g.opacity - 0.25).abs() < f32::EPSILON);
        assert_eq!(g.stops.len(), 2);
        assert!((g.stops[0].color.a - 1.0).abs() < f32::EPSILON);
        assert!(grida_core::transform::angle(&g.transform).abs() < 1e-9);
        assert_eq!(g.id, "id-0");
    }

    #[test]
    fn test_nested_groups_are_flattened() {
        let doc = import(json!({
            "width": 100.0,
            "height": 100.0,
            "children": [{
                "kind": "group",
                "transform": [[1.0, 0.0, 10.0], [0.0, 1.0, 20.0]],
                "opacity": 0.8,
                "blend_mode": "multiply",
                "children": [
                    { "kind": "path", "d": "M0 0 L1 1" },
                    { "kind": "group", "children": [{ "kind": "path", "d": "M0 0 L2 2" }] }
                ]
            }]
        }));
        assert_eq!(doc.len(), 5);
        assert!(doc.validate().is_ok());

        let Node::Group(group) = only_child(&doc) else {
            panic!("expected group node");
        };
        assert_eq!(group.positioning.left, Some(10.0));
        assert_eq!(group.positioning.top, Some(20.0));
        assert!((group.base.opacity - 0.8).abs() < f32::EPSILON);
        assert_eq!(group.children.len(), 2);

        let names: Vec<&str> = doc.children_of(&group.base.id).map(Node::name).collect();
        assert_eq!(names, vec!["svg_0_child_0_child", "svg_0_child_1_child"]);
    }

    #[test]
    fn test_text_image_and_unknown_omitted() {
        let doc = import(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [
                { "kind": "text", "text_content": "hello" },
                { "kind": "image" },
                { "kind": "foreign-object" },
                { "kind": "path", "d": "M0 0 L1 1" }
            ]
        }));
        assert_eq!(doc.len(), 2);
        assert_eq!(only_child(&doc).name(), "svg_3_child");
    }

    #[test]
    fn test_invalid_path_data_omitted() {
        let doc = import(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [{ "kind": "path", "d": "M0 0 L" }]
        }));
        assert_eq!(doc.len(), 1);
        assert!(doc.root().unwrap().children().is_empty());
    }

    #[test]
    fn test_max_depth() {
        let ids = sequential();
        let svg: IrSvgInitialContainerNode = serde_json::from_value(json!({
            "width": 10.0,
            "height": 10.0,
            "children": [{
                "kind": "group",
                "children": [{ "kind": "group", "children": [{ "kind": "path", "d": "M0 0 L1 1" }] }]
            }]
        }))
        .unwrap();
        let options = SvgImportOptions {
            max_depth: 2,
            ..Default::default()
        };
        let doc = convert(&svg, &ids, &options);
        // root, outer group, inner group; the path sits at depth 3
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_invalid_json() {
        let ids = sequential();
        let result = convert_from_json("{\"width\": 1}", &ids, &SvgImportOptions::default());
        assert!(matches!(result, Err(SvgImportError::Json(_))));
    }
}
