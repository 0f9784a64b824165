//! Mapping of resolved SVG IR nodes onto Grida node prototypes.

use super::ir::{
    IrSvgChildNode, IrSvgGroupNode, IrSvgPathNode, SvgFillAttributes, SvgGradientStop,
    SvgLinearGradientPaint, SvgPaint, SvgRadialGradientPaint, SvgStrokeAttributes,
};
use super::SvgImportOptions;
use grida_core::node::Stroke;
use grida_core::paint::{GradientPaint, GradientStop};
use grida_core::transform;
use grida_core::{
    DocumentDefinition, GroupNode, IdGenerator, Node, NodeBase, NodeId, Paint, Positioning,
    Rgba32F, Rgba8888, VectorNetwork, VectorNode,
};
use kurbo::{Affine, Point, Vec2};
use log::{debug, warn};

fn color(chunk: [u8; 4]) -> Rgba32F {
    Rgba8888::from_chunk(chunk).to_rgba32f()
}

fn stops(stops: &[SvgGradientStop]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| GradientStop::new(stop.offset, color(stop.color)))
        .collect()
}

/// Unit gradient space onto the `(x1, y1) -> (x2, y2)` axis.
fn linear_transform(gradient: &SvgLinearGradientPaint) -> Affine {
    let start = Point::new(gradient.x1, gradient.y1);
    let end = Point::new(gradient.x2, gradient.y2);
    let axis = end - start;
    let normal = start + Vec2::new(-axis.y, axis.x);
    transform::from_rows(gradient.transform) * transform::from_control_points(start, end, normal)
}

/// Unit circle onto the `(cx, cy, r)` circle.
fn radial_transform(gradient: &SvgRadialGradientPaint) -> Affine {
    transform::from_rows(gradient.transform)
        * Affine::translate((gradient.cx, gradient.cy))
        * Affine::scale(gradient.r)
}

/// Convert a paint descriptor. Solid alpha is multiplied by `opacity`; gradients
/// carry it as their paint opacity. `none` yields no paint.
pub fn paint(paint: &SvgPaint, opacity: f32, ids: &dyn IdGenerator) -> Option<Paint> {
    match paint {
        SvgPaint::Solid { color: chunk } => {
            Some(Paint::solid(color(*chunk).multiply_alpha(opacity)))
        }
        SvgPaint::LinearGradient(gradient) => Some(Paint::LinearGradient(
            GradientPaint::new(stops(&gradient.stops), linear_transform(gradient), ids)
                .with_opacity(opacity),
        )),
        SvgPaint::RadialGradient(gradient) => Some(Paint::RadialGradient(
            GradientPaint::new(stops(&gradient.stops), radial_transform(gradient), ids)
                .with_opacity(opacity),
        )),
        SvgPaint::None => None,
    }
}

/// Fill paint. `fill-opacity` becomes the node opacity instead, so the paint
/// itself is built at full opacity.
fn fill(attrs: &SvgFillAttributes, ids: &dyn IdGenerator) -> Option<Paint> {
    paint(&attrs.paint, 1.0, ids)
}

fn stroke(attrs: &SvgStrokeAttributes, ids: &dyn IdGenerator) -> Option<Stroke> {
    let paint = paint(&attrs.paint, attrs.stroke_opacity, ids)?;
    Some(Stroke {
        paint,
        width: attrs.stroke_width,
        cap: attrs.stroke_linecap,
        join: attrs.stroke_linejoin,
        miter_limit: attrs.stroke_miterlimit,
        dash_array: attrs.stroke_dasharray.clone().filter(|d| !d.is_empty()),
    })
}

/// Vector node for a `<path>`.
///
/// The path transform is baked into the geometry, then the network is moved so
/// its bounding box starts at the origin; the box offset becomes the node
/// position. `None` when `d` does not parse.
pub fn path(node: &IrSvgPathNode, name: &str, ids: &dyn IdGenerator) -> Option<VectorNode> {
    let mut network = match VectorNetwork::from_svg_path(&node.d) {
        Ok(network) => network,
        Err(err) => {
            warn!("skipping path {:?}: {}", name, err);
            return None;
        }
    };
    network.transform(transform::from_rows(node.transform));
    let bbox = network.bounding_box();
    network.transform(Affine::translate((-bbox.x0, -bbox.y0)));

    let mut vector = VectorNode::new(NodeBase::new(ids.next_id(), name), network);
    vector.positioning = Positioning::absolute(bbox.x0, bbox.y0, bbox.width(), bbox.height());
    if let Some(attrs) = &node.fill {
        vector.base.opacity = attrs.fill_opacity;
        vector.fill_rule = attrs.fill_rule;
        vector.fill = fill(attrs, ids);
    }
    vector.stroke = node.stroke.as_ref().and_then(|attrs| stroke(attrs, ids));
    Some(vector)
}

/// Name of the `index`th child of `parent`.
pub fn child_name(parent: &str, index: usize) -> String {
    format!("{}_{}_child", parent, index)
}

/// Recursive walk that flattens the IR tree into a [`DocumentDefinition`].
pub(super) struct Converter<'a> {
    pub ids: &'a dyn IdGenerator,
    pub options: &'a SvgImportOptions,
    pub document: DocumentDefinition,
}

impl Converter<'_> {
    /// Convert `children` and return the ids of those that produced a node.
    pub fn children(
        &mut self,
        children: &[IrSvgChildNode],
        parent: &str,
        depth: usize,
    ) -> Vec<NodeId> {
        children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| self.child(child, &child_name(parent, i), depth))
            .collect()
    }

    fn child(&mut self, node: &IrSvgChildNode, name: &str, depth: usize) -> Option<NodeId> {
        if depth > self.options.max_depth {
            warn!("{:?} exceeds max depth {}, omitted", name, self.options.max_depth);
            return None;
        }
        match node {
            IrSvgChildNode::Group(group) => Some(self.group(group, name, depth)),
            IrSvgChildNode::Path(p) => {
                let vector = path(p, name, self.ids)?;
                let id = vector.base.id.clone();
                self.document.insert(vector.into());
                Some(id)
            }
            IrSvgChildNode::Text(_) => {
                debug!("text {:?} not converted", name);
                None
            }
            IrSvgChildNode::Image(_) => {
                debug!("image {:?} not converted", name);
                None
            }
            IrSvgChildNode::Unknown => {
                debug!("unknown node {:?} not converted", name);
                None
            }
        }
    }

    fn group(&mut self, group: &IrSvgGroupNode, name: &str, depth: usize) -> NodeId {
        let (left, top) = transform::translation(&transform::from_rows(group.transform));
        let mut node = GroupNode::new(NodeBase::new(self.ids.next_id(), name));
        node.base.opacity = group.opacity;
        node.blend_mode = group.blend_mode;
        node.positioning.left = Some(left);
        node.positioning.top = Some(top);
        let id = node.base.id.clone();

        // parent precedes its children in document order
        self.document.insert(node.into());
        let children = self.children(&group.children, name, depth + 1);
        if let Some(slot) = self.document.get_mut(&id).and_then(Node::children_mut) {
            *slot = children;
        }
        id
    }
}
