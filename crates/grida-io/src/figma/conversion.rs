//! Mapping of Figma nodes and paints onto Grida node prototypes.

use super::api_types::{
    FigmaBlendMode, FigmaColor, FigmaCounterAxisAlign, FigmaEffect, FigmaEffectType,
    FigmaHorizontalConstraint, FigmaLayoutMode, FigmaNode, FigmaNodeType, FigmaPaint,
    FigmaPaintType, FigmaPrimaryAxisAlign, FigmaTextAlignHorizontal, FigmaTextAlignVertical,
    FigmaTextAutoResize, FigmaTextDecoration, FigmaVerticalConstraint,
};
use super::{FigmaImportError, Result};
use grida_core::node::{
    Axis, Border, BorderStyle, BorderWidth, CrossAxisAlignment, EdgeInsets, FlexLayout, Layout,
    MainAxisAlignment, Padding, TextAlign, TextAlignVertical, TextDecoration, TextStyle,
};
use grida_core::paint::{GradientPaint, GradientStop};
use grida_core::transform;
use grida_core::{
    BlendMode, BoxShadow, ContainerNode, CornerRadius, Dimension, IdGenerator, Node, NodeBase,
    Paint, Positioning, RectangleNode, Rgba32F, TextNode,
};
use kurbo::{Affine, Point, Vec2};
use log::{debug, warn};

pub fn text_align(align: FigmaTextAlignHorizontal) -> Option<TextAlign> {
    match align {
        FigmaTextAlignHorizontal::Left => Some(TextAlign::Left),
        FigmaTextAlignHorizontal::Right => Some(TextAlign::Right),
        FigmaTextAlignHorizontal::Center => Some(TextAlign::Center),
        FigmaTextAlignHorizontal::Justified => None,
    }
}

pub fn text_align_vertical(align: FigmaTextAlignVertical) -> TextAlignVertical {
    match align {
        FigmaTextAlignVertical::Top => TextAlignVertical::Top,
        FigmaTextAlignVertical::Center => TextAlignVertical::Center,
        FigmaTextAlignVertical::Bottom => TextAlignVertical::Bottom,
    }
}

pub fn text_decoration(decoration: FigmaTextDecoration) -> Option<TextDecoration> {
    match decoration {
        FigmaTextDecoration::None => Some(TextDecoration::None),
        FigmaTextDecoration::Strikethrough => None,
        FigmaTextDecoration::Underline => Some(TextDecoration::Underline),
    }
}

/// Modes without a CSS equivalent map to the closest one.
pub fn blend_mode(mode: FigmaBlendMode) -> BlendMode {
    match mode {
        FigmaBlendMode::PassThrough => BlendMode::Normal,
        FigmaBlendMode::Normal => BlendMode::Normal,
        FigmaBlendMode::Darken => BlendMode::Darken,
        FigmaBlendMode::Multiply => BlendMode::Multiply,
        FigmaBlendMode::LinearBurn => BlendMode::Darken,
        FigmaBlendMode::ColorBurn => BlendMode::ColorBurn,
        FigmaBlendMode::Lighten => BlendMode::Lighten,
        FigmaBlendMode::Screen => BlendMode::Screen,
        FigmaBlendMode::LinearDodge => BlendMode::Lighten,
        FigmaBlendMode::ColorDodge => BlendMode::ColorDodge,
        FigmaBlendMode::Overlay => BlendMode::Overlay,
        FigmaBlendMode::SoftLight => BlendMode::SoftLight,
        FigmaBlendMode::HardLight => BlendMode::HardLight,
        FigmaBlendMode::Difference => BlendMode::Difference,
        FigmaBlendMode::Exclusion => BlendMode::Exclusion,
        FigmaBlendMode::Hue => BlendMode::Hue,
        FigmaBlendMode::Saturation => BlendMode::Saturation,
        FigmaBlendMode::Color => BlendMode::Color,
        FigmaBlendMode::Luminosity => BlendMode::Luminosity,
    }
}

pub fn main_axis_alignment(align: FigmaPrimaryAxisAlign) -> MainAxisAlignment {
    match align {
        FigmaPrimaryAxisAlign::Min => MainAxisAlignment::Start,
        FigmaPrimaryAxisAlign::Center => MainAxisAlignment::Center,
        FigmaPrimaryAxisAlign::Max => MainAxisAlignment::End,
        FigmaPrimaryAxisAlign::SpaceBetween => MainAxisAlignment::SpaceBetween,
    }
}

pub fn cross_axis_alignment(align: FigmaCounterAxisAlign) -> CrossAxisAlignment {
    match align {
        FigmaCounterAxisAlign::Min => CrossAxisAlignment::Start,
        FigmaCounterAxisAlign::Center => CrossAxisAlignment::Center,
        FigmaCounterAxisAlign::Max => CrossAxisAlignment::End,
        // no baseline alignment in the model
        FigmaCounterAxisAlign::Baseline => CrossAxisAlignment::Start,
    }
}

fn color(c: &FigmaColor) -> Rgba32F {
    Rgba32F::new(c.r, c.g, c.b, c.a)
}

/// First paint whose `visible` flag is not explicitly `false`.
pub fn first_visible(paints: &[FigmaPaint]) -> Option<&FigmaPaint> {
    paints.iter().find(|p| p.is_visible())
}

/// Convert a Figma paint. Paint types without an equivalent become the gray
/// fallback gradient.
pub fn paint(paint: &FigmaPaint, ids: &dyn IdGenerator) -> Option<Paint> {
    match paint.paint_type {
        FigmaPaintType::Solid => {
            let Some(c) = &paint.color else {
                warn!("SOLID paint without color, skipping");
                return None;
            };
            let c = color(c);
            Some(Paint::solid(match paint.opacity {
                Some(opacity) => c.multiply_alpha(opacity),
                None => c,
            }))
        }
        FigmaPaintType::GradientLinear => Some(Paint::LinearGradient(gradient(paint, ids))),
        FigmaPaintType::GradientRadial => Some(Paint::RadialGradient(gradient(paint, ids))),
        FigmaPaintType::GradientAngular
        | FigmaPaintType::GradientDiamond
        | FigmaPaintType::Image
        | FigmaPaintType::Unknown => {
            warn!(
                "{:?} paint has no equivalent, using fallback gradient",
                paint.paint_type
            );
            Some(Paint::fallback_gradient(ids))
        }
    }
}

fn gradient(paint: &FigmaPaint, ids: &dyn IdGenerator) -> GradientPaint {
    let stops = paint
        .gradient_stops
        .iter()
        .map(|stop| GradientStop::new(stop.position, color(&stop.color)))
        .collect();
    GradientPaint::new(stops, gradient_transform(paint), ids)
        .with_opacity(paint.opacity.unwrap_or(1.0))
}

fn gradient_transform(paint: &FigmaPaint) -> Affine {
    match paint.gradient_handle_positions.as_deref() {
        Some([a, b, c, ..]) => transform::from_control_points(
            Point::new(a.x, a.y),
            Point::new(b.x, b.y),
            Point::new(c.x, c.y),
        ),
        _ => Affine::IDENTITY,
    }
}

/// Border from the first visible stroke, when it is a solid color.
fn border(node: &FigmaNode) -> Option<Border> {
    let stroke = first_visible(&node.strokes)?;
    if stroke.paint_type != FigmaPaintType::Solid {
        return None;
    }
    let c = color(stroke.color.as_ref()?);
    let dashed = node.stroke_dashes.as_ref().is_some_and(|d| !d.is_empty());
    Some(Border {
        style: if dashed {
            BorderStyle::Dashed
        } else {
            BorderStyle::Solid
        },
        color: c.multiply_alpha(stroke.opacity.unwrap_or(1.0)),
        width: BorderWidth::Uniform(node.stroke_weight.unwrap_or(0.0)),
    })
}

/// Uniform `cornerRadius`, else per-corner radii, else zero.
fn corner_radius(node: &FigmaNode) -> CornerRadius {
    match (node.corner_radius, node.rectangle_corner_radii) {
        (Some(r), _) if r != 0.0 => CornerRadius::Uniform(r),
        (_, Some([top_left, top_right, bottom_right, bottom_left])) => CornerRadius::Rectangular {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        },
        _ => CornerRadius::Uniform(0.0),
    }
}

fn padding(node: &FigmaNode) -> Padding {
    Padding::from(EdgeInsets::new(
        node.padding_top.unwrap_or(0.0),
        node.padding_right.unwrap_or(0.0),
        node.padding_bottom.unwrap_or(0.0),
        node.padding_left.unwrap_or(0.0),
    ))
}

fn flex(node: &FigmaNode) -> FlexLayout {
    let (layout, direction) = match node.layout_mode {
        Some(FigmaLayoutMode::Horizontal) => (Layout::Flex, Axis::Horizontal),
        Some(FigmaLayoutMode::Vertical) => (Layout::Flex, Axis::Vertical),
        Some(FigmaLayoutMode::None) | Some(FigmaLayoutMode::Grid) | None => {
            (Layout::Flow, Axis::Horizontal)
        }
    };
    let main_axis_gap = node.item_spacing.unwrap_or(0.0);
    FlexLayout {
        layout,
        direction,
        main_axis_alignment: node
            .primary_axis_align_items
            .map(main_axis_alignment)
            .unwrap_or_default(),
        cross_axis_alignment: node
            .counter_axis_align_items
            .map(cross_axis_alignment)
            .unwrap_or_default(),
        main_axis_gap,
        cross_axis_gap: node.counter_axis_spacing.unwrap_or(main_axis_gap),
    }
}

/// Visible drop and inner shadows; blurs are not modelled.
pub fn shadows(effects: &[FigmaEffect]) -> Vec<BoxShadow> {
    effects
        .iter()
        .filter(|effect| effect.visible)
        .filter_map(|effect| {
            let inset = match effect.effect_type {
                FigmaEffectType::DropShadow => false,
                FigmaEffectType::InnerShadow => true,
                FigmaEffectType::LayerBlur
                | FigmaEffectType::BackgroundBlur
                | FigmaEffectType::Unknown => return None,
            };
            let offset = effect.offset.unwrap_or_default();
            Some(BoxShadow {
                color: effect.color.as_ref().map(color).unwrap_or(Rgba32F::BLACK),
                offset: Vec2::new(offset.x, offset.y),
                blur: effect.radius,
                spread: effect.spread.unwrap_or(0.0),
                inset,
            })
        })
        .collect()
}

fn base(node: &FigmaNode) -> NodeBase {
    NodeBase {
        id: node.id.clone(),
        name: node.name.clone(),
        active: node.visible.unwrap_or(true),
        locked: node.locked.unwrap_or(false),
        rotation: node.rotation.unwrap_or(0.0),
        opacity: node.opacity.unwrap_or(1.0),
        z_index: 0,
    }
}

/// `(left, top, width, height)` from `relativeTransform` and `size`.
fn geometry(node: &FigmaNode) -> (f64, f64, f64, f64) {
    let (left, top) = match node.relative_transform {
        Some(rows) => transform::translation(&transform::from_rows(rows)),
        None => {
            warn!("{} {:?} has no relativeTransform", node.node_type, node.id);
            (0.0, 0.0)
        }
    };
    let size = node.size.unwrap_or_else(|| {
        warn!("{} {:?} has no size", node.node_type, node.id);
        Default::default()
    });
    (left, top, size.x, size.y)
}

fn fill(node: &FigmaNode, ids: &dyn IdGenerator) -> Option<Paint> {
    first_visible(&node.fills).and_then(|p| paint(p, ids))
}

fn frame(node: &FigmaNode, ids: &dyn IdGenerator) -> ContainerNode {
    let (left, top, width, height) = geometry(node);
    ContainerNode {
        base: base(node),
        positioning: Positioning::absolute(left, top, width, height),
        fill: fill(node, ids),
        border: border(node),
        corner_radius: corner_radius(node),
        padding: Some(padding(node)),
        box_shadows: shadows(&node.effects),
        flex: flex(node),
        clips_content: node.clips_content.unwrap_or(false),
        blend_mode: node.blend_mode.map(blend_mode).unwrap_or_default(),
        children: Vec::new(),
    }
}

fn text(node: &FigmaNode, parent: Option<&FigmaNode>, ids: &dyn IdGenerator) -> TextNode {
    let (left, top, width, height) = geometry(node);
    let style = node.style.clone().unwrap_or_default();
    let horizontal = node.constraints.map(|c| c.horizontal);
    let vertical = node.constraints.map(|c| c.vertical);
    let parent_size = parent.and_then(|p| p.size);

    let positioning = Positioning {
        left: (horizontal != Some(FigmaHorizontalConstraint::Right)).then_some(left),
        right: if horizontal != Some(FigmaHorizontalConstraint::Left) {
            parent_size.map(|s| s.x - left - width)
        } else {
            None
        },
        top: (vertical != Some(FigmaVerticalConstraint::Bottom)).then_some(top),
        bottom: if vertical != Some(FigmaVerticalConstraint::Top) {
            parent_size.map(|s| s.y - top - height)
        } else {
            None
        },
        width: Some(match style.text_auto_resize {
            Some(FigmaTextAutoResize::WidthAndHeight) => Dimension::Auto,
            _ => Dimension::Px(width),
        }),
        height: Some(match style.text_auto_resize {
            Some(FigmaTextAutoResize::WidthAndHeight) | Some(FigmaTextAutoResize::Height) => {
                Dimension::Auto
            }
            _ => Dimension::Px(height),
        }),
        ..Default::default()
    };

    TextNode {
        base: base(node),
        positioning,
        text: node.characters.clone().unwrap_or_default(),
        fill: fill(node, ids),
        border: border(node),
        style: TextStyle {
            text_align: match style.text_align_horizontal {
                Some(align) => text_align(align),
                None => Some(TextAlign::Left),
            },
            text_align_vertical: Some(
                style
                    .text_align_vertical
                    .map(text_align_vertical)
                    .unwrap_or(TextAlignVertical::Top),
            ),
            text_decoration: match style.text_decoration {
                Some(decoration) => text_decoration(decoration),
                None => Some(TextDecoration::None),
            },
            font_family: style.font_family,
            font_size: style.font_size.unwrap_or(0.0),
            font_weight: style.font_weight.map(|w| w.round() as u16).unwrap_or(400),
            letter_spacing: style.letter_spacing,
            line_height: Some(
                style
                    .line_height_percent_font_size
                    .map(|p| p / 100.0)
                    .unwrap_or(1.2),
            ),
        },
    }
}

fn rectangle(node: &FigmaNode, ids: &dyn IdGenerator) -> RectangleNode {
    let (left, top, width, height) = geometry(node);
    RectangleNode {
        base: base(node),
        positioning: Positioning::absolute(left, top, width, height),
        fill: fill(node, ids),
        corner_radius: corner_radius(node),
        // shadows and blurs are not translated for rectangles
        effects: Vec::new(),
    }
}

/// Convert a single node, ignoring its children.
///
/// `Ok(None)` means the node is intentionally dropped (`GROUP`); types without a
/// mapping are errors rather than silent gaps.
pub fn node_without_children(
    node: &FigmaNode,
    parent: Option<&FigmaNode>,
    ids: &dyn IdGenerator,
) -> Result<Option<Node>> {
    match node.node_type {
        FigmaNodeType::Frame => Ok(Some(frame(node, ids).into())),
        FigmaNodeType::Text => Ok(Some(text(node, parent, ids).into())),
        FigmaNodeType::Rectangle => Ok(Some(rectangle(node, ids).into())),
        FigmaNodeType::Group => {
            debug!("dropping GROUP {:?}", node.id);
            Ok(None)
        }
        FigmaNodeType::Section
        | FigmaNodeType::BooleanOperation
        | FigmaNodeType::Ellipse
        | FigmaNodeType::Instance
        | FigmaNodeType::Line
        | FigmaNodeType::RegularPolygon
        | FigmaNodeType::Slice
        | FigmaNodeType::Star
        | FigmaNodeType::Vector
        | FigmaNodeType::Component
        | FigmaNodeType::ComponentSet => Err(FigmaImportError::UnsupportedNodeType(node.node_type)),
        FigmaNodeType::LinkUnfurl
        | FigmaNodeType::Embed
        | FigmaNodeType::Connector
        | FigmaNodeType::Sticky
        | FigmaNodeType::Table
        | FigmaNodeType::ShapeWithText
        | FigmaNodeType::TableCell
        | FigmaNodeType::WashiTape
        | FigmaNodeType::Widget
        | FigmaNodeType::Unknown => Err(FigmaImportError::UnknownNodeType(node.node_type)),
    }
}
