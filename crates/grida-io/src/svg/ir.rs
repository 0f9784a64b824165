//! Intermediate representation of a resolved SVG document.
//!
//! Produced by the native SVG resolver: paint references are resolved, colors are
//! reported as `[r, g, b, a]` byte chunks and transforms as row-major 2×3 matrices.

use grida_core::paint::{BlendMode, FillRule, StrokeCap, StrokeJoin};
use grida_core::transform::TransformRows;
use serde::{Deserialize, Serialize};

fn identity() -> TransformRows {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
}

fn one() -> f32 {
    1.0
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_miter_limit() -> f64 {
    4.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgGradientStop {
    pub offset: f32,
    pub color: [u8; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgLinearGradientPaint {
    #[serde(default)]
    pub x1: f64,
    #[serde(default)]
    pub y1: f64,
    #[serde(default = "default_x2")]
    pub x2: f64,
    #[serde(default)]
    pub y2: f64,
    #[serde(default = "identity")]
    pub transform: TransformRows,
    #[serde(default)]
    pub stops: Vec<SvgGradientStop>,
}

fn default_x2() -> f64 {
    1.0
}

fn default_center() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgRadialGradientPaint {
    #[serde(default = "default_center")]
    pub cx: f64,
    #[serde(default = "default_center")]
    pub cy: f64,
    #[serde(default = "default_center")]
    pub r: f64,
    #[serde(default = "identity")]
    pub transform: TransformRows,
    #[serde(default)]
    pub stops: Vec<SvgGradientStop>,
}

/// Paint descriptor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SvgPaint {
    #[serde(rename = "solid")]
    Solid { color: [u8; 4] },
    #[serde(rename = "linear-gradient")]
    LinearGradient(SvgLinearGradientPaint),
    #[serde(rename = "radial-gradient")]
    RadialGradient(SvgRadialGradientPaint),
    #[serde(rename = "none")]
    None,
}

/// `fill`, `fill-opacity` and `fill-rule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgFillAttributes {
    pub paint: SvgPaint,
    #[serde(default = "one")]
    pub fill_opacity: f32,
    #[serde(default)]
    pub fill_rule: FillRule,
}

/// `stroke` and the `stroke-*` attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgStrokeAttributes {
    pub paint: SvgPaint,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub stroke_linecap: StrokeCap,
    #[serde(default)]
    pub stroke_linejoin: StrokeJoin,
    #[serde(default = "default_miter_limit")]
    pub stroke_miterlimit: f64,
    #[serde(default)]
    pub stroke_dasharray: Option<Vec<f64>>,
    #[serde(default = "one")]
    pub stroke_opacity: f32,
}

/// `<svg>` root. Nested `<svg>` elements arrive as groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrSvgInitialContainerNode {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub children: Vec<IrSvgChildNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IrSvgChildNode {
    #[serde(rename = "group")]
    Group(IrSvgGroupNode),
    #[serde(rename = "text")]
    Text(IrSvgTextNode),
    #[serde(rename = "path")]
    Path(IrSvgPathNode),
    #[serde(rename = "image")]
    Image(IrSvgImageNode),
    /// Any kind the resolver may add later.
    #[serde(other)]
    Unknown,
}

/// `<g>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrSvgGroupNode {
    #[serde(default = "identity")]
    pub transform: TransformRows,
    #[serde(default = "one")]
    pub opacity: f32,
    #[serde(default)]
    pub blend_mode: BlendMode,
    #[serde(default)]
    pub children: Vec<IrSvgChildNode>,
}

/// `<text>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrSvgTextNode {
    #[serde(default = "identity")]
    pub transform: TransformRows,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub fill: Option<SvgFillAttributes>,
    #[serde(default)]
    pub stroke: Option<SvgStrokeAttributes>,
}

/// `<path>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrSvgPathNode {
    #[serde(default = "identity")]
    pub transform: TransformRows,
    #[serde(default)]
    pub fill: Option<SvgFillAttributes>,
    #[serde(default)]
    pub stroke: Option<SvgStrokeAttributes>,
    pub d: String,
}

/// `<image>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IrSvgImageNode {
    #[serde(default = "identity")]
    pub transform: TransformRows,
}
