//! Figma REST API node types, as returned by the files and nodes endpoints.
//!
//! Only the fields the importer reads are modelled; everything else is ignored on
//! deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node `type` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaNodeType {
    Frame,
    Group,
    Section,
    Text,
    Rectangle,
    Ellipse,
    Line,
    RegularPolygon,
    Star,
    Vector,
    BooleanOperation,
    Instance,
    Slice,
    Component,
    ComponentSet,
    // FigJam
    LinkUnfurl,
    Embed,
    Connector,
    Sticky,
    Table,
    ShapeWithText,
    TableCell,
    WashiTape,
    Widget,
    /// Any type this importer does not know about, including `DOCUMENT` and `CANVAS`.
    #[serde(other)]
    Unknown,
}

impl FigmaNodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FigmaNodeType::Frame => "FRAME",
            FigmaNodeType::Group => "GROUP",
            FigmaNodeType::Section => "SECTION",
            FigmaNodeType::Text => "TEXT",
            FigmaNodeType::Rectangle => "RECTANGLE",
            FigmaNodeType::Ellipse => "ELLIPSE",
            FigmaNodeType::Line => "LINE",
            FigmaNodeType::RegularPolygon => "REGULAR_POLYGON",
            FigmaNodeType::Star => "STAR",
            FigmaNodeType::Vector => "VECTOR",
            FigmaNodeType::BooleanOperation => "BOOLEAN_OPERATION",
            FigmaNodeType::Instance => "INSTANCE",
            FigmaNodeType::Slice => "SLICE",
            FigmaNodeType::Component => "COMPONENT",
            FigmaNodeType::ComponentSet => "COMPONENT_SET",
            FigmaNodeType::LinkUnfurl => "LINK_UNFURL",
            FigmaNodeType::Embed => "EMBED",
            FigmaNodeType::Connector => "CONNECTOR",
            FigmaNodeType::Sticky => "STICKY",
            FigmaNodeType::Table => "TABLE",
            FigmaNodeType::ShapeWithText => "SHAPE_WITH_TEXT",
            FigmaNodeType::TableCell => "TABLE_CELL",
            FigmaNodeType::WashiTape => "WASHI_TAPE",
            FigmaNodeType::Widget => "WIDGET",
            FigmaNodeType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for FigmaNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D vector (`size`, handle positions, shadow offsets).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FigmaVector {
    pub x: f64,
    pub y: f64,
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigmaColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigmaColorStop {
    pub position: f32,
    pub color: FigmaColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaPaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaBlendMode {
    PassThrough,
    Normal,
    Darken,
    Multiply,
    LinearBurn,
    ColorBurn,
    Lighten,
    Screen,
    LinearDodge,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// Fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPaint {
    #[serde(rename = "type")]
    pub paint_type: FigmaPaintType,
    /// Absent means visible.
    pub visible: Option<bool>,
    /// Present only when it is not 1.
    pub opacity: Option<f32>,
    pub color: Option<FigmaColor>,
    pub blend_mode: Option<FigmaBlendMode>,
    /// Start, end and width handles in the node's normalized space.
    pub gradient_handle_positions: Option<Vec<FigmaVector>>,
    #[serde(default)]
    pub gradient_stops: Vec<FigmaColorStop>,
    pub image_ref: Option<String>,
}

impl FigmaPaint {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaEffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaEffect {
    #[serde(rename = "type")]
    pub effect_type: FigmaEffectType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f64,
    pub color: Option<FigmaColor>,
    pub offset: Option<FigmaVector>,
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaTextAlignHorizontal {
    Left,
    Right,
    Center,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaTextAlignVertical {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaTextDecoration {
    None,
    Strikethrough,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaTextAutoResize {
    None,
    Height,
    WidthAndHeight,
    Truncate,
}

/// Typography style from Figma.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub line_height_percent_font_size: Option<f64>,
    pub text_align_horizontal: Option<FigmaTextAlignHorizontal>,
    pub text_align_vertical: Option<FigmaTextAlignVertical>,
    pub text_decoration: Option<FigmaTextDecoration>,
    pub text_auto_resize: Option<FigmaTextAutoResize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaHorizontalConstraint {
    Left,
    Right,
    Center,
    LeftRight,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaVerticalConstraint {
    Top,
    Bottom,
    Center,
    TopBottom,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigmaLayoutConstraint {
    pub horizontal: FigmaHorizontalConstraint,
    pub vertical: FigmaVerticalConstraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaLayoutMode {
    None,
    Horizontal,
    Vertical,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaPrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FigmaCounterAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
}

/// Raw Figma node data from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: FigmaNodeType,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub rotation: Option<f64>,
    pub opacity: Option<f32>,
    pub blend_mode: Option<FigmaBlendMode>,
    #[serde(default)]
    pub children: Vec<FigmaNode>,

    /// Row-major 2×3 matrix relative to the parent.
    pub relative_transform: Option<[[f64; 3]; 2]>,
    pub size: Option<FigmaVector>,
    pub constraints: Option<FigmaLayoutConstraint>,

    #[serde(default)]
    pub fills: Vec<FigmaPaint>,
    #[serde(default)]
    pub strokes: Vec<FigmaPaint>,
    pub stroke_weight: Option<f64>,
    pub stroke_dashes: Option<Vec<f64>>,
    #[serde(default)]
    pub effects: Vec<FigmaEffect>,

    pub corner_radius: Option<f64>,
    /// `[top_left, top_right, bottom_right, bottom_left]`
    pub rectangle_corner_radii: Option<[f64; 4]>,

    pub clips_content: Option<bool>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub layout_mode: Option<FigmaLayoutMode>,
    pub primary_axis_align_items: Option<FigmaPrimaryAxisAlign>,
    pub counter_axis_align_items: Option<FigmaCounterAxisAlign>,
    pub item_spacing: Option<f64>,
    pub counter_axis_spacing: Option<f64>,

    pub characters: Option<String>,
    pub style: Option<FigmaTypeStyle>,
}

impl FigmaNode {
    /// Bare node of the given type; every optional field absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: FigmaNodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: None,
            locked: None,
            rotation: None,
            opacity: None,
            blend_mode: None,
            children: Vec::new(),
            relative_transform: None,
            size: None,
            constraints: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            stroke_dashes: None,
            effects: Vec::new(),
            corner_radius: None,
            rectangle_corner_radii: None,
            clips_content: None,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            layout_mode: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            item_spacing: None,
            counter_axis_spacing: None,
            characters: None,
            style: None,
        }
    }
}
