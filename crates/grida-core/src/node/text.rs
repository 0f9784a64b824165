//! Text node.

use super::{Border, NodeBase, Positioning};
use crate::paint::Paint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
}

impl TextAlignVertical {
    /// CSS `align-content` keyword.
    pub fn as_css_align_content(&self) -> &'static str {
        match self {
            TextAlignVertical::Top => "start",
            TextAlignVertical::Center => "center",
            TextAlignVertical::Bottom => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    Overline,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::Overline => "overline",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

fn default_font_weight() -> u16 {
    400
}

/// Typography of a text node. `None` means "not specified" and is distinct from
/// any explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<TextAlignVertical>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: f64,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Multiple of the font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text_align: None,
            text_align_vertical: None,
            text_decoration: None,
            font_family: None,
            font_size: 0.0,
            font_weight: default_font_weight(),
            letter_spacing: None,
            line_height: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(flatten)]
    pub positioning: Positioning,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(flatten)]
    pub style: TextStyle,
}

impl TextNode {
    pub fn new(base: NodeBase, text: impl Into<String>) -> Self {
        Self {
            base,
            positioning: Positioning::default(),
            text: text.into(),
            fill: None,
            border: None,
            style: TextStyle::default(),
        }
    }

    pub fn with_border(mut self, border: Option<Border>) -> Self {
        self.border = border;
        self
    }
}
