//! Paints, blend modes and shadow effects.

use crate::color::{Rgba32F, Rgba8888};
use crate::id::IdGenerator;
use kurbo::{Affine, Vec2};
use serde::{Deserialize, Serialize};

/// A single color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f32,
    pub color: Rgba32F,
}

impl GradientStop {
    pub fn new(offset: f32, color: Rgba32F) -> Self {
        Self { offset, color }
    }
}

/// Shared payload of linear and radial gradients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientPaint {
    /// Fresh per construction; gradients are never shared between nodes.
    pub id: String,
    /// Ordered stops. Offsets are expected to be non-decreasing, which is not enforced.
    pub stops: Vec<GradientStop>,
    /// Maps the unit gradient space into the node box.
    #[serde(default)]
    pub transform: Affine,
    /// Paint-level opacity, applied on top of every stop's own alpha.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_opacity() -> f32 {
    1.0
}

impl GradientPaint {
    pub fn new(stops: Vec<GradientStop>, transform: Affine, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            stops,
            transform,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Stops with the paint opacity folded into their alpha.
    pub fn effective_stops(&self) -> impl Iterator<Item = GradientStop> + '_ {
        self.stops
            .iter()
            .map(|stop| GradientStop::new(stop.offset, stop.color.multiply_alpha(self.opacity)))
    }
}

/// How a shape or text is colored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Rgba32F },
    LinearGradient(GradientPaint),
    RadialGradient(GradientPaint),
}

impl Paint {
    /// Light gray (`#d9d9d9`).
    pub const FALLBACK_START: Rgba8888 = Rgba8888::new(217, 217, 217, 255);
    /// Mid gray (`#737373`).
    pub const FALLBACK_END: Rgba8888 = Rgba8888::new(115, 115, 115, 255);

    pub fn solid(color: Rgba32F) -> Self {
        Paint::Solid { color }
    }

    pub fn linear_gradient(stops: Vec<GradientStop>, transform: Affine, ids: &dyn IdGenerator) -> Self {
        Paint::LinearGradient(GradientPaint::new(stops, transform, ids))
    }

    pub fn radial_gradient(stops: Vec<GradientStop>, transform: Affine, ids: &dyn IdGenerator) -> Self {
        Paint::RadialGradient(GradientPaint::new(stops, transform, ids))
    }

    /// Two-stop gray linear gradient standing in for paints the model cannot express.
    pub fn fallback_gradient(ids: &dyn IdGenerator) -> Self {
        Paint::linear_gradient(
            vec![
                GradientStop::new(0.0, Self::FALLBACK_START.to_rgba32f()),
                GradientStop::new(1.0, Self::FALLBACK_END.to_rgba32f()),
            ],
            Affine::IDENTITY,
            ids,
        )
    }

    /// Discriminant name as used in serialized documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Paint::Solid { .. } => "solid",
            Paint::LinearGradient(_) => "linear_gradient",
            Paint::RadialGradient(_) => "radial_gradient",
        }
    }

    pub fn as_solid(&self) -> Option<Rgba32F> {
        match self {
            Paint::Solid { color } => Some(*color),
            _ => None,
        }
    }

    pub fn as_gradient(&self) -> Option<&GradientPaint> {
        match self {
            Paint::LinearGradient(g) | Paint::RadialGradient(g) => Some(g),
            Paint::Solid { .. } => None,
        }
    }
}

/// Layer and paint blend modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// CSS `mix-blend-mode` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

/// Path winding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    /// SVG `fill-rule` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

impl From<FillRule> for peniko::Fill {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => peniko::Fill::NonZero,
            FillRule::EvenOdd => peniko::Fill::EvenOdd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<StrokeCap> for kurbo::Cap {
    fn from(cap: StrokeCap) -> Self {
        match cap {
            StrokeCap::Butt => kurbo::Cap::Butt,
            StrokeCap::Round => kurbo::Cap::Round,
            StrokeCap::Square => kurbo::Cap::Square,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl From<StrokeJoin> for kurbo::Join {
    fn from(join: StrokeJoin) -> Self {
        match join {
            StrokeJoin::Miter => kurbo::Join::Miter,
            StrokeJoin::Round => kurbo::Join::Round,
            StrokeJoin::Bevel => kurbo::Join::Bevel,
        }
    }
}

/// Drop or inner shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub color: Rgba32F,
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default)]
    pub inset: bool,
}

impl BoxShadow {
    pub fn new(color: Rgba32F) -> Self {
        Self {
            color,
            offset: Vec2::ZERO,
            blur: 0.0,
            spread: 0.0,
            inset: false,
        }
    }
}
