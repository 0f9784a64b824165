//! CSS projection.
//!
//! Maps the style facets of a node onto a flat set of inline style properties. All
//! functions here are pure; colors always go through
//! [`Rgba32F::to_css_rgba`](crate::color::Rgba32F::to_css_rgba).

use crate::node::{
    Axis, Border, BorderWidth, CornerRadius, Dimension, FlexLayout, Layout, Padding, Position,
    TextStyle,
};
use crate::paint::{BoxShadow, GradientPaint, Paint};
use crate::transform;
use serde::{Deserialize, Serialize};

/// Which CSS property receives the rendered fill paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillTarget {
    /// Text color.
    Color,
    /// Box background.
    #[default]
    Background,
    /// SVG `fill`.
    Fill,
    /// Fill is not rendered.
    None,
}

/// Projection options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    pub fill: FillTarget,
    /// Compute text properties (alignment, decoration, font, spacing).
    pub has_text_style: bool,
}

/// `object-fit` of replaced content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxFit {
    Contain,
    Cover,
    Fill,
    None,
}

impl BoxFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            BoxFit::Contain => "contain",
            BoxFit::Cover => "cover",
            BoxFit::Fill => "fill",
            BoxFit::None => "none",
        }
    }
}

/// Optional style facets of a node. Absent facets produce no output properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    pub position: Option<Position>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub z_index: Option<i32>,
    pub opacity: Option<f32>,
    /// Degrees.
    pub rotation: Option<f64>,
    pub fill: Option<Paint>,
    pub border: Option<Border>,
    pub cursor: Option<String>,
    pub fit: Option<BoxFit>,
    pub corner_radius: Option<CornerRadius>,
    pub padding: Option<Padding>,
    pub box_shadows: Vec<BoxShadow>,
    pub flex: Option<FlexLayout>,
    pub text_style: Option<TextStyle>,
}

/// Inline style properties, each already rendered to its CSS value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
}

impl StyleProperties {
    /// Present properties as `(css-name, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("position", &self.position),
            ("width", &self.width),
            ("height", &self.height),
            ("top", &self.top),
            ("left", &self.left),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("z-index", &self.z_index),
            ("opacity", &self.opacity),
            ("object-fit", &self.object_fit),
            ("rotate", &self.rotate),
            ("border-radius", &self.border_radius),
            ("padding", &self.padding),
            ("box-shadow", &self.box_shadow),
            ("cursor", &self.cursor),
            ("border-style", &self.border_style),
            ("border-color", &self.border_color),
            ("border-width", &self.border_width),
            ("display", &self.display),
            ("flex-direction", &self.flex_direction),
            ("justify-content", &self.justify_content),
            ("align-items", &self.align_items),
            ("gap", &self.gap),
            ("color", &self.color),
            ("background", &self.background),
            ("fill", &self.fill),
            ("text-align", &self.text_align),
            ("align-content", &self.align_content),
            ("text-decoration", &self.text_decoration),
            ("font-family", &self.font_family),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("letter-spacing", &self.letter_spacing),
            ("line-height", &self.line_height),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// `name: value; name: value` for a `style` attribute.
    pub fn to_inline_style(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Format a number for CSS: at most four decimals, no trailing zeros, no `-0`.
fn num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn px(value: f64) -> String {
    format!("{}px", num(value))
}

/// Project style attributes into inline style properties.
pub fn to_style(attrs: &StyleAttributes, config: &StyleConfig) -> StyleProperties {
    let mut result = StyleProperties {
        position: attrs.position.map(|p| p.as_css().to_string()),
        width: attrs.width.as_ref().map(to_dimension),
        height: attrs.height.as_ref().map(to_dimension),
        top: attrs.top.map(px),
        left: attrs.left.map(px),
        right: attrs.right.map(px),
        bottom: attrs.bottom.map(px),
        z_index: attrs.z_index.map(|z| z.to_string()),
        opacity: attrs.opacity.map(|o| num(o as f64)),
        object_fit: attrs.fit.map(|f| f.as_css().to_string()),
        rotate: attrs
            .rotation
            .filter(|r| *r != 0.0)
            .map(|r| format!("{}deg", num(r))),
        border_radius: attrs.corner_radius.as_ref().map(corner_radius_to_css),
        padding: attrs.padding.as_ref().map(padding_to_css),
        // CSS fallback of the shadow list: first item only
        box_shadow: attrs.box_shadows.first().map(box_shadow_to_css),
        cursor: attrs.cursor.clone(),
        ..Default::default()
    };

    if let Some(border) = &attrs.border {
        let css = border_to_css(border);
        result.border_style = Some(css.style);
        result.border_color = Some(css.color);
        result.border_width = Some(css.width);
    }

    if let Some(flex) = attrs.flex.filter(|f| f.layout == Layout::Flex) {
        result.display = Some("flex".to_string());
        result.flex_direction = Some(axis_to_flex_direction(flex.direction).to_string());
        result.justify_content = Some(flex.main_axis_alignment.as_css().to_string());
        result.align_items = Some(flex.cross_axis_alignment.as_css().to_string());
        result.gap = Some(match flex.direction {
            Axis::Horizontal => format!("{} {}", px(flex.main_axis_gap), px(flex.cross_axis_gap)),
            Axis::Vertical => format!("{} {}", px(flex.cross_axis_gap), px(flex.main_axis_gap)),
        });
    }

    let fill = attrs.fill.as_ref().map(to_fill_string);
    match config.fill {
        FillTarget::Color => result.color = fill,
        FillTarget::Background => result.background = fill,
        FillTarget::Fill => result.fill = fill,
        FillTarget::None => {}
    }

    if config.has_text_style {
        let default_style = TextStyle::default();
        let style = attrs.text_style.as_ref().unwrap_or(&default_style);
        let text = text_style_to_css(style, attrs.fill.as_ref());
        result.text_align = text.text_align;
        result.align_content = text.align_content;
        result.text_decoration = text.text_decoration;
        result.font_family = text.font_family;
        result.font_size = text.font_size;
        result.font_weight = text.font_weight;
        result.letter_spacing = text.letter_spacing;
        result.line_height = text.line_height;
        result.color = text.color;
    }

    result
}

/// Text properties only; absent alignment defaults to `left`/`top` and absent line
/// height to `normal`.
pub fn text_style_to_css(style: &TextStyle, fill: Option<&Paint>) -> StyleProperties {
    let text_align = style.text_align.map(|a| a.as_css()).unwrap_or("left");
    let align_content = style
        .text_align_vertical
        .map(|v| v.as_css_align_content())
        .unwrap_or("start");

    StyleProperties {
        text_align: Some(text_align.to_string()),
        align_content: Some(align_content.to_string()),
        text_decoration: style.text_decoration.map(|d| d.as_css().to_string()),
        font_family: style.font_family.clone(),
        font_size: Some(px(style.font_size)),
        font_weight: Some(style.font_weight.to_string()),
        letter_spacing: style.letter_spacing.map(px),
        line_height: Some(style.line_height.map(num).unwrap_or_else(|| "normal".to_string())),
        color: fill.map(to_fill_string),
        ..Default::default()
    }
}

/// Numbers are pixels; `auto` passes through.
pub fn to_dimension(value: &Dimension) -> String {
    match value {
        Dimension::Px(v) => px(*v),
        Dimension::Length { value, unit } => format!("{}{}", num(*value), unit),
        Dimension::Percentage(v) => format!("{}%", num(*v)),
        Dimension::Auto => "auto".to_string(),
    }
}

pub fn to_fill_string(paint: &Paint) -> String {
    match paint {
        Paint::Solid { color } => color.to_css_rgba(),
        Paint::LinearGradient(gradient) => to_linear_gradient_string(gradient),
        Paint::RadialGradient(gradient) => to_radial_gradient_string(gradient),
    }
}

fn gradient_stops_to_css(gradient: &GradientPaint) -> String {
    gradient
        .effective_stops()
        .map(|stop| {
            format!(
                "{} {}%",
                stop.color.to_css_rgba(),
                num(stop.offset as f64 * 100.0)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `linear-gradient(<deg>deg, <stops>)`.
///
/// CSS has no gradient matrix: only the rotation of the transform survives.
pub fn to_linear_gradient_string(gradient: &GradientPaint) -> String {
    let deg = transform::angle(&gradient.transform);
    format!(
        "linear-gradient({}deg, {})",
        num(deg),
        gradient_stops_to_css(gradient)
    )
}

/// `radial-gradient(<stops>)`; position and shape are not rendered.
pub fn to_radial_gradient_string(gradient: &GradientPaint) -> String {
    format!("radial-gradient({})", gradient_stops_to_css(gradient))
}

/// Uniform radius is a single value, otherwise `TL TR BR BL`.
pub fn corner_radius_to_css(radius: &CornerRadius) -> String {
    match radius {
        CornerRadius::Uniform(r) => px(*r),
        CornerRadius::Rectangular { .. } => radius
            .corners()
            .iter()
            .map(|r| px(*r))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Uniform padding is a single value, otherwise `T R B L`.
pub fn padding_to_css(padding: &Padding) -> String {
    match padding {
        Padding::Uniform(v) => px(*v),
        Padding::Sides(s) => format!(
            "{} {} {} {}",
            px(s.top),
            px(s.right),
            px(s.bottom),
            px(s.left)
        ),
    }
}

/// `[inset ]X Y BLUR SPREAD COLOR`.
pub fn box_shadow_to_css(shadow: &BoxShadow) -> String {
    format!(
        "{}{} {} {} {} {}",
        if shadow.inset { "inset " } else { "" },
        px(shadow.offset.x),
        px(shadow.offset.y),
        px(shadow.blur),
        px(shadow.spread),
        shadow.color.to_css_rgba()
    )
}

/// Rendered `border-style`, `border-color` and `border-width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderCss {
    pub style: String,
    pub color: String,
    pub width: String,
}

pub fn border_to_css(border: &Border) -> BorderCss {
    let width = match border.width {
        BorderWidth::Uniform(w) => px(w),
        BorderWidth::Sides(s) => format!(
            "{} {} {} {}",
            px(s.top),
            px(s.right),
            px(s.bottom),
            px(s.left)
        ),
    };
    BorderCss {
        style: border.style.as_css().to_string(),
        color: border.color.to_css_rgba(),
        width,
    }
}

pub fn axis_to_flex_direction(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "row",
        Axis::Vertical => "column",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba32F;
    use crate::id::SequentialIds;
    use crate::node::{BorderStyle, EdgeInsets, MainAxisAlignment, TextAlign, TextAlignVertical};
    use crate::paint::GradientStop;
    use kurbo::{Affine, Vec2};
    use std::f64::consts::FRAC_PI_2;

    fn red_blue(transform: Affine) -> GradientPaint {
        let ids = SequentialIds::new("g");
        GradientPaint::new(
            vec![
                GradientStop::new(0.0, Rgba32F::new(1.0, 0.0, 0.0, 1.0)),
                GradientStop::new(1.0, Rgba32F::new(0.0, 0.0, 1.0, 1.0)),
            ],
            transform,
            &ids,
        )
    }

    #[test]
    fn test_uniform_padding() {
        let attrs = StyleAttributes {
            padding: Some(Padding::Uniform(8.0)),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.padding.as_deref(), Some("8px"));
    }

    #[test]
    fn test_per_side_padding_order() {
        let attrs = StyleAttributes {
            padding: Some(Padding::Sides(EdgeInsets::new(1.0, 2.0, 3.0, 4.0))),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.padding.as_deref(), Some("1px 2px 3px 4px"));
    }

    #[test]
    fn test_gap_axis_order_follows_direction() {
        let mut flex = FlexLayout {
            layout: Layout::Flex,
            direction: Axis::Horizontal,
            main_axis_gap: 10.0,
            cross_axis_gap: 20.0,
            ..Default::default()
        };
        let attrs = StyleAttributes {
            flex: Some(flex),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.display.as_deref(), Some("flex"));
        assert_eq!(style.flex_direction.as_deref(), Some("row"));
        assert_eq!(style.gap.as_deref(), Some("10px 20px"));

        flex.direction = Axis::Vertical;
        let attrs = StyleAttributes {
            flex: Some(flex),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.flex_direction.as_deref(), Some("column"));
        assert_eq!(style.gap.as_deref(), Some("20px 10px"));
    }

    #[test]
    fn test_flow_layout_emits_no_flex() {
        let attrs = StyleAttributes {
            flex: Some(FlexLayout::default()),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert!(style.display.is_none());
        assert!(style.gap.is_none());
    }

    #[test]
    fn test_flex_alignment() {
        let attrs = StyleAttributes {
            flex: Some(FlexLayout {
                layout: Layout::Flex,
                main_axis_alignment: MainAxisAlignment::SpaceBetween,
                ..Default::default()
            }),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.justify_content.as_deref(), Some("space-between"));
        assert_eq!(style.align_items.as_deref(), Some("start"));
    }

    #[test]
    fn test_corner_radius_order() {
        let radius = CornerRadius::Rectangular {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 3.0,
            bottom_left: 4.0,
        };
        assert_eq!(corner_radius_to_css(&radius), "1px 2px 3px 4px");
        assert_eq!(corner_radius_to_css(&CornerRadius::Uniform(6.0)), "6px");
    }

    #[test]
    fn test_rotation_omitted_when_zero() {
        let attrs = StyleAttributes {
            rotation: Some(0.0),
            ..Default::default()
        };
        assert!(to_style(&attrs, &StyleConfig::default()).rotate.is_none());

        let attrs = StyleAttributes {
            rotation: Some(45.0),
            ..Default::default()
        };
        assert_eq!(
            to_style(&attrs, &StyleConfig::default()).rotate.as_deref(),
            Some("45deg")
        );
    }

    #[test]
    fn test_linear_gradient_identity_angle() {
        let gradient = red_blue(Affine::IDENTITY);
        assert_eq!(
            to_linear_gradient_string(&gradient),
            "linear-gradient(0deg, rgba(255, 0, 0, 1) 0%, rgba(0, 0, 255, 1) 100%)"
        );
    }

    #[test]
    fn test_linear_gradient_rotation_changes_only_angle() {
        let identity = to_linear_gradient_string(&red_blue(Affine::IDENTITY));
        let rotated = to_linear_gradient_string(&red_blue(Affine::rotate(FRAC_PI_2)));
        assert!(rotated.starts_with("linear-gradient(90deg, "));
        assert_eq!(
            identity.trim_start_matches("linear-gradient(0deg, "),
            rotated.trim_start_matches("linear-gradient(90deg, ")
        );
    }

    #[test]
    fn test_radial_gradient() {
        let gradient = red_blue(Affine::scale(3.0));
        assert_eq!(
            to_radial_gradient_string(&gradient),
            "radial-gradient(rgba(255, 0, 0, 1) 0%, rgba(0, 0, 255, 1) 100%)"
        );
    }

    #[test]
    fn test_empty_stops_render_empty_list() {
        let ids = SequentialIds::new("g");
        let gradient = GradientPaint::new(Vec::new(), Affine::IDENTITY, &ids);
        assert_eq!(to_linear_gradient_string(&gradient), "linear-gradient(0deg, )");
        assert_eq!(to_radial_gradient_string(&gradient), "radial-gradient()");
    }

    #[test]
    fn test_gradient_opacity_applies_to_stops() {
        let gradient = red_blue(Affine::IDENTITY).with_opacity(0.5);
        assert_eq!(
            to_radial_gradient_string(&gradient),
            "radial-gradient(rgba(255, 0, 0, 0.5) 0%, rgba(0, 0, 255, 0.5) 100%)"
        );
    }

    #[test]
    fn test_box_shadow() {
        let mut shadow = BoxShadow::new(Rgba32F::new(0.0, 0.0, 0.0, 0.25));
        assert_eq!(box_shadow_to_css(&shadow), "0px 0px 0px 0px rgba(0, 0, 0, 0.25)");

        shadow.offset = Vec2::new(2.0, 4.0);
        shadow.blur = 8.0;
        shadow.inset = true;
        assert_eq!(
            box_shadow_to_css(&shadow),
            "inset 2px 4px 8px 0px rgba(0, 0, 0, 0.25)"
        );
    }

    #[test]
    fn test_only_first_shadow_projected() {
        let attrs = StyleAttributes {
            box_shadows: vec![
                BoxShadow::new(Rgba32F::BLACK),
                BoxShadow::new(Rgba32F::WHITE),
            ],
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(style.box_shadow.as_deref(), Some("0px 0px 0px 0px rgba(0, 0, 0, 1)"));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(to_dimension(&Dimension::Px(12.5)), "12.5px");
        assert_eq!(to_dimension(&Dimension::Percentage(50.0)), "50%");
        assert_eq!(
            to_dimension(&Dimension::Length {
                value: 2.0,
                unit: "rem".to_string()
            }),
            "2rem"
        );
        assert_eq!(to_dimension(&Dimension::Auto), "auto");
    }

    #[test]
    fn test_fill_target_selects_property() {
        let attrs = StyleAttributes {
            fill: Some(Paint::solid(Rgba32F::BLACK)),
            ..Default::default()
        };
        let config = |fill| StyleConfig {
            fill,
            has_text_style: false,
        };

        let style = to_style(&attrs, &config(FillTarget::Background));
        assert_eq!(style.background.as_deref(), Some("rgba(0, 0, 0, 1)"));
        assert!(style.color.is_none() && style.fill.is_none());

        let style = to_style(&attrs, &config(FillTarget::Fill));
        assert_eq!(style.fill.as_deref(), Some("rgba(0, 0, 0, 1)"));

        let style = to_style(&attrs, &config(FillTarget::Color));
        assert_eq!(style.color.as_deref(), Some("rgba(0, 0, 0, 1)"));

        let style = to_style(&attrs, &config(FillTarget::None));
        assert!(style.background.is_none() && style.color.is_none() && style.fill.is_none());
    }

    #[test]
    fn test_text_style_gated_and_defaulted() {
        let attrs = StyleAttributes::default();
        let style = to_style(&attrs, &StyleConfig::default());
        assert!(style.text_align.is_none());
        assert!(style.font_size.is_none());

        let config = StyleConfig {
            fill: FillTarget::Color,
            has_text_style: true,
        };
        let style = to_style(&attrs, &config);
        assert_eq!(style.text_align.as_deref(), Some("left"));
        assert_eq!(style.align_content.as_deref(), Some("start"));
        assert_eq!(style.line_height.as_deref(), Some("normal"));
        assert_eq!(style.font_weight.as_deref(), Some("400"));
    }

    #[test]
    fn test_text_style_values() {
        let text = TextStyle {
            text_align: Some(TextAlign::Center),
            text_align_vertical: Some(TextAlignVertical::Bottom),
            font_family: Some("Inter".to_string()),
            font_size: 16.0,
            font_weight: 700,
            letter_spacing: Some(0.5),
            line_height: Some(1.2),
            ..Default::default()
        };
        let style = text_style_to_css(&text, None);
        assert_eq!(style.text_align.as_deref(), Some("center"));
        assert_eq!(style.align_content.as_deref(), Some("end"));
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.font_size.as_deref(), Some("16px"));
        assert_eq!(style.font_weight.as_deref(), Some("700"));
        assert_eq!(style.letter_spacing.as_deref(), Some("0.5px"));
        assert_eq!(style.line_height.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_border() {
        let border = Border {
            style: BorderStyle::Dashed,
            color: Rgba32F::BLACK,
            width: BorderWidth::Uniform(2.0),
        };
        let css = border_to_css(&border);
        assert_eq!(css.style, "dashed");
        assert_eq!(css.color, "rgba(0, 0, 0, 1)");
        assert_eq!(css.width, "2px");
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let attrs = StyleAttributes {
            z_index: Some(3),
            padding: Some(Padding::Uniform(8.0)),
            ..Default::default()
        };
        let value = serde_json::to_value(to_style(&attrs, &StyleConfig::default())).unwrap();
        assert_eq!(value, serde_json::json!({ "zIndex": "3", "padding": "8px" }));
    }

    #[test]
    fn test_inline_style() {
        let attrs = StyleAttributes {
            position: Some(Position::Absolute),
            left: Some(10.0),
            top: Some(-0.00001),
            ..Default::default()
        };
        let style = to_style(&attrs, &StyleConfig::default());
        assert_eq!(
            style.to_inline_style(),
            "position: absolute; top: 0px; left: 10px"
        );
    }
}
