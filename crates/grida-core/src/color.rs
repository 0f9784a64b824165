//! Color model.
//!
//! Two encodings are used across the document model: [`Rgba32F`] (normalized float
//! channels, the canonical in-memory form of every paint) and [`Rgba8888`] (8-bit
//! channels, used at serialization boundaries such as hex strings and wire formats).
//!
//! Constructors never validate. Conversions clamp.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex format: {0:?}. Expected #RGB, #RRGGBB or #RRGGBBAA.")]
    InvalidHex(String),
}

fn clamp01(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        t
    }
}

fn f32_to_u8(t: f32) -> u8 {
    (t * 255.0).round().clamp(0.0, 255.0) as u8
}

fn u8_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}

/// RGBA color with each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba32F {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba32F {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// `#F5F5F5`
    pub const WHITESMOKE: Self = Self::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

    /// Create a color without range checks.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let ([r, g, b], a) = parse_hex_chunk(hex)?;
        Ok(Self::new(
            u8_to_f32(r),
            u8_to_f32(g),
            u8_to_f32(b),
            a.map(u8_to_f32).unwrap_or(1.0),
        ))
    }

    /// Lower-case `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        self.to_rgba8888().to_hex()
    }

    /// Scale each channel to `0..=255`, rounding and clamping.
    pub fn to_rgba8888(&self) -> Rgba8888 {
        Rgba8888::new(
            f32_to_u8(self.r),
            f32_to_u8(self.g),
            f32_to_u8(self.b),
            f32_to_u8(self.a),
        )
    }

    /// Return a copy with `a *= factor`; color channels are untouched.
    pub fn multiply_alpha(&self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..*self
        }
    }

    /// Return a copy with every channel clamped to `0.0..=1.0`.
    pub fn clamped(&self) -> Self {
        Self::new(
            clamp01(self.r),
            clamp01(self.g),
            clamp01(self.b),
            clamp01(self.a),
        )
    }

    /// `rgba(R, G, B, A)` with integer `0..=255` color channels and `0..=1` alpha.
    ///
    /// This is the only CSS color formatter in the crate; every paint rendered to CSS
    /// goes through it.
    pub fn to_css_rgba(&self) -> String {
        let Rgba8888 { r, g, b, .. } = self.to_rgba8888();
        // alpha to 4 decimals, like CSS lengths
        let a = (f64::from(clamp01(self.a)) * 10_000.0).round() / 10_000.0;
        format!("rgba({}, {}, {}, {})", r, g, b, a)
    }

    /// `rgb(R, G, B)`, alpha dropped.
    pub fn to_css_rgb(&self) -> String {
        let Rgba8888 { r, g, b, .. } = self.to_rgba8888();
        format!("rgb({}, {}, {})", r, g, b)
    }
}

impl Default for Rgba32F {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgba8888> for Rgba32F {
    fn from(color: Rgba8888) -> Self {
        color.to_rgba32f()
    }
}

impl From<Rgba32F> for Color {
    fn from(color: Rgba32F) -> Self {
        let c = color.clamped();
        Color::new([c.r, c.g, c.b, c.a])
    }
}

impl From<Color> for Rgba32F {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.components;
        Self::new(r, g, b, a)
    }
}

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8888 {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a `[r, g, b, a]` chunk as reported by native parsers.
    pub const fn from_chunk(chunk: [u8; 4]) -> Self {
        Self::new(chunk[0], chunk[1], chunk[2], chunk[3])
    }

    /// Parse a hex string; a missing alpha component is opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let ([r, g, b], a) = parse_hex_chunk(hex)?;
        Ok(Self::new(r, g, b, a.unwrap_or(255)))
    }

    /// Lower-case `#rrggbbaa`, zero-padded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Divide each channel by 255.
    pub fn to_rgba32f(&self) -> Rgba32F {
        Rgba32F::new(
            u8_to_f32(self.r),
            u8_to_f32(self.g),
            u8_to_f32(self.b),
            u8_to_f32(self.a),
        )
    }
}

impl From<Rgba32F> for Rgba8888 {
    fn from(color: Rgba32F) -> Self {
        color.to_rgba8888()
    }
}

/// Returns the `[r, g, b]` bytes and the alpha byte when the 8 digit form is used.
fn parse_hex_chunk(hex: &str) -> Result<([u8; 3], Option<u8>), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let nibble = |i: usize| byte(&digits[i..=i].repeat(2));

    match digits.len() {
        3 => Ok(([nibble(0)?, nibble(1)?, nibble(2)?], None)),
        6 => Ok((
            [byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?],
            None,
        )),
        8 => Ok((
            [byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?],
            Some(byte(&digits[6..8])?),
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_duplicates_nibbles() {
        let c = Rgba8888::from_hex("#F80").unwrap();
        assert_eq!(c, Rgba8888::new(0xFF, 0x88, 0x00, 255));
    }

    #[test]
    fn test_long_hex_defaults_alpha() {
        let c = Rgba32F::from_hex("#ff8800").unwrap();
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 136.0 / 255.0).abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
        assert!((c.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hex_with_alpha() {
        let c = Rgba8888::from_hex("#11223380").unwrap();
        assert_eq!(c, Rgba8888::new(0x11, 0x22, 0x33, 0x80));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            Rgba32F::from_hex("#12345"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(Rgba32F::from_hex("#zzz").is_err());
        assert!(Rgba32F::from_hex("").is_err());
        let message = Rgba32F::from_hex("#1").unwrap_err().to_string();
        assert!(message.contains("Invalid hex format"));
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        let c = Rgba8888::new(0x0A, 0xBC, 0x00, 0xFF);
        assert_eq!(c.to_hex(), "#0abc00ff");
        assert_eq!(Rgba32F::WHITE.to_hex(), "#ffffffff");
    }

    #[test]
    fn test_float_to_u8_clamps() {
        let c = Rgba32F::new(1.2, -0.5, 0.5, 1.0).to_rgba8888();
        assert_eq!(c, Rgba8888::new(255, 0, 128, 255));
    }

    #[test]
    fn test_u8_round_trip_is_stable() {
        for v in 0..=255u8 {
            let c = Rgba8888::new(v, 255 - v, v / 2, v);
            let once = c.to_rgba32f().to_rgba8888();
            let twice = once.to_rgba32f().to_rgba8888();
            assert_eq!(once, c);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_hex_round_trip_within_tolerance() {
        let tolerance = 1.0 / 255.0;
        for v in (0..=255u8).step_by(5) {
            for w in (0..=255u8).step_by(51) {
                let c = Rgba8888::new(v, w, 255 - v, w).to_rgba32f();
                let hex = c.to_hex();
                let back = Rgba32F::from_hex(&hex).unwrap();
                assert!((back.r - c.r).abs() <= tolerance, "{}", hex);
                assert!((back.g - c.g).abs() <= tolerance, "{}", hex);
                assert!((back.b - c.b).abs() <= tolerance, "{}", hex);
                assert!((back.a - c.a).abs() <= tolerance, "{}", hex);
                assert_eq!(back.to_hex(), hex);
            }
        }
        let off_grid = Rgba32F::new(0.13, 0.5, 0.87, 0.42);
        let back = Rgba32F::from_hex(&off_grid.to_hex()).unwrap();
        assert!((back.a - off_grid.a).abs() <= tolerance);
    }

    #[test]
    fn test_multiply_alpha() {
        let c = Rgba32F::new(0.2, 0.4, 0.6, 0.8);
        let m = c.multiply_alpha(0.5);
        assert!((m.a - 0.4).abs() < f32::EPSILON);
        assert_eq!((m.r, m.g, m.b), (c.r, c.g, c.b));
        // source untouched
        assert!((c.a - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_css_rgba() {
        assert_eq!(Rgba32F::new(1.0, 0.0, 0.0, 1.0).to_css_rgba(), "rgba(255, 0, 0, 1)");
        assert_eq!(Rgba32F::new(0.0, 0.0, 1.0, 0.5).to_css_rgba(), "rgba(0, 0, 255, 0.5)");
        assert_eq!(
            Rgba32F::new(0.1, 0.2, 0.3, 0.7).multiply_alpha(0.3).to_css_rgba(),
            "rgba(26, 51, 77, 0.21)"
        );
        assert_eq!(Rgba32F::new(0.0, 0.0, 0.0, 1.0 / 3.0).to_css_rgba(), "rgba(0, 0, 0, 0.3333)");
        assert_eq!(Rgba32F::BLACK.to_css_rgb(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_peniko_interop() {
        let color: Color = Rgba32F::new(1.0, 0.0, 0.0, 1.0).into();
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 0, 0, 255));
        let back: Rgba32F = Color::from_rgba8(0, 0, 255, 255).into();
        assert!((back.b - 1.0).abs() < f32::EPSILON);
        assert!(back.r.abs() < f32::EPSILON);
    }
}
