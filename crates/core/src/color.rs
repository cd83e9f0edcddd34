//! Color values and channel tuples.
//!
//! `ColorValue` is the opaque color handed in and out of the gradient API.
//! It is canonically RGBA (`r`/`g`/`b` in 0..=255, `a` in 0..=1) and converts
//! to HSVA on demand. Parsing of CSS color inputs (named colors, hex,
//! `rgb()`, `hsl()`, ...) is delegated to `csscolorparser`; conversion and
//! string formatting are pure functions owned by this module so the exact
//! rounding and output format are under the crate's control.

use crate::error::GradientError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// RGBA channel tuple: `r`/`g`/`b` in 0..=255, `a` in 0..=1.
///
/// Channels are kept as `f64` so interpolated values between stops stay
/// fractional; only display paths round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSVA channel tuple: `h` in degrees [0, 360), `s`/`v`/`a` in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl Rgba {
    /// Per-channel maxima used for wraparound during interpolation.
    pub const MAX: [f64; 4] = [256.0, 256.0, 256.0, 1.0];

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Hsva {
    /// Per-channel maxima used for wraparound during interpolation.
    pub const MAX: [f64; 4] = [360.0, 1.0, 1.0, 1.0];

    pub fn to_array(self) -> [f64; 4] {
        [self.h, self.s, self.v, self.a]
    }

    pub fn from_array([h, s, v, a]: [f64; 4]) -> Self {
        Self { h, s, v, a }
    }
}

/// An opaque color value, canonically stored as RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    rgba: Rgba,
}

impl ColorValue {
    /// Parses a CSS color string (named color, `#rrggbb`, `rgb()`, `hsl()`, ...).
    ///
    /// Returns `GradientError::InvalidColor` on unparseable input.
    pub fn parse(input: &str) -> Result<Self, GradientError> {
        let parsed = csscolorparser::parse(input)
            .map_err(|e| GradientError::InvalidColor(format!("'{input}': {e}")))?;
        Ok(Self::from(Rgba {
            r: f64::from(parsed.r) * 255.0,
            g: f64::from(parsed.g) * 255.0,
            b: f64::from(parsed.b) * 255.0,
            a: f64::from(parsed.a),
        }))
    }

    /// Returns the RGBA channels.
    pub fn to_rgba(self) -> Rgba {
        self.rgba
    }

    /// Returns the HSVA channels.
    pub fn to_hsva(self) -> Hsva {
        rgb_to_hsv(self.rgba)
    }

    /// Returns the color as 8-bit RGBA, rounded and clamped.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.rgba.r),
            quantize(self.rgba.g),
            quantize(self.rgba.b),
            (self.rgba.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Formats the color as a CSS string: `"rgb(255, 0, 0)"`, or
    /// `"rgba(255, 0, 0, 0.5)"` when alpha is below 1.
    ///
    /// Channels are rounded and clamped to 0..=255; alpha is rounded to two
    /// decimal places.
    pub fn to_rgb_string(self) -> String {
        let r = quantize(self.rgba.r);
        let g = quantize(self.rgba.g);
        let b = quantize(self.rgba.b);
        if self.rgba.a < 1.0 {
            let a = (self.rgba.a.clamp(0.0, 1.0) * 100.0).round() / 100.0;
            format!("rgba({r}, {g}, {b}, {a})")
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// Formats the color as `"#rrggbb"`, or `"#rrggbbaa"` when alpha is
    /// below 1. Channels are quantized to 8-bit with rounding.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if self.rgba.a < 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl From<Rgba> for ColorValue {
    fn from(rgba: Rgba) -> Self {
        Self { rgba }
    }
}

impl From<Hsva> for ColorValue {
    fn from(hsva: Hsva) -> Self {
        Self {
            rgba: hsv_to_rgb(hsva),
        }
    }
}

impl FromStr for ColorValue {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorValue::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Rounds a 0..=255 channel to 8-bit with clamping.
fn quantize(channel: f64) -> u8 {
    channel.clamp(0.0, 255.0).round() as u8
}

/// Converts RGBA to HSVA.
///
/// Achromatic input (all channels equal) yields `s = 0` and `h = 0`; hue is
/// undefined there, which is why HSV gradient segments with an achromatic
/// endpoint fall back to RGB interpolation.
pub fn rgb_to_hsv(c: Rgba) -> Hsva {
    let r = c.r / 255.0;
    let g = c.g / 255.0;
    let b = c.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    Hsva { h, s, v, a: c.a }
}

/// Converts HSVA to RGBA using the standard sextant algorithm.
///
/// Hue is normalized to [0, 360) first, so ±360 wraparound from hue
/// interpolation is accepted.
pub fn hsv_to_rgb(c: Hsva) -> Rgba {
    let h = c.h.rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;

    let p = c.v * (1.0 - c.s);
    let q = c.v * (1.0 - f * c.s);
    let t = c.v * (1.0 - (1.0 - f) * c.s);

    let (r, g, b) = match i as u8 % 6 {
        0 => (c.v, t, p),
        1 => (q, c.v, p),
        2 => (p, c.v, t),
        3 => (p, q, c.v),
        4 => (t, p, c.v),
        _ => (c.v, p, q),
    };

    Rgba {
        r: r * 255.0,
        g: g * 255.0,
        b: b * 255.0,
        a: c.a,
    }
}
