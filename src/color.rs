//! RGBA colors and the open/closed color transition.

use std::str::FromStr;

use palette::Srgb;

use crate::error::{Error, Result};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white, the default for both endpoints.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Returns the same color with its alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Packs the color as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
    ///
    /// Colors without an alpha component are opaque.
    pub fn from_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || Error::InvalidColor(text.to_string());

        if !hex.is_ascii() {
            return Err(invalid());
        }

        let (alpha, rgb) = match hex.len() {
            8 => {
                let a = u8::from_str_radix(&hex[..2], 16).map_err(|_| invalid())?;
                (a, &hex[2..])
            }
            3 | 6 => (255, hex),
            _ => return Err(invalid()),
        };

        let rgb: Srgb<u8> = Srgb::from_str(rgb).map_err(|_| invalid())?;
        Ok(Self::rgba(rgb.red, rgb.green, rgb.blue, alpha))
    }

    /// Formats the color as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.to_argb())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// Interpolates between `from` (closed) and `to` (open) at `value`.
///
/// Each channel is `|value * to + (1 - value) * from|` truncated to an
/// integer. Equal channels are returned as-is, which the float form does
/// not guarantee. Results are not clamped: with `value` in `[0, 1]` they
/// are in range, outside it only the low eight bits survive.
pub fn transition_color(value: f32, from: Color, to: Color) -> Color {
    let channel = |f: u8, t: u8| -> u8 {
        if f == t {
            return f;
        }
        let mixed = (value * f32::from(t) + (1.0 - value) * f32::from(f)).abs();
        (mixed as i64) as u8
    };

    Color {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
        a: channel(from.a, to.a),
    }
}
