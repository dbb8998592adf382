//! Color values and hex parsing.
//!
//! Theme documents spell colors as hex strings:
//!
//! - `"#ff6b35"` or `"ff6b35"`: opaque RGB (6 digits, `#` optional)
//! - `"#ff6b3580"`: RGB plus alpha (8 digits)
//! - `""`: fully transparent
//!
//! Anything else decodes to opaque black rather than failing.
//!
//! # Example
//!
//! ```rust
//! use livery::Color;
//!
//! let red = Color::parse_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
//! assert_eq!(red.to_hex(), "#ff0000");
//! ```

use crate::value::RawValue;

/// A normalized RGBA color. Every channel lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque black, the fallback for absent or malformed colors.
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent, decoded from an empty string.
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Creates an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |c: u8| f64::from(c) / 255.0;
        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Returns the channels scaled to 8 bits, rounded to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Parses a hex color string.
    ///
    /// Surrounding whitespace and one leading `#` are ignored. An empty
    /// string is transparent. Six digits give an opaque color, eight digits
    /// carry alpha in the last pair.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Color::TRANSPARENT);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", s));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            6 => (channel(0), channel(2), channel(4), Ok(255)),
            8 => (channel(0), channel(2), channel(4), channel(6)),
            _ => {
                return Err(format!(
                    "Invalid hex color: {} (must be 6 or 8 digits)",
                    s
                ))
            }
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color::from_rgba8(r, g, b, a)),
            _ => Err(format!("Invalid hex color: {}", s)),
        }
    }

    /// Decodes a raw theme value. Never fails.
    ///
    /// Strings go through [`parse_hex`](Self::parse_hex); malformed strings,
    /// non-string values and absence all yield [`Color::BLACK`].
    pub fn coerce(raw: Option<&RawValue>) -> Self {
        match raw {
            Some(RawValue::String(s)) => Color::parse_hex(s).unwrap_or(Color::BLACK),
            _ => Color::BLACK,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
