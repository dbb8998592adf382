//! Font descriptors.
//!
//! A font is described by two independently inherited keys: `key` names the
//! family and `key + "Size"` gives the point size. The tokens `System` and
//! `BoldSystem` select the platform's default families instead of a named
//! one. Turning a descriptor into a loaded font is left to the caller.

use std::fmt;

use crate::coerce;
use crate::value::RawSource;

/// Point size used when a font has no usable size.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Sizes below this are treated as missing.
const MIN_FONT_SIZE: f64 = 1.0;

/// The family part of a font descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's default family.
    #[default]
    System,
    /// The platform's default bold family.
    BoldSystem,
    /// A family looked up by name.
    Named(String),
}

impl FontFamily {
    /// Interprets a family string. The sentinel tokens match exactly;
    /// an empty string means the system family.
    pub fn parse(name: &str) -> Self {
        match name {
            "" | "System" => FontFamily::System,
            "BoldSystem" => FontFamily::BoldSystem,
            other => FontFamily::Named(other.to_string()),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, FontFamily::System | FontFamily::BoldSystem)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::System => f.write_str("System"),
            FontFamily::BoldSystem => f.write_str("BoldSystem"),
            FontFamily::Named(name) => f.write_str(name),
        }
    }
}

/// A family plus a point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: f64,
}

impl Font {
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self { family, size }
    }

    /// The system family at [`DEFAULT_FONT_SIZE`].
    pub fn system() -> Self {
        Self::new(FontFamily::System, DEFAULT_FONT_SIZE)
    }

    /// Decodes a font for `key`. Never fails.
    pub fn coerce<S: RawSource + ?Sized>(source: &S, key: &str) -> Self {
        let name = coerce::string(source.raw_for(key).as_ref());
        let size = coerce::real(source.raw_for(&format!("{key}Size")).as_ref());
        let size = if size >= MIN_FONT_SIZE {
            size
        } else {
            DEFAULT_FONT_SIZE
        };
        Self::new(FontFamily::parse(&name), size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system()
    }
}
