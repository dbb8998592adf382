//! Edge insets, points and sizes.
//!
//! Each geometric value can be written in several shapes. For a key `foo`,
//! the first shape that applies wins:
//!
//! | Shape | Insets | Point | Size |
//! |-------|--------|-------|------|
//! | Suffixed subkeys | `fooTop`, `fooLeft`, `fooBottom`, `fooRight` | `fooX`, `fooY` | `fooWidth`, `fooHeight` |
//! | Quadruple | `foo: [top, left, bottom, right]` | - | - |
//! | Pair | `foo: [vertical, horizontal]` | `foo: [x, y]` | `foo: [width, height]` |
//! | Scalar | `foo: 8` (all edges) | - | - |
//!
//! Suffixed subkeys are looked up one by one through the [`RawSource`], so a
//! derived theme can override `fooTop` alone and inherit the other edges.
//! Shapes never mix: once any subkey is present, `foo` itself is ignored.

use crate::coerce;
use crate::value::{RawSource, RawValue};

/// Insets from each edge of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four edges.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Decodes insets for `key`. Never fails.
    pub fn coerce<S: RawSource + ?Sized>(source: &S, key: &str) -> Self {
        if let Some([top, left, bottom, right]) =
            suffix_cluster(source, key, ["Top", "Left", "Bottom", "Right"])
        {
            return Self::new(top, left, bottom, right);
        }

        match source.raw_for(key) {
            Some(RawValue::Quad(top, left, bottom, right)) => {
                Self::new(top, left, bottom, right)
            }
            Some(RawValue::Pair(vertical, horizontal)) => Self::symmetric(vertical, horizontal),
            Some(RawValue::Integer(i)) => Self::uniform(i as f64),
            Some(RawValue::Real(r)) => Self::uniform(r),
            _ => Self::ZERO,
        }
    }
}

/// A location in two dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Decodes a point for `key`. A bare scalar is not a point and yields
    /// the origin.
    pub fn coerce<S: RawSource + ?Sized>(source: &S, key: &str) -> Self {
        if let Some([x, y]) = suffix_cluster(source, key, ["X", "Y"]) {
            return Self::new(x, y);
        }

        match source.raw_for(key) {
            Some(RawValue::Pair(x, y)) => Self::new(x, y),
            _ => Self::ZERO,
        }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Decodes a size for `key`. A bare scalar is not a size and yields zero.
    pub fn coerce<S: RawSource + ?Sized>(source: &S, key: &str) -> Self {
        if let Some([width, height]) = suffix_cluster(source, key, ["Width", "Height"]) {
            return Self::new(width, height);
        }

        match source.raw_for(key) {
            Some(RawValue::Pair(width, height)) => Self::new(width, height),
            _ => Self::ZERO,
        }
    }
}

/// Resolves `key + suffix` for every suffix independently.
///
/// Returns `None` when no subkey is present anywhere in the source, so the
/// caller can try the next shape. Missing subkeys within a present cluster
/// decode to 0.
fn suffix_cluster<S, const N: usize>(
    source: &S,
    key: &str,
    suffixes: [&str; N],
) -> Option<[f64; N]>
where
    S: RawSource + ?Sized,
{
    let raws = suffixes.map(|suffix| source.raw_for(&format!("{key}{suffix}")));
    if raws.iter().all(Option::is_none) {
        return None;
    }
    Some(raws.map(|raw| coerce::real(raw.as_ref())))
}
