//! Decoded style values and their coercers.
//!
//! Every type here has a `coerce` constructor that turns raw theme data into
//! the typed value and never fails. Scalar types take an `Option<&RawValue>`;
//! composite types take a [`RawSource`](crate::RawSource) and a key because
//! they read several related keys.

mod color;
mod font;
mod geometry;
mod image;
mod text;

pub use color::Color;
pub use font::{Font, FontFamily, DEFAULT_FONT_SIZE};
pub use geometry::{EdgeInsets, Point, Size};
pub use image::{AssetResolver, ImageToken};
pub use text::TextCaseTransform;
