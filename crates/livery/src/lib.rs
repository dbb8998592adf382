//! # Livery - Typed, Inheritable Theme Values
//!
//! `livery` turns loosely typed theme documents (YAML or JSON) into typed
//! values: colors, fonts, edge insets, points, sizes, text case transforms,
//! image tokens and animation timing. Themes inherit from each other, so a
//! variant only lists the values it changes.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: a named document of raw values with an optional parent
//! - [`ThemeRegistry`]: loads a file of themes and wires their parents
//! - [`RawValue`] and [`RawDocument`]: the undecoded document tree
//! - Accessors such as [`Theme::color_for`] and [`Theme::edge_insets_for`]:
//!   total decoders that fall back to defaults instead of failing
//! - [`AnimationEngine`]: the seam to whatever runs animations
//!
//! ## Quick Start
//!
//! ```rust
//! use livery::{Color, EdgeInsets, FontFamily, ThemeRegistry};
//!
//! let registry = ThemeRegistry::from_yaml(r##"
//! Default:
//!   tint: "#1a73e8"
//!   padding: [8, 12]
//!   titleFont: System
//!   titleFontSize: 17
//! Compact:
//!   paddingTop: 4
//!   paddingBottom: 4
//!   titleFontSize: 15
//! "##).unwrap();
//!
//! let compact = registry.get("Compact").unwrap();
//!
//! assert_eq!(compact.color_for("tint"), Color::from_rgb8(0x1a, 0x73, 0xe8));
//! assert_eq!(compact.edge_insets_for("padding"), EdgeInsets::new(4.0, 0.0, 4.0, 0.0));
//!
//! let font = compact.font_for("titleFont");
//! assert_eq!(font.family, FontFamily::System);
//! assert_eq!(font.size, 15.0);
//! ```
//!
//! ## Value Shapes
//!
//! Composite values accept several spellings. Insets, for example, can be
//! written as separate keys, a quadruple, a pair or a single number:
//!
//! ```yaml
//! a: [1, 2, 3, 4]        # top, left, bottom, right
//! b: [10, 20]            # vertical, horizontal
//! c: 6                   # all edges
//! dTop: 1                # missing edges are zero
//! dLeft: 2
//! ```
//!
//! Separate keys win over the other spellings, and each key is inherited on
//! its own.
//!
//! ## Logging
//!
//! The crate logs through [`tracing`]: registry loading and parent wiring at
//! `debug`, inherited lookups at `trace`, and fallbacks such as a
//! synthesized default theme at `warn`. No subscriber is installed.

pub mod animation;
pub mod coerce;
mod error;
pub mod registry;
pub mod style;
pub mod theme;
pub mod value;

// Re-export core types
pub use animation::{
    AnimationCurve, AnimationEngine, AnimationSpecifier, AnimationWork, Completion,
    ImmediateEngine, ThreadEngine,
};
pub use error::ThemeError;
pub use registry::{shared, RegistryConfig, ThemeRegistry};
pub use style::{
    AssetResolver, Color, EdgeInsets, Font, FontFamily, ImageToken, Point, Size,
    TextCaseTransform, DEFAULT_FONT_SIZE,
};
pub use theme::{Theme, MAX_PARENT_DEPTH};
pub use value::{RawDocument, RawSource, RawValue};
