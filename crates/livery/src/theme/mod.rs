//! Themes and value inheritance.
//!
//! A [`Theme`] is a named document of raw values with an optional parent.
//! Lookups that miss in a theme continue in its parent, so a derived theme
//! only lists what it changes:
//!
//! ```yaml
//! Default:
//!   tint: "#1a73e8"
//!   padding: [8, 12]
//!   titleFont: System
//!   titleFontSize: 17
//!
//! Compact:
//!   paddingTop: 4        # overrides one edge, keeps the rest
//!   titleFontSize: 15
//! ```
//!
//! ## Accessors
//!
//! Accessors are total: a missing or malformed value never errors and
//! decodes to the type's default (`false`, `0`, `""`, opaque black, zero
//! insets and so on). Calling an accessor twice on the same theme gives the
//! same answer.
//!
//! ## Hierarchies
//!
//! Parents are assigned once with [`Theme::set_parent`], which rejects
//! cycles. Most applications let a [`ThemeRegistry`](crate::ThemeRegistry)
//! load a whole file of themes and wire them instead.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{Ancestors, Theme, MAX_PARENT_DEPTH};
