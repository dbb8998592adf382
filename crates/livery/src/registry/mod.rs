//! Theme registries: loading named theme documents and wiring inheritance.
//!
//! A theme document is a YAML or JSON file whose top level maps theme names
//! to theme bodies:
//!
//! ```yaml
//! Default:
//!   tint: "#1a73e8"
//! Night:
//!   tint: "#8ab4f8"
//! Midnight:
//!   _parent: Night
//!   backgroundColor: "#000000"
//! ```
//!
//! [`ThemeRegistry`] parses the file, builds one [`Theme`](crate::Theme) per
//! entry and assigns parents. [`RegistryConfig`] says where named documents
//! are looked up, and [`shared`] holds an optional process-wide registry.

mod config;
#[allow(clippy::module_inception)]
mod registry;
pub mod shared;

pub use config::{
    RegistryConfig, DEFAULT_THEME_ENV, DEFAULT_THEME_NAME, THEME_EXTENSIONS, THEME_PATH_ENV,
};
pub use registry::{ThemeRegistry, PARENT_KEY};
