//! A process-wide registry slot.
//!
//! Applications that want one theme registry for the whole process install
//! it here once, at startup, or let the first caller of [`get_or_load`]
//! load it. The slot cannot be replaced afterwards. Code that can take a
//! registry or theme as an argument should do that instead.
//!
//! ```rust,ignore
//! livery::shared::get_or_load("app")?;
//! let theme = livery::shared::default_theme().unwrap();
//! ```

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::registry::ThemeRegistry;
use crate::error::ThemeError;
use crate::theme::Theme;

static SHARED: OnceCell<ThemeRegistry> = OnceCell::new();

/// Installs `registry` as the shared registry.
///
/// # Errors
///
/// [`ThemeError::AlreadyInstalled`] if a registry was installed or loaded
/// before. The given registry is dropped.
pub fn install(registry: ThemeRegistry) -> Result<&'static ThemeRegistry, ThemeError> {
    let installed = SHARED
        .try_insert(registry)
        .map_err(|_| ThemeError::AlreadyInstalled)?;
    tracing::debug!(themes = installed.len(), "installed shared theme registry");
    Ok(installed)
}

/// Returns the shared registry, if one is installed.
pub fn get() -> Option<&'static ThemeRegistry> {
    SHARED.get()
}

/// Returns the shared registry, loading the named theme document with
/// [`ThemeRegistry::load_named`] on first use.
///
/// Once a registry is present, `name` is ignored. A failed load leaves the
/// slot empty so a later call can try again.
pub fn get_or_load(name: &str) -> Result<&'static ThemeRegistry, ThemeError> {
    SHARED.get_or_try_init(|| ThemeRegistry::load_named(name))
}

/// Returns the default theme of the shared registry, if one is installed.
pub fn default_theme() -> Option<Arc<Theme>> {
    get().map(|registry| Arc::clone(registry.default_theme()))
}
