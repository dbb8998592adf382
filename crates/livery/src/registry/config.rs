//! Where registries look for theme files.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;

/// Environment variable holding a platform path list of search directories.
pub const THEME_PATH_ENV: &str = "LIVERY_THEME_PATH";

/// Environment variable overriding the default theme name.
pub const DEFAULT_THEME_ENV: &str = "LIVERY_DEFAULT_THEME";

/// Name of the theme every other theme inherits from unless configured.
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Recognized theme file extensions in priority order.
///
/// When several files share a base name, the extension listed first wins.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Settings for locating and wiring a theme registry.
///
/// ```rust
/// use livery::RegistryConfig;
///
/// let config = RegistryConfig::default()
///     .with_search_dirs(["./themes", "/usr/share/app/themes"])
///     .with_default_theme_name("Base");
/// assert_eq!(config.default_theme_name, "Base");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directories searched in order by [`resolve`](Self::resolve).
    pub search_dirs: Vec<PathBuf>,
    /// Theme that all others inherit from. Matched case-insensitively.
    pub default_theme_name: String,
    /// Extensions tried for each directory, with leading dot.
    pub extensions: Vec<String>,
}

impl Default for RegistryConfig {
    /// Searches the working directory for the usual extensions.
    fn default() -> Self {
        Self {
            search_dirs: vec![PathBuf::from(".")],
            default_theme_name: DEFAULT_THEME_NAME.to_string(),
            extensions: THEME_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl RegistryConfig {
    /// Builds a config from [`THEME_PATH_ENV`] and [`DEFAULT_THEME_ENV`].
    ///
    /// Unset or empty variables keep the [`Default`] values.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(paths) = env::var_os(THEME_PATH_ENV) {
            let dirs: Vec<PathBuf> = env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !dirs.is_empty() {
                config.search_dirs = dirs;
            }
        }

        if let Ok(name) = env::var(DEFAULT_THEME_ENV) {
            let name = name.trim();
            if !name.is_empty() {
                config.default_theme_name = name.to_string();
            }
        }

        tracing::debug!(
            search_dirs = ?config.search_dirs,
            default_theme = %config.default_theme_name,
            "registry config from environment"
        );
        config
    }

    /// Replaces the search directories.
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a search directory after the existing ones.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    pub fn with_default_theme_name(mut self, name: impl Into<String>) -> Self {
        self.default_theme_name = name.into();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Finds the file for a theme document name.
    ///
    /// Directories are searched in order and the first match wins. Within a
    /// directory, extensions are tried in order. A name that already ends in
    /// a configured extension is looked up as given.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] listing the searched directories.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ThemeError> {
        let has_extension = self.extensions.iter().any(|ext| name.ends_with(ext.as_str()));

        for dir in &self.search_dirs {
            if has_extension {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    return Ok(candidate);
                }
                continue;
            }
            if let Some(found) = self.find_in(dir, name) {
                return Ok(found);
            }
        }

        Err(ThemeError::NotFound {
            name: name.to_string(),
            searched: self.search_dirs.clone(),
        })
    }

    fn find_in(&self, dir: &Path, name: &str) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("{name}{ext}")))
            .find(|candidate| candidate.is_file())
    }
}
