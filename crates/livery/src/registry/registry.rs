//! Loading a file of themes and wiring their parents.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use super::config::{RegistryConfig, DEFAULT_THEME_NAME};
use crate::error::ThemeError;
use crate::theme::Theme;
use crate::value::{RawDocument, RawValue};

/// Document key naming a theme's parent. Removed before the theme is built.
pub const PARENT_KEY: &str = "_parent";

/// A set of themes loaded together, with parents wired.
///
/// The source document maps theme names to theme documents. The theme
/// whose name matches the default theme name (case-insensitively) is the
/// root; every other theme inherits from it unless its document names a
/// different parent under [`PARENT_KEY`].
///
/// ```rust
/// use livery::ThemeRegistry;
///
/// let registry = ThemeRegistry::from_yaml(r##"
/// Default:
///   rows: 3
///   tint: "#333333"
/// Night:
///   tint: "#eeeeee"
/// Midnight:
///   _parent: Night
///   rows: 5
/// "##).unwrap();
///
/// let midnight = registry.get("Midnight").unwrap();
/// assert_eq!(midnight.integer_for("rows"), 5);
/// assert_eq!(midnight.string_for("tint"), "#eeeeee");
/// assert_eq!(registry.default_theme().name(), "Default");
/// ```
///
/// The registry owns every theme. Themes only hold weak references to
/// their parents, so handing out an `Arc<Theme>` and dropping the registry
/// leaves that theme without inherited values.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
    default_key: String,
}

impl ThemeRegistry {
    /// Loads the named theme document using [`RegistryConfig::from_env`].
    pub fn load_named(name: &str) -> Result<Self, ThemeError> {
        Self::load_named_with(name, &RegistryConfig::from_env())
    }

    /// Loads the named theme document from the configured search directories.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotFound`] if no directory holds the document
    /// - any error from [`from_file`](Self::from_file)
    pub fn load_named_with(name: &str, config: &RegistryConfig) -> Result<Self, ThemeError> {
        let path = config.resolve(name)?;
        Self::load_path(&path, &config.default_theme_name)
    }

    /// Loads a theme document from a YAML (`.yaml`, `.yml`) or JSON
    /// (`.json`) file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        Self::load_path(path.as_ref(), DEFAULT_THEME_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Self::from_document(RawDocument::from_yaml(yaml)?, DEFAULT_THEME_NAME)
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Self::from_document(RawDocument::from_json(json)?, DEFAULT_THEME_NAME)
    }

    /// Builds a registry from documents that are already decoded.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::UnknownParent`] if a [`PARENT_KEY`] names a theme
    ///   that is not in `documents`
    /// - [`ThemeError::CyclicParent`] if the declared parents form a cycle
    /// - [`ThemeError::Parse`] if a [`PARENT_KEY`] value is not a string
    pub fn from_documents<I, K>(documents: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, RawDocument)>,
        K: Into<String>,
    {
        Self::build(documents, DEFAULT_THEME_NAME, None)
    }

    /// Like [`from_documents`](Self::from_documents) with a custom default
    /// theme name.
    pub fn from_documents_with_default<I, K>(
        documents: I,
        default_theme_name: &str,
    ) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, RawDocument)>,
        K: Into<String>,
    {
        Self::build(documents, default_theme_name, None)
    }

    /// Returns the theme every other theme falls back to.
    pub fn default_theme(&self) -> &Arc<Theme> {
        // `build` always inserts the default key.
        &self.themes[self.default_key.as_str()]
    }

    /// Returns all themes by name, in document order.
    pub fn themes(&self) -> &IndexMap<String, Arc<Theme>> {
        &self.themes
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Theme>> {
        self.themes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    fn load_path(path: &Path, default_theme_name: &str) -> Result<Self, ThemeError> {
        let document = RawDocument::from_file(path)?;

        tracing::debug!(path = %path.display(), themes = document.len(), "loading theme document");
        let documents = split_themes(document).map_err(|e| e.with_path(path))?;
        Self::build(documents, default_theme_name, Some(path))
    }

    fn from_document(document: RawDocument, default_theme_name: &str) -> Result<Self, ThemeError> {
        Self::build(split_themes(document)?, default_theme_name, None)
    }

    fn build<I, K>(
        documents: I,
        default_theme_name: &str,
        source: Option<&Path>,
    ) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (K, RawDocument)>,
        K: Into<String>,
    {
        let mut themes: IndexMap<String, Arc<Theme>> = IndexMap::new();
        let mut declared_parents: IndexMap<String, String> = IndexMap::new();

        for (name, mut document) in documents {
            let name = name.into();
            match document.remove(PARENT_KEY) {
                Some(RawValue::String(parent)) => {
                    declared_parents.insert(name.clone(), parent);
                }
                Some(other) => {
                    return Err(ThemeError::parse(format!(
                        "'{}' of theme '{}' must be a string, found {}",
                        PARENT_KEY,
                        name,
                        other.kind()
                    )))
                }
                None => {}
            }

            let mut theme = Theme::new(name.clone(), document);
            if let Some(path) = source {
                theme = theme.with_source_path(path);
            }
            themes.insert(name, Arc::new(theme));
        }

        let found = themes
            .keys()
            .find(|name| name.eq_ignore_ascii_case(default_theme_name))
            .cloned();
        let default_key = match found {
            Some(name) => name,
            None => {
                tracing::warn!(
                    default_theme = default_theme_name,
                    "no default theme in document, using an empty one"
                );
                themes.insert(
                    default_theme_name.to_string(),
                    Arc::new(Theme::named(default_theme_name)),
                );
                default_theme_name.to_string()
            }
        };

        for (name, theme) in &themes {
            let parent = match declared_parents.get(name) {
                Some(parent_name) => {
                    themes
                        .get(parent_name)
                        .ok_or_else(|| ThemeError::UnknownParent {
                            theme: name.clone(),
                            parent: parent_name.clone(),
                        })?
                }
                None if *name == default_key => continue,
                None => &themes[default_key.as_str()],
            };
            theme.set_parent(parent)?;
        }

        tracing::debug!(
            themes = themes.len(),
            default_theme = %default_key,
            "wired theme registry"
        );
        Ok(Self {
            themes,
            default_key,
        })
    }
}

/// Splits a top-level document into one document per theme.
///
/// A theme whose body is empty (`Night:` with nothing after it) is an empty
/// document.
fn split_themes(document: RawDocument) -> Result<Vec<(String, RawDocument)>, ThemeError> {
    document
        .into_iter()
        .map(|(name, value)| match value {
            RawValue::Document(doc) => Ok((name, doc)),
            RawValue::Null => Ok((name, RawDocument::new())),
            other => Err(ThemeError::parse(format!(
                "theme '{}' must be a mapping, found {}",
                name,
                other.kind()
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, EdgeInsets};
    use std::fs;
    use tempfile::TempDir;

    const THEMES: &str = r##"
Default:
  tint: "#000000"
  rows: 3
  padding: [4, 8]
Night:
  tint: "#ffffff"
Midnight:
  _parent: Night
  paddingTop: 1
"##;

    // =========================================================================
    // Wiring
    // =========================================================================

    #[test]
    fn test_every_theme_inherits_from_default() {
        let registry = ThemeRegistry::from_yaml(THEMES).unwrap();
        let night = registry.get("Night").unwrap();

        assert_eq!(night.parent().unwrap().name(), "Default");
        assert_eq!(night.integer_for("rows"), 3);
        assert_eq!(night.color_for("tint"), Color::WHITE);
        assert!(registry.default_theme().parent().is_none());
    }

    #[test]
    fn test_declared_parent_chain() {
        let registry = ThemeRegistry::from_yaml(THEMES).unwrap();
        let midnight = registry.get("Midnight").unwrap();

        assert_eq!(midnight.parent().unwrap().name(), "Night");
        assert_eq!(midnight.color_for("tint"), Color::WHITE);
        assert_eq!(midnight.integer_for("rows"), 3);
        assert!(!midnight.document().contains_key(PARENT_KEY));
        assert_eq!(
            midnight.edge_insets_for("padding"),
            EdgeInsets::new(1.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_names_keep_document_order() {
        let registry = ThemeRegistry::from_yaml(THEMES).unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Default", "Night", "Midnight"]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.themes().len(), 3);
    }

    #[test]
    fn test_default_matched_case_insensitively() {
        let registry = ThemeRegistry::from_yaml("default:\n  rows: 2\nOther: {}\n").unwrap();
        assert_eq!(registry.default_theme().name(), "default");
        assert_eq!(registry.get("Other").unwrap().integer_for("rows"), 2);
    }

    #[test]
    fn test_missing_default_is_synthesized() {
        let registry = ThemeRegistry::from_yaml("Night:\n  rows: 2\n").unwrap();
        let default = registry.default_theme();

        assert_eq!(default.name(), "Default");
        assert!(default.document().is_empty());
        assert_eq!(
            registry.get("Night").unwrap().parent().unwrap().name(),
            "Default"
        );
    }

    #[test]
    fn test_custom_default_name() {
        let documents = vec![
            ("Base", RawDocument::new().with("rows", 7)),
            ("Night", RawDocument::new()),
        ];
        let registry = ThemeRegistry::from_documents_with_default(documents, "base").unwrap();
        assert_eq!(registry.default_theme().name(), "Base");
        assert_eq!(registry.get("Night").unwrap().integer_for("rows"), 7);
    }

    #[test]
    fn test_empty_theme_body() {
        let registry = ThemeRegistry::from_yaml("Default:\n  rows: 1\nBlank:\n").unwrap();
        let blank = registry.get("Blank").unwrap();
        assert!(blank.document().is_empty());
        assert_eq!(blank.integer_for("rows"), 1);
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn test_unknown_parent() {
        let err = ThemeRegistry::from_yaml("Default: {}\nNight:\n  _parent: Dusk\n").unwrap_err();
        match err {
            ThemeError::UnknownParent { theme, parent } => {
                assert_eq!(theme, "Night");
                assert_eq!(parent, "Dusk");
            }
            other => panic!("Expected UnknownParent, got {:?}", other),
        }
    }

    #[test]
    fn test_parent_cycle() {
        let yaml = "Default: {}\nA:\n  _parent: B\nB:\n  _parent: A\n";
        let err = ThemeRegistry::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ThemeError::CyclicParent { .. }));
    }

    #[test]
    fn test_self_parent() {
        let err = ThemeRegistry::from_yaml("Default: {}\nA:\n  _parent: A\n").unwrap_err();
        assert!(matches!(err, ThemeError::CyclicParent { .. }));
    }

    #[test]
    fn test_parent_key_must_be_string() {
        let err = ThemeRegistry::from_yaml("Default: {}\nA:\n  _parent: 3\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
    }

    #[test]
    fn test_theme_body_must_be_mapping() {
        let err = ThemeRegistry::from_yaml("Default: 3\n").unwrap_err();
        match err {
            ThemeError::Parse { message, .. } => assert!(message.contains("Default")),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_wired_theme_rejects_second_parent() {
        let registry = ThemeRegistry::from_yaml(THEMES).unwrap();
        let night = registry.get("Night").unwrap();
        let midnight = registry.get("Midnight").unwrap();

        let err = night.set_parent(midnight).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::CyclicParent { .. } | ThemeError::ParentAlreadySet { .. }
        ));
        assert_eq!(night.parent().unwrap().name(), "Default");
    }

    // =========================================================================
    // Files
    // =========================================================================

    #[test]
    fn test_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.json");
        fs::write(
            &path,
            r##"{"Default": {"rows": 2}, "Night": {"tint": "#ffffff"}}"##,
        )
        .unwrap();

        let registry = ThemeRegistry::from_file(&path).unwrap();
        let night = registry.get("Night").unwrap();
        assert_eq!(night.integer_for("rows"), 2);
        assert_eq!(night.source_path(), Some(path.as_path()));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.toml");
        fs::write(&path, "Default = {}").unwrap();

        let err = ThemeRegistry::from_file(&path).unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_unknown_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.yaml");
        fs::write(&path, "Default: {}\nA:\n  _parent: Nope\n").unwrap();

        let err = ThemeRegistry::from_file(&path).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownParent { .. }));
    }

    #[test]
    fn test_from_file_parse_error_has_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.yaml");
        fs::write(&path, "Default: [1, 2, 3]\n").unwrap();

        match ThemeRegistry::from_file(&path).unwrap_err() {
            ThemeError::Parse { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("Expected Parse with path, got {:?}", other),
        }
    }

    #[test]
    fn test_load_named_with_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app.yml"),
            "Base:\n  rows: 9\nNight: {}\n",
        )
        .unwrap();
        let config = RegistryConfig::default()
            .with_search_dirs([temp_dir.path()])
            .with_default_theme_name("Base");

        let registry = ThemeRegistry::load_named_with("app", &config).unwrap();
        assert_eq!(registry.default_theme().name(), "Base");
        assert_eq!(registry.get("Night").unwrap().integer_for("rows"), 9);
    }

    #[test]
    fn test_load_named_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = RegistryConfig::default().with_search_dirs([temp_dir.path()]);
        let err = ThemeRegistry::load_named_with("app", &config).unwrap_err();
        assert!(matches!(err, ThemeError::NotFound { .. }));
    }
}
