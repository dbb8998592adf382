//! Ordered key-value documents backing a theme.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use super::raw::RawValue;
use super::RawSource;
use crate::error::ThemeError;

/// Separator for key paths into nested documents.
pub const KEY_PATH_SEPARATOR: char = '.';

/// An insertion-ordered mapping from keys to [`RawValue`]s.
///
/// Documents are treated as fully materialized input: themes read them but
/// never write to them.
///
/// # Example
///
/// ```rust
/// use livery::{RawDocument, RawValue};
///
/// let doc = RawDocument::from_yaml(r##"
/// accentColor: "#ff6b35"
/// button:
///   padding: [4, 8]
/// "##).unwrap();
///
/// assert_eq!(doc.lookup("button.padding"), Some(&RawValue::Pair(4.0, 8.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    entries: IndexMap<String, RawValue>,
}

impl RawDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from YAML. The top level must be a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a document from JSON. The top level must be an object.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a document from a file, choosing the parser by extension:
    /// `.yaml` and `.yml` are YAML, `.json` is JSON.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::UnsupportedFormat`] for any other extension
    /// - [`ThemeError::Io`] if the file cannot be read
    /// - [`ThemeError::Parse`] carrying the path if decoding fails
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content).map_err(|e| e.with_path(path))
    }

    /// Adds an entry, returning the document for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry. A later insert of the same key replaces the value
    /// but keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.entries.shift_remove(key)
    }

    /// Returns the value stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// Returns the value for `key`, descending into nested documents when
    /// `key` is a dotted path.
    ///
    /// An exact key always wins over a path, so `"a.b"` stored literally
    /// shadows `b` inside a nested `a`.
    pub fn lookup(&self, key: &str) -> Option<&RawValue> {
        if let Some(value) = self.entries.get(key) {
            return Some(value);
        }
        let (head, rest) = key.split_once(KEY_PATH_SEPARATOR)?;
        self.entries.get(head)?.as_document()?.lookup(rest)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl RawSource for RawDocument {
    fn raw_for(&self, key: &str) -> Option<RawValue> {
        self.lookup(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for RawDocument
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = RawDocument::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}

impl IntoIterator for RawDocument {
    type Item = (String, RawValue);
    type IntoIter = indexmap::map::IntoIter<String, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawDocumentVisitor)
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of string keys to theme values")
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawDocument, E> {
        // An empty YAML stream carries no mapping at all.
        Ok(RawDocument::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<RawDocument, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
            entries.insert(key, value);
        }
        Ok(RawDocument { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let doc = RawDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_with_and_get() {
        let doc = RawDocument::new().with("a", 1).with("b", "two");
        assert_eq!(doc.get("a"), Some(&RawValue::Integer(1)));
        assert_eq!(doc.get("b"), Some(&RawValue::String("two".into())));
        assert_eq!(doc.get("c"), None);
    }

    #[test]
    fn test_order_is_preserved() {
        let doc = RawDocument::from_yaml("z: 1\na: 2\nm: 3\n").unwrap();
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut doc = RawDocument::from_yaml("a: 1\nb: 2\nc: 3\n").unwrap();
        assert_eq!(doc.remove("b"), Some(RawValue::Integer(2)));
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_lookup_key_path() {
        let doc = RawDocument::from_yaml(
            r#"
            button:
                title:
                    font: Helvetica
            "#,
        )
        .unwrap();
        assert_eq!(
            doc.lookup("button.title.font"),
            Some(&RawValue::String("Helvetica".into()))
        );
        assert_eq!(doc.lookup("button.title.missing"), None);
        assert_eq!(doc.lookup("button.title.font.deeper"), None);
    }

    #[test]
    fn test_exact_key_wins_over_path() {
        let doc = RawDocument::from_yaml(
            r#"
            "a.b": 1
            a:
                b: 2
            "#,
        )
        .unwrap();
        assert_eq!(doc.lookup("a.b"), Some(&RawValue::Integer(1)));
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        assert!(RawDocument::from_yaml("- 1\n- 2\n").is_err());
        assert!(RawDocument::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_from_json() {
        let doc = RawDocument::from_json(r#"{"size": [10, 20], "on": true}"#).unwrap();
        assert_eq!(doc.get("size"), Some(&RawValue::Pair(10.0, 20.0)));
        assert_eq!(doc.get("on"), Some(&RawValue::Bool(true)));
    }

    #[test]
    fn test_from_file_picks_parser_by_extension() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let yml = temp_dir.path().join("a.YML");
        fs::write(&yml, "rows: 2\n").unwrap();
        let json = temp_dir.path().join("b.json");
        fs::write(&json, r#"{"rows": 3}"#).unwrap();

        assert_eq!(
            RawDocument::from_file(&yml).unwrap().get("rows"),
            Some(&RawValue::Integer(2))
        );
        assert_eq!(
            RawDocument::from_file(&json).unwrap().get("rows"),
            Some(&RawValue::Integer(3))
        );
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let toml = temp_dir.path().join("c.toml");
        fs::write(&toml, "rows: 2\n").unwrap();

        assert!(matches!(
            RawDocument::from_file(&toml),
            Err(ThemeError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            RawDocument::from_file(temp_dir.path().join("missing.yaml")),
            Err(ThemeError::Io { .. })
        ));
    }

    #[test]
    fn test_collect_from_iterator() {
        let doc: RawDocument = vec![("x", 1.0), ("y", 2.0)].into_iter().collect();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.raw_for("y"), Some(RawValue::Real(2.0)));
    }
}
