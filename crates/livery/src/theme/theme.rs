//! The theme type: a document plus an optional parent to inherit from.
//!
//! # Resolution
//!
//! Every accessor starts with [`raw_for`](Theme::raw_for), which checks the
//! theme's own document and then each ancestor in turn. The first theme that
//! defines the key wins, even if it defines it as an explicit null. Nothing
//! is cached; each call walks the chain again.
//!
//! Composite values (insets, points, sizes, fonts, animation specifiers) read
//! several keys, and each key is resolved on its own. A derived theme can
//! therefore override `paddingTop` and keep the rest of `padding` from its
//! parent.
//!
//! # Construction
//!
//! ```rust
//! use std::sync::Arc;
//! use livery::{EdgeInsets, Theme};
//!
//! let base = Arc::new(
//!     Theme::named("Default")
//!         .with("paddingTop", 1)
//!         .with("paddingLeft", 2)
//!         .with("paddingBottom", 3)
//!         .with("paddingRight", 4),
//! );
//! let compact = Theme::named("Compact").with("paddingTop", 9);
//! compact.set_parent(&base).unwrap();
//!
//! assert_eq!(compact.edge_insets_for("padding"), EdgeInsets::new(9.0, 2.0, 3.0, 4.0));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;

use crate::animation::{AnimationCurve, AnimationEngine, AnimationSpecifier, Completion};
use crate::coerce;
use crate::error::ThemeError;
use crate::style::{
    AssetResolver, Color, EdgeInsets, Font, ImageToken, Point, Size, TextCaseTransform,
};
use crate::value::{RawDocument, RawSource, RawValue};

/// Upper bound on how many ancestors a lookup will visit.
pub const MAX_PARENT_DEPTH: usize = 32;

/// A named set of theme values that can inherit from a parent theme.
///
/// The parent is held weakly: a theme never keeps its parent alive. Whoever
/// builds the hierarchy, usually a [`ThemeRegistry`](crate::ThemeRegistry),
/// owns every theme. The parent can be assigned once, after construction.
#[derive(Clone)]
pub struct Theme {
    name: String,
    source_path: Option<PathBuf>,
    document: RawDocument,
    parent: OnceCell<Weak<Theme>>,
}

impl Theme {
    /// Creates a theme over a fully built document.
    pub fn new(name: impl Into<String>, document: RawDocument) -> Self {
        Self {
            name: name.into(),
            source_path: None,
            document,
            parent: OnceCell::new(),
        }
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, RawDocument::new())
    }

    /// Adds a value, returning the theme for chaining.
    ///
    /// Meant for building themes in code before they are shared.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.document.insert(key, value);
        self
    }

    /// Sets the name, returning the theme for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Creates an unnamed theme from a YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the YAML is invalid or holds an
    /// unsupported value shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(Self::new("", RawDocument::from_yaml(yaml)?))
    }

    /// Creates an unnamed theme from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(Self::new("", RawDocument::from_json(json)?))
    }

    /// Loads a single theme document from a file.
    ///
    /// The theme name is the file stem. The format follows the extension, as
    /// for [`RawDocument::from_file`].
    ///
    /// ```rust,ignore
    /// let theme = Theme::from_file("./themes/night.yaml")?;
    /// assert_eq!(theme.name(), "night");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let document = RawDocument::from_file(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self::new(name, document).with_source_path(path))
    }

    pub(crate) fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Returns the theme name. Themes built from bare YAML or JSON are
    /// unnamed and return an empty string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file this theme was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns the theme's own document, without inherited values.
    pub fn document(&self) -> &RawDocument {
        &self.document
    }

    /// Returns the parent theme while it is still alive.
    pub fn parent(&self) -> Option<Arc<Theme>> {
        self.parent.get().and_then(Weak::upgrade)
    }

    /// Assigns the parent theme.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::CyclicParent`] if this theme is `parent` or one of
    ///   its ancestors
    /// - [`ThemeError::ParentAlreadySet`] if a parent was assigned before
    pub fn set_parent(&self, parent: &Arc<Theme>) -> Result<(), ThemeError> {
        if self.is_ancestor_or_self(parent) {
            tracing::warn!(theme = %self.name, parent = %parent.name, "rejected cyclic parent");
            return Err(ThemeError::CyclicParent {
                theme: self.name.clone(),
                parent: parent.name.clone(),
            });
        }

        self.parent
            .set(Arc::downgrade(parent))
            .map_err(|_| ThemeError::ParentAlreadySet {
                theme: self.name.clone(),
            })?;
        tracing::debug!(theme = %self.name, parent = %parent.name, "assigned parent theme");
        Ok(())
    }

    /// Walks every parent link of `theme`, with no depth limit. Terminates
    /// because each assignment keeps the graph acyclic.
    fn is_ancestor_or_self(&self, theme: &Arc<Theme>) -> bool {
        let mut current = Some(Arc::clone(theme));
        while let Some(candidate) = current {
            if std::ptr::eq(candidate.as_ref(), self) {
                return true;
            }
            current = candidate.parent();
        }
        false
    }

    /// Iterates over the parent, grandparent, and so on.
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
            depth: 0,
        }
    }

    /// Returns the raw value stored in this theme's own document.
    pub fn local_raw_for(&self, key: &str) -> Option<&RawValue> {
        self.document.lookup(key)
    }

    /// Returns the raw value for `key` from this theme or the nearest
    /// ancestor that defines it.
    pub fn raw_for(&self, key: &str) -> Option<RawValue> {
        if let Some(value) = self.local_raw_for(key) {
            return Some(value.clone());
        }
        self.ancestors().find_map(|ancestor| {
            let value = ancestor.local_raw_for(key).cloned()?;
            tracing::trace!(theme = %self.name, from = %ancestor.name, key, "inherited value");
            Some(value)
        })
    }

    /// Returns true if this theme or an ancestor defines `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.raw_for(key).is_some()
    }

    // ========== Scalars ==========

    pub fn bool_for(&self, key: &str) -> bool {
        coerce::boolean(self.raw_for(key).as_ref())
    }

    pub fn string_for(&self, key: &str) -> String {
        coerce::string(self.raw_for(key).as_ref())
    }

    pub fn integer_for(&self, key: &str) -> i64 {
        coerce::integer(self.raw_for(key).as_ref())
    }

    pub fn real_for(&self, key: &str) -> f64 {
        coerce::real(self.raw_for(key).as_ref())
    }

    /// Seconds, as a real.
    pub fn time_interval_for(&self, key: &str) -> f64 {
        coerce::time_interval(self.raw_for(key).as_ref())
    }

    pub fn color_for(&self, key: &str) -> Color {
        Color::coerce(self.raw_for(key).as_ref())
    }

    pub fn image_token_for(&self, key: &str) -> Option<ImageToken> {
        ImageToken::coerce(self.raw_for(key).as_ref())
    }

    /// Resolves the image named under `key` through `resolver`.
    pub fn image_for<R: AssetResolver + ?Sized>(&self, key: &str, resolver: &R) -> Option<R::Image> {
        let token = self.image_token_for(key)?;
        resolver.resolve(&token)
    }

    pub fn curve_for(&self, key: &str) -> AnimationCurve {
        AnimationCurve::coerce(self.raw_for(key).as_ref())
    }

    pub fn text_case_transform_for(&self, key: &str) -> TextCaseTransform {
        TextCaseTransform::coerce(self.raw_for(key).as_ref())
    }

    // ========== Composites ==========

    pub fn edge_insets_for(&self, key: &str) -> EdgeInsets {
        EdgeInsets::coerce(self, key)
    }

    pub fn point_for(&self, key: &str) -> Point {
        Point::coerce(self, key)
    }

    pub fn size_for(&self, key: &str) -> Size {
        Size::coerce(self, key)
    }

    /// Reads `key` (family) and `key + "Size"`.
    pub fn font_for(&self, key: &str) -> Font {
        Font::coerce(self, key)
    }

    /// Reads `key + "Duration"`, `key + "Delay"` and `key + "Curve"`.
    pub fn animation_specifier_for(&self, key: &str) -> AnimationSpecifier {
        AnimationSpecifier::coerce(self, key)
    }

    // ========== Animation ==========

    /// Resolves the specifier for `key` and hands the animation to `engine`.
    ///
    /// Returns as soon as the engine accepts the work. `completion` runs
    /// exactly once, with `true` if the animation finished and `false` if it
    /// was interrupted.
    pub fn animate<E, W, C>(&self, key: &str, engine: &E, work: W, completion: C)
    where
        E: AnimationEngine + ?Sized,
        W: FnOnce() + Send + 'static,
        C: FnOnce(bool) + Send + 'static,
    {
        let spec = self.animation_specifier_for(key);
        tracing::debug!(theme = %self.name, key, ?spec, "dispatching animation");
        engine.run(spec, Box::new(work), Completion::new(completion));
    }
}

impl RawSource for Theme {
    fn raw_for(&self, key: &str) -> Option<RawValue> {
        Theme::raw_for(self, key)
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent().map(|p| p.name.clone());
        f.debug_struct("Theme")
            .field("name", &self.name)
            .field("source_path", &self.source_path)
            .field("keys", &self.document.len())
            .field("parent", &parent)
            .finish()
    }
}

/// Iterator over a theme's ancestors, nearest first.
///
/// Stops after [`MAX_PARENT_DEPTH`] themes.
pub struct Ancestors {
    next: Option<Arc<Theme>>,
    depth: usize,
}

impl Iterator for Ancestors {
    type Item = Arc<Theme>;

    fn next(&mut self) -> Option<Arc<Theme>> {
        let current = self.next.take()?;
        self.depth += 1;
        if self.depth > MAX_PARENT_DEPTH {
            tracing::warn!(
                theme = %current.name,
                max_depth = MAX_PARENT_DEPTH,
                "parent chain too deep, stopping lookup"
            );
            return None;
        }
        self.next = current.parent();
        Some(current)
    }
}
