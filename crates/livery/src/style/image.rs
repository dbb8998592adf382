//! Image tokens and asset resolution.
//!
//! Themes store images by name only. Loading the pixels belongs to the host
//! application, which supplies an [`AssetResolver`].

use std::fmt;

use crate::value::RawValue;

/// The name of an image asset, as written in a theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageToken(String);

impl ImageToken {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn coerce(raw: Option<&RawValue>) -> Option<Self> {
        raw.and_then(RawValue::as_str).and_then(Self::new)
    }
}

impl fmt::Display for ImageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImageToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turns an image name into a loaded image.
///
/// Implemented for any `Fn(&str) -> Option<I>`, so a closure over an asset
/// catalog is enough:
///
/// ```rust
/// use std::collections::HashMap;
/// use livery::{AssetResolver, ImageToken};
///
/// let catalog: HashMap<&str, u32> = [("logo", 7)].into_iter().collect();
/// let resolver = |name: &str| catalog.get(name).copied();
///
/// let token = ImageToken::new("logo").unwrap();
/// assert_eq!(resolver.resolve(&token), Some(7));
/// ```
pub trait AssetResolver {
    type Image;

    fn resolve(&self, token: &ImageToken) -> Option<Self::Image>;
}

impl<F, I> AssetResolver for F
where
    F: Fn(&str) -> Option<I>,
{
    type Image = I;

    fn resolve(&self, token: &ImageToken) -> Option<I> {
        self(token.as_str())
    }
}
