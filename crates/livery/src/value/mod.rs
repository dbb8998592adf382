//! Raw, undecoded theme values.
//!
//! A theme document holds a small set of value shapes: booleans, integers,
//! reals, strings, numeric pairs and quadruples, and nested documents. Both
//! YAML and JSON documents decode into the same [`RawValue`] tree.
//!
//! [`RawSource`] is the seam between storage and decoding: coercers ask a
//! source for one key at a time and never see how the source resolves it.
//! A bare [`RawDocument`] answers from itself; a
//! [`Theme`](crate::Theme) answers from itself or its ancestors.

mod document;
mod raw;

pub use document::{RawDocument, KEY_PATH_SEPARATOR};
pub use raw::RawValue;

/// Anything that can answer "what raw value is stored for this key?".
pub trait RawSource {
    /// Returns the raw value for `key`, or `None` when nothing defines it.
    fn raw_for(&self, key: &str) -> Option<RawValue>;
}

impl<T: RawSource + ?Sized> RawSource for &T {
    fn raw_for(&self, key: &str) -> Option<RawValue> {
        (**self).raw_for(key)
    }
}

impl<T: RawSource + ?Sized> RawSource for std::sync::Arc<T> {
    fn raw_for(&self, key: &str) -> Option<RawValue> {
        (**self).raw_for(key)
    }
}
