//! Text case transforms.

use std::borrow::Cow;

use crate::value::RawValue;

/// How text should be re-cased before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextCaseTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
}

impl TextCaseTransform {
    /// Matches `uppercase` or `lowercase` in any case; anything else is
    /// [`TextCaseTransform::None`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("uppercase") {
            TextCaseTransform::Uppercase
        } else if s.eq_ignore_ascii_case("lowercase") {
            TextCaseTransform::Lowercase
        } else {
            TextCaseTransform::None
        }
    }

    pub fn coerce(raw: Option<&RawValue>) -> Self {
        raw.and_then(RawValue::as_str)
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Applies the transform. Borrows the input when nothing changes.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            TextCaseTransform::None => Cow::Borrowed(text),
            TextCaseTransform::Uppercase => Cow::Owned(text.to_uppercase()),
            TextCaseTransform::Lowercase => Cow::Owned(text.to_lowercase()),
        }
    }
}
