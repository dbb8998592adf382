//! The loosely-typed value stored under one key of a theme document.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::document::RawDocument;

/// A serialized theme value, before any decoding.
///
/// Absence is modelled by `Option::None` at the lookup site. [`RawValue::Null`]
/// is an explicit empty marker: it is *present*, so it stops the parent walk
/// and decodes to the accessor's default.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Explicit empty marker (`~` / `null`).
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    /// An ordered pair of reals, e.g. `[10, 20]`.
    Pair(f64, f64),
    /// An ordered quadruple of reals, e.g. `[1, 2, 3, 4]`.
    Quad(f64, f64, f64, f64),
    /// A nested document, addressable with dotted key paths.
    Document(RawDocument),
}

impl RawValue {
    /// Returns the numeric value for integers and reals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Integer(i) => Some(*i as f64),
            RawValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the string slice for string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested document for document values.
    pub fn as_document(&self) -> Option<&RawDocument> {
        match self {
            RawValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Integer(_) => "integer",
            RawValue::Real(_) => "real",
            RawValue::String(_) => "string",
            RawValue::Pair(..) => "pair",
            RawValue::Quad(..) => "quad",
            RawValue::Document(_) => "document",
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Real(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<(f64, f64)> for RawValue {
    fn from((a, b): (f64, f64)) -> Self {
        RawValue::Pair(a, b)
    }
}

impl From<(f64, f64, f64, f64)> for RawValue {
    fn from((a, b, c, d): (f64, f64, f64, f64)) -> Self {
        RawValue::Quad(a, b, c, d)
    }
}

impl From<RawDocument> for RawValue {
    fn from(doc: RawDocument) -> Self {
        RawValue::Document(doc)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a bool, number, string, numeric pair or quadruple, or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(match i64::try_from(v) {
            Ok(i) => RawValue::Integer(i),
            Err(_) => RawValue::Real(v as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Real(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<RawValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut numbers = Vec::with_capacity(4);
        while let Some(element) = seq.next_element::<RawValue>()? {
            let n = element.as_f64().ok_or_else(|| {
                de::Error::custom(format!(
                    "sequence elements must be numbers, found {}",
                    element.kind()
                ))
            })?;
            numbers.push(n);
        }

        match numbers.as_slice() {
            [a, b] => Ok(RawValue::Pair(*a, *b)),
            [a, b, c, d] => Ok(RawValue::Quad(*a, *b, *c, *d)),
            other => Err(de::Error::custom(format!(
                "sequences must have 2 or 4 numbers, found {}",
                other.len()
            ))),
        }
    }

    fn visit_map<A>(self, map: A) -> Result<RawValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        RawDocument::deserialize(de::value::MapAccessDeserializer::new(map)).map(RawValue::Document)
    }
}
