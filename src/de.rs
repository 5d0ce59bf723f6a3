//! serde `Deserialize` impl.
//!
//! A [`Document`] deserializes from a map whose values are scalars, nulls,
//! or nested maps. Every entry goes through [`Document::set`], so scalars
//! are stringified, nulls become flags, and nested maps are rendered and
//! re-parsed into correctly-depthed nested text. Sequences are not part of
//! the format and are rejected.
//!
//! ```rust
//! use smdl::Document;
//!
//! let json = serde_json::json!({"name": "Violet", "retries": 3, "pinned": null});
//! let document: Document = serde_json::from_value(json).unwrap();
//! assert_eq!(document.i64_value("retries").unwrap(), 3);
//! assert!(!document.get("pinned").unwrap().has_value());
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};

use crate::Document;

/// One map value accepted while deserializing a [`Document`].
enum FieldValue {
    Absent,
    Text(String),
    Nested(Document),
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of SMDL attributes")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut document = Document::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            match value {
                FieldValue::Absent => document.set(&key, None),
                FieldValue::Text(text) => document.set(&key, Some(&text)),
                FieldValue::Nested(nested) => document.set(&key, Some(&nested.render(1))),
            }
        }
        Ok(document)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean, null, or nested map")
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_owned()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldValueVisitor)
    }

    fn visit_map<A>(self, access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        DocumentVisitor.visit_map(access).map(FieldValue::Nested)
    }

    fn visit_seq<A>(self, _access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        Err(A::Error::custom("SMDL has no sequence values"))
    }
}
