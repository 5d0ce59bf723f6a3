//! serde `Serialize` impls.
//!
//! A [`Document`] serializes as a map in attribute order: a flag becomes a
//! null entry, a value that parses as a document (at whatever depth its
//! marker runs encode) becomes a nested map, and any other value becomes a
//! string. An [`Attribute`] serializes as a single-entry map of the same
//! shape.
//!
//! ```rust
//! let document = smdl::parse("& a: 1\n& b").unwrap();
//! let json = serde_json::to_value(&document).unwrap();
//! assert_eq!(json, serde_json::json!({"a": "1", "b": null}));
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Attribute, Document};

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for attribute in self.attributes() {
            serialize_entry(&mut map, attribute)?;
        }
        map.end()
    }
}

impl Serialize for Attribute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        serialize_entry(&mut map, self)?;
        map.end()
    }
}

fn serialize_entry<M: SerializeMap>(map: &mut M, attribute: &Attribute) -> Result<(), M::Error> {
    let value = attribute.try_string_value();
    // Nested detection is depth-agnostic here: a document-shaped value is
    // presented as structure no matter which depth its runs encode.
    match value.and_then(crate::try_parse) {
        Some(nested) => map.serialize_entry(attribute.key(), &nested),
        None => map.serialize_entry(attribute.key(), &value),
    }
}
