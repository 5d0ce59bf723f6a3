//! The ordered, key-unique attribute collection.
//!
//! A [`Document`] keeps its attributes in a single insertion-ordered map
//! ([`IndexMap`]), so serialization order equals insertion order and key
//! uniqueness is the map invariant. Mutation is not synchronized; share a
//! document across threads only behind external locking or as a read-only
//! snapshot.
//!
//! ## Examples
//!
//! ```rust
//! use smdl::Document;
//!
//! let mut document = Document::new();
//! document.set("name", Some("Violet"));
//! document.set_flag("pinned");
//! document.set_value("retries", 3);
//!
//! assert_eq!(document.to_string(), "& name: Violet\n& pinned\n& retries: 3");
//! ```

use std::fmt;

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::parse::MARKER;
use crate::{Attribute, Error, Result};

/// An ordered, key-unique collection of attributes at a known nesting depth.
///
/// Created empty at depth 0 via [`Document::new`], or by
/// [`parse`](crate::parse), or as the decoded value of an
/// [`Attribute`](crate::Attribute). Note that parsing always builds its
/// result through the depth-0 factory, so a document's own `depth` does not
/// reflect a non-root parse depth; callers that know the real depth pass it
/// to [`Document::render`] explicitly.
#[derive(Debug, Clone, Default)]
pub struct Document {
    attributes: IndexMap<String, Attribute>,
    depth: usize,
}

impl Document {
    /// Creates an empty document at depth 0.
    #[must_use]
    pub fn new() -> Self {
        Document {
            attributes: IndexMap::new(),
            depth: 0,
        }
    }

    /// Returns this document's own nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the document has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns an iterator over the attribute keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Returns an iterator over the attributes, in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Returns whether the document contains an attribute with `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Returns the attribute with `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// Inserts `attribute` if its key is not yet taken.
    ///
    /// Returns `true` when inserted, `false` (without touching the document)
    /// when the key is already present. Parsing uses this to reject
    /// duplicated keys; [`Document::set`] is the overwriting counterpart.
    pub fn add(&mut self, attribute: Attribute) -> bool {
        if self.attributes.contains_key(attribute.key()) {
            return false;
        }
        self.attributes
            .insert(attribute.key().to_owned(), attribute);
        true
    }

    /// Removes the attribute with `key`, keeping the remaining attributes in
    /// order.
    ///
    /// Returns `true` when something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.attributes.shift_remove(key).is_some()
    }

    /// Assigns `value` to `key`, replacing any existing attribute.
    ///
    /// The value is normalized before it is stored: a blank or
    /// whitespace-only value becomes absent (a flag), and a value that parses
    /// as a document is re-rendered for this document's nesting position, so
    /// the stored text always carries the marker-run length matching where it
    /// lives. Re-setting an existing key moves it to the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smdl::Document;
    ///
    /// let mut document = Document::new();
    /// document.set("note", Some("  trimmed  "));
    /// assert_eq!(document.string_value("note").unwrap(), "trimmed");
    ///
    /// document.set("note", Some("   "));
    /// assert!(!document.get("note").unwrap().has_value());
    /// ```
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        self.attributes.shift_remove(key);

        let mut value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);

        if let Some(nested) = value.as_deref().and_then(crate::try_parse) {
            if nested.depth() != self.depth + 1 {
                value = Some(nested.render(self.depth + 1));
            }
        }

        let attribute = Attribute::new(key, value, self.depth + 1);
        self.attributes.insert(key.to_owned(), attribute);
    }

    /// Assigns the `Display` rendering of `value` to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smdl::Document;
    ///
    /// let mut document = Document::new();
    /// document.set_value("port", 8080);
    /// assert_eq!(document.i64_value("port").unwrap(), 8080);
    /// ```
    pub fn set_value<V: fmt::Display>(&mut self, key: &str, value: V) {
        self.set(key, Some(&value.to_string()));
    }

    /// Assigns `key` as a flag attribute without a value.
    pub fn set_flag(&mut self, key: &str) {
        self.set(key, None);
    }

    /// Returns the value of `key` as a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] when the key is absent and
    /// [`Error::NoValue`] when the attribute is a flag.
    pub fn string_value(&self, key: &str) -> Result<&str> {
        self.require(key)?.string_value()
    }

    /// Returns the value of `key` as a string, if present.
    #[must_use]
    pub fn try_string_value(&self, key: &str) -> Option<&str> {
        self.get(key)?.try_string_value()
    }

    /// Returns the value of `key` as an arbitrary-precision decimal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] when the key is absent and
    /// [`Error::NumberFormat`] when the value is not a decimal literal.
    pub fn decimal_value(&self, key: &str) -> Result<BigDecimal> {
        self.require(key)?.decimal_value()
    }

    /// Returns the value of `key` as an arbitrary-precision decimal, if
    /// possible.
    #[must_use]
    pub fn try_decimal_value(&self, key: &str) -> Option<BigDecimal> {
        self.get(key)?.try_decimal_value()
    }

    /// Returns the value of `key` as an arbitrary-precision integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] when the key is absent and
    /// [`Error::NumberFormat`] when the value is not an integer literal.
    pub fn integer_value(&self, key: &str) -> Result<BigInt> {
        self.require(key)?.integer_value()
    }

    /// Returns the value of `key` as an arbitrary-precision integer, if
    /// possible.
    #[must_use]
    pub fn try_integer_value(&self, key: &str) -> Option<BigInt> {
        self.get(key)?.try_integer_value()
    }

    /// Returns the value of `key` narrowed to an `i64`.
    ///
    /// # Errors
    ///
    /// Like [`Document::integer_value`], plus [`Error::NumberFormat`] when
    /// the value does not fit in an `i64`.
    pub fn i64_value(&self, key: &str) -> Result<i64> {
        let n = self.integer_value(key)?;
        n.to_i64().ok_or_else(|| Error::NumberFormat {
            literal: n.to_string(),
        })
    }

    /// Returns the value of `key` narrowed to an `i64`, if possible.
    #[must_use]
    pub fn try_i64_value(&self, key: &str) -> Option<i64> {
        self.i64_value(key).ok()
    }

    /// Returns the value of `key` narrowed to an `f64`.
    ///
    /// # Errors
    ///
    /// Like [`Document::decimal_value`], plus [`Error::NumberFormat`] when
    /// the value has no `f64` representation.
    pub fn f64_value(&self, key: &str) -> Result<f64> {
        let n = self.decimal_value(key)?;
        n.to_f64().ok_or_else(|| Error::NumberFormat {
            literal: n.to_string(),
        })
    }

    /// Returns the value of `key` narrowed to an `f64`, if possible.
    #[must_use]
    pub fn try_f64_value(&self, key: &str) -> Option<f64> {
        self.f64_value(key).ok()
    }

    /// Returns the value of `key` decoded as a nested [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] when the key is absent, plus
    /// every failure mode of [`Attribute::document_value`].
    pub fn document_value(&self, key: &str) -> Result<Document> {
        self.require(key)?.document_value()
    }

    /// Returns the value of `key` decoded as a nested [`Document`], if
    /// possible.
    #[must_use]
    pub fn try_document_value(&self, key: &str) -> Option<Document> {
        self.get(key)?.try_document_value()
    }

    /// Renders this document as SMDL text at the given nesting depth.
    ///
    /// A nested document (depth above 0) starts on its own line, offset from
    /// the owner's `key:` prefix. Each attribute gets two spaces of
    /// indentation per depth level, a marker run of `depth + 1` characters, a
    /// space, and the attribute's own rendering. Trailing whitespace is
    /// stripped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let document = smdl::parse("& a: 1\n& b: 2").unwrap();
    /// assert_eq!(document.render(0), "& a: 1\n& b: 2");
    /// assert_eq!(document.render(1), "\n  && a: 1\n  && b: 2");
    /// ```
    #[must_use]
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        if depth > 0 {
            out.push('\n');
        }
        for attribute in self.attributes.values() {
            for _ in 0..depth {
                out.push_str("  ");
            }
            for _ in 0..=depth {
                out.push(MARKER);
            }
            out.push(' ');
            out.push_str(&attribute.render(depth));
            out.push('\n');
        }
        let end = out.trim_end().len();
        out.truncate(end);
        out
    }

    fn require(&self, key: &str) -> Result<&Attribute> {
        self.attributes.get(key).ok_or_else(|| Error::MissingAttribute {
            key: key.to_owned(),
        })
    }
}

/// Renders at the document's own depth.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.depth))
    }
}

/// Equality compares the attribute collections (key-wise, order-insensitive);
/// depth is not part of identity.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl Eq for Document {}
