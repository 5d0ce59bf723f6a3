//! A single key/value attribute of an SMDL document.
//!
//! An attribute carries a key, an optional raw value, and the depth of the
//! document that owns it. The raw value is stored as text; typed accessors
//! decode it on demand and never cache the result, so each access is a pure
//! function of the stored string.
//!
//! ## Examples
//!
//! ```rust
//! use smdl::Attribute;
//!
//! let attribute = Attribute::from_segment(" timeout : 250 ", 0);
//! assert_eq!(attribute.key(), "timeout");
//! assert_eq!(attribute.string_value().unwrap(), "250");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{Document, Error, Result};

/// One attribute: a key, an optional raw value, and the owning document's
/// depth.
///
/// Attributes come out of [`parse`](crate::parse) (one per segment) or out of
/// [`Document::set`](crate::Document::set); both paths normalize a blank
/// value to an absent one, turning the attribute into a flag.
#[derive(Debug, Clone)]
pub struct Attribute {
    key: String,
    value: Option<String>,
    depth: usize,
}

impl Attribute {
    /// Creates an attribute from its parts.
    ///
    /// The parts are stored as given; use [`Attribute::from_segment`] for the
    /// trimming and blank-normalization the wire grammar applies.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<String>, depth: usize) -> Self {
        Attribute {
            key: key.into(),
            value,
            depth,
        }
    }

    /// Creates an attribute from the raw text of one segment.
    ///
    /// The segment splits on the first colon: the part before it is the key,
    /// the part after it the value, both trimmed. Without a colon the whole
    /// segment is the key. A value that trims to nothing is treated as
    /// absent, making the attribute a flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smdl::Attribute;
    ///
    /// let attribute = Attribute::from_segment("url: http://example.com", 0);
    /// assert_eq!(attribute.key(), "url");
    /// assert_eq!(attribute.string_value().unwrap(), "http://example.com");
    ///
    /// let flag = Attribute::from_segment("enabled", 0);
    /// assert!(!flag.has_value());
    /// ```
    #[must_use]
    pub fn from_segment(segment: &str, depth: usize) -> Self {
        match segment.split_once(':') {
            Some((key, value)) => {
                let value = value.trim();
                Attribute {
                    key: key.trim().to_owned(),
                    value: (!value.is_empty()).then(|| value.to_owned()),
                    depth,
                }
            }
            None => Attribute {
                key: segment.trim().to_owned(),
                value: None,
                depth,
            },
        }
    }

    /// Returns the key of this attribute.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the depth of the owning document, as supplied at construction.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns whether this attribute has an assigned value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns this attribute's value as a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] when no value is present.
    pub fn string_value(&self) -> Result<&str> {
        self.value.as_deref().ok_or(Error::NoValue)
    }

    /// Returns this attribute's value as a string, if present.
    #[must_use]
    pub fn try_string_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decodes this attribute's value as an arbitrary-precision decimal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smdl::Attribute;
    ///
    /// let attribute = Attribute::from_segment("ratio: 0.125", 0);
    /// assert_eq!(attribute.decimal_value().unwrap().to_string(), "0.125");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumberFormat`] when the value is absent or not a
    /// valid decimal literal.
    pub fn decimal_value(&self) -> Result<BigDecimal> {
        let literal = self.value.as_deref().unwrap_or("");
        literal.parse().map_err(|_| Error::NumberFormat {
            literal: literal.to_owned(),
        })
    }

    /// Decodes this attribute's value as an arbitrary-precision decimal, if
    /// possible.
    #[must_use]
    pub fn try_decimal_value(&self) -> Option<BigDecimal> {
        self.decimal_value().ok()
    }

    /// Decodes this attribute's value as an arbitrary-precision integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumberFormat`] when the value is absent or not a
    /// valid integer literal.
    pub fn integer_value(&self) -> Result<BigInt> {
        let literal = self.value.as_deref().unwrap_or("");
        literal.parse().map_err(|_| Error::NumberFormat {
            literal: literal.to_owned(),
        })
    }

    /// Decodes this attribute's value as an arbitrary-precision integer, if
    /// possible.
    #[must_use]
    pub fn try_integer_value(&self) -> Option<BigInt> {
        self.integer_value().ok()
    }

    /// Decodes this attribute's value as a nested [`Document`] one level
    /// deeper than the owning document.
    ///
    /// The decode happens on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] when no value is present, or the parse
    /// error when the value does not parse at the nested depth.
    pub fn document_value(&self) -> Result<Document> {
        let value = self.value.as_deref().ok_or(Error::NoValue)?;
        crate::parse_at_depth(value, self.depth + 1)
    }

    /// Decodes this attribute's value as a nested [`Document`], if possible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let document = smdl::parse("& point: \n  && x: 3\n  && y: 4").unwrap();
    /// let point = document.get("point").unwrap().try_document_value().unwrap();
    /// assert_eq!(point.i64_value("x").unwrap(), 3);
    ///
    /// let plain = smdl::parse("& note: just text").unwrap();
    /// assert!(plain.get("note").unwrap().try_document_value().is_none());
    /// ```
    #[must_use]
    pub fn try_document_value(&self) -> Option<Document> {
        self.document_value().ok()
    }

    /// Renders this attribute as it appears after a delimiter at `depth`.
    ///
    /// A flag renders as its key alone. A value that decodes as a nested
    /// document renders recursively one level deeper; any other value
    /// renders literally.
    #[must_use]
    pub fn render(&self, depth: usize) -> String {
        let Some(value) = self.value.as_deref() else {
            return self.key.clone();
        };
        match self.try_document_value() {
            Some(nested) => format!("{}: {}", self.key, nested.render(depth + 1)),
            None => format!("{}: {}", self.key, value),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Equality compares key and value; depth is bookkeeping, not identity.
impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for Attribute {}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}
