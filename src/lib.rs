//! # smdl
//!
//! A parser and serializer for SMDL, a small, human-writable, nestable
//! key/value markup format.
//!
//! ## What is SMDL?
//!
//! An SMDL document is a sequence of uniquely-keyed attributes. Each
//! attribute starts after a delimiter made of marker characters (`&`), and an
//! attribute's value may itself be a document nested one level deeper.
//! Nesting depth is encoded by the *length of the marker run* — deeper
//! documents use longer runs, like heading levels:
//!
//! ```text
//! & title: An example
//! & published
//! & server:
//!   && host: 127.0.0.1
//!   && port: 8080
//! ```
//!
//! Here `published` is a flag (a key without a value), and `server` holds a
//! nested document whose attributes are introduced by `&&`. A backslash in
//! front of a marker run escapes it, so the run reads as literal text. The
//! full grammar lives in the [`format`] module.
//!
//! ## Key Features
//!
//! - **Depth-aware parsing**: delimiters match only runs of exactly the
//!   expected length, so nested content embedded in a value is never split
//!   at the wrong level
//! - **Round-trip fidelity**: rendering a parsed document produces text that
//!   parses back to the same keys, values, and order
//! - **Typed access**: attribute values decode on demand as strings,
//!   arbitrary-precision integers and decimals, or nested documents
//! - **Serde support**: documents serialize as maps and deserialize from
//!   maps of scalars and nested maps
//!
//! ## Quick Start
//!
//! ```rust
//! use smdl::{parse, Document};
//!
//! let document = parse("& name: Violet\n& pinned\n& retries: 3").unwrap();
//! assert_eq!(document.string_value("name").unwrap(), "Violet");
//! assert!(!document.get("pinned").unwrap().has_value());
//! assert_eq!(document.i64_value("retries").unwrap(), 3);
//! ```
//!
//! Documents are built programmatically through [`Document::set`] and
//! friends, which normalize values so the stored text always matches the
//! attribute's nesting position:
//!
//! ```rust
//! use smdl::Document;
//!
//! let mut server = Document::new();
//! server.set("host", Some("127.0.0.1"));
//! server.set("port", Some("8080"));
//!
//! let mut config = Document::new();
//! config.set("server", Some(&server.to_string()));
//!
//! let reparsed = smdl::parse(&config.to_string()).unwrap();
//! let server_back = reparsed.document_value("server").unwrap();
//! assert_eq!(server_back.string_value("host").unwrap(), "127.0.0.1");
//! ```
//!
//! The [`smdl!`] macro builds the same thing as a literal:
//!
//! ```rust
//! use smdl::smdl;
//!
//! let config = smdl! {
//!     "server": {
//!         "host": "127.0.0.1",
//!         "port": 8080,
//!     },
//! };
//! assert!(config.contains("server"));
//! ```

pub mod attribute;
mod de;
pub mod document;
pub mod error;
pub mod format;
pub mod macros;
pub mod parse;
mod ser;

pub use attribute::Attribute;
pub use document::Document;
pub use error::{Error, Result};
pub use parse::{detect_depth, parse, parse_at_depth, try_parse};

use std::io;

/// Parses a [`Document`] from an I/O stream of SMDL text.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let document = smdl::from_reader(Cursor::new(b"& a: 1")).unwrap();
/// assert_eq!(document.i64_value("a").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&text)
}

/// Writes a [`Document`]'s rendering to a writer.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, document: &Document) -> Result<()> {
    writer
        .write_all(document.to_string().as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
