//! Error types for SMDL parsing and value access.
//!
//! All failures are synchronous and surface to the immediate caller; there is
//! no internal recovery, logging, or retry. Every failing operation has a
//! `try_` counterpart that converts failure into an absent result.
//!
//! ## Error Categories
//!
//! - **Parse errors**: no delimiter run of the required length, a depth
//!   mismatch, or a duplicated attribute key
//! - **Access errors**: a typed accessor used on an absent value, a
//!   non-numeric literal, or a key the document does not contain
//! - **I/O errors**: reader/writer adapter failures
//!
//! ## Examples
//!
//! ```rust
//! use smdl::{parse, Error};
//!
//! let result = parse("hello world");
//! assert!(matches!(result, Err(Error::NoParagraphs { depth: None })));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing SMDL text or
/// reading attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No marker run of the required length was found.
    ///
    /// `depth` is absent when the input contains no marker run at all, and
    /// carries the depth being parsed when the input has markers but no
    /// well-formed delimiter of that length.
    #[error("no paragraphs defined for an SMDL document{}", depth_note(.depth))]
    NoParagraphs { depth: Option<usize> },

    /// The caller-specified depth does not match the depth encoded by the
    /// text's first marker run.
    #[error("incorrect depth: expected {expected}, found {found}")]
    IncorrectDepth { expected: usize, found: usize },

    /// Two segments at the same depth produced the same trimmed key.
    #[error("attribute key {key:?} assigned multiple times")]
    DuplicateKey { key: String },

    /// A typed accessor was used on an attribute without a value.
    #[error("attribute has no value")]
    NoValue,

    /// A numeric accessor was used on an absent or non-numeric value.
    #[error("cannot read {literal:?} as a number")]
    NumberFormat { literal: String },

    /// A typed read referenced a key the document does not contain.
    #[error("no attribute with key {key:?}")]
    MissingAttribute { key: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error for reader/writer adapter failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

fn depth_note(depth: &Option<usize>) -> String {
    match depth {
        Some(d) => format!(" in depth {} ({})", d, "&".repeat(d + 1)),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
