//! SMDL Format Description
//!
//! This module documents the SMDL wire format as implemented by this library.
//! It contains no code.
//!
//! # Overview
//!
//! SMDL is a line-oriented, human-writable markup for nested key/value data.
//! Structure comes from two characters only: the marker `&` and the escape
//! `\`. There are no braces, no quoting rules, and no significant
//! indentation — indentation in rendered output is cosmetic.
//!
//! # Documents and Depth
//!
//! A document is a sequence of attributes separated by **delimiters**. A
//! delimiter for a document at depth `D` is a run of exactly `D + 1`
//! consecutive markers:
//!
//! ```text
//! & key: value        depth 0, delimiter "&"
//!   && key: value     depth 1, delimiter "&&"
//!     &&& key         depth 2, delimiter "&&&"
//! ```
//!
//! Depth detection is a sniff: the length of the first marker run anywhere in
//! the text, minus one. The full grammar is only checked afterwards, during
//! segmentation.
//!
//! # Delimiter Boundaries
//!
//! A marker run counts as a delimiter only when
//!
//! - the character in front of it (if any) is neither a marker nor the
//!   escape character, and
//! - the character behind it (if any) is not a marker.
//!
//! Both conditions together make matching exact: a depth-0 scan never splits
//! on the `&&` runs of a nested document carried inside a value, because
//! those runs are too long to match.
//!
//! # Escaping
//!
//! An escape character directly in front of a marker run suppresses its
//! delimiter interpretation for that run only; the run (and the backslash)
//! stay in the text as literal characters:
//!
//! ```text
//! & motto: fish \& chips
//! ```
//!
//! parses as one attribute `motto` with the value `fish \& chips`.
//!
//! # Attributes
//!
//! The text of a segment splits on its **first** colon. The part before the
//! colon is the key, the part after it the value; both are trimmed. A
//! segment without a colon, or whose value trims to nothing, yields a
//! **flag**: a key without a value.
//!
//! ```text
//! & name: Violet      key "name", value "Violet"
//! & pinned            flag
//! & note:             flag (blank value)
//! & url: http://x/y   key "url", value "http://x/y" (later colons are text)
//! ```
//!
//! Values are untyped text. Readers decode them on demand as strings,
//! arbitrary-precision integers or decimals, or nested documents.
//!
//! # Nesting
//!
//! A value may be a complete document body one level deeper. Rendering
//! places a nested document on its own line block, indented two spaces per
//! level:
//!
//! ```text
//! & server:
//!   && host: 127.0.0.1
//!   && port: 8080
//! ```
//!
//! Reading `server` as a document yields `host` and `port`; reading it as a
//! string yields the raw nested text.
//!
//! # Round-Trip Guarantee
//!
//! Rendering a parsed document produces text that parses back to the same
//! keys, values, and order. Setting a value programmatically normalizes it
//! first (trimming, blank-to-flag, and re-rendering document-shaped values at
//! the correct depth), so built documents round-trip the same way.
