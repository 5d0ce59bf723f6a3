//! Depth detection and the delimiter scanner.
//!
//! A depth-`D` document separates its attributes with runs of exactly `D + 1`
//! marker characters (`&`). A run only counts as a delimiter when the
//! character in front of it (if any) is neither a marker nor the escape
//! character (`\`), and the character behind it (if any) is not a marker.
//! Scanning is done with explicit index walking over char boundaries rather
//! than a pattern engine, so the exact-length and escape rules are spelled
//! out in one place.
//!
//! Most users should use the entry points re-exported from the crate root:
//!
//! ```rust
//! let document = smdl::parse("& name: Violet\n& retries: 3").unwrap();
//! assert_eq!(document.string_value("name").unwrap(), "Violet");
//! ```

use crate::{Attribute, Document, Error, Result};

pub(crate) const MARKER: char = '&';
pub(crate) const ESCAPE: char = '\\';

/// One delimiter occurrence.
///
/// `start` is the byte offset where the match begins: the boundary character
/// in front of the run, or the run itself when it opens the input.
/// `seg_start` is where the following segment's text begins: the boundary
/// character behind the run, or the run's final marker when the run closes
/// the input.
struct Delimiter {
    start: usize,
    seg_start: usize,
}

/// Detects the nesting depth encoded by the first marker run in `text`.
///
/// Depth is the length of the first maximal `&` run minus one. This is a
/// sniff, not a structural guarantee: it inspects only the first run it
/// finds, before the full grammar is verified.
///
/// # Examples
///
/// ```rust
/// assert_eq!(smdl::detect_depth("& a: 1").unwrap(), 0);
/// assert_eq!(smdl::detect_depth("&& a: 1").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::NoParagraphs`] when `text` contains no marker at all.
pub fn detect_depth(text: &str) -> Result<usize> {
    let start = text
        .find(MARKER)
        .ok_or(Error::NoParagraphs { depth: None })?;
    let run = text[start..].chars().take_while(|&c| c == MARKER).count();
    Ok(run - 1)
}

/// Parses `text` into a [`Document`] at the depth its first marker run
/// encodes.
///
/// # Examples
///
/// ```rust
/// let document = smdl::parse("& a\n& b: \n& c: 1").unwrap();
/// assert_eq!(document.len(), 3);
/// assert!(document.try_string_value("a").is_none());
/// assert_eq!(document.i64_value("c").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::NoParagraphs`] when no delimiter is found and
/// [`Error::DuplicateKey`] when two segments share a key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Document> {
    let depth = detect_depth(text)?;
    parse_at_depth(text, depth)
}

/// Parses `text` into a [`Document`], but only if it encodes exactly `depth`.
///
/// # Examples
///
/// ```rust
/// use smdl::{parse_at_depth, Error};
///
/// assert!(parse_at_depth("& a: 1", 0).is_ok());
/// assert_eq!(
///     parse_at_depth("& a: 1", 2).unwrap_err(),
///     Error::IncorrectDepth { expected: 2, found: 0 },
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::IncorrectDepth`] when the detected depth differs from
/// `depth`, plus every failure mode of [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_at_depth(text: &str, depth: usize) -> Result<Document> {
    let found = detect_depth(text)?;
    if found != depth {
        return Err(Error::IncorrectDepth {
            expected: depth,
            found,
        });
    }

    let trimmed = text.trim();
    let run_len = depth + 1;

    let first = find_delimiter(trimmed, run_len, 0).ok_or(Error::NoParagraphs {
        depth: Some(depth),
    })?;

    let mut document = Document::new();
    let mut seg_start = first.seg_start;
    let mut previous = first;

    loop {
        // The search restarts one character past the previous match's start,
        // not its end: the trailing boundary character of one delimiter may
        // double as the leading boundary character of the next.
        let restart = previous.start + char_len_at(trimmed, previous.start);
        let Some(next) = find_delimiter(trimmed, run_len, restart) else {
            break;
        };
        // The segment runs up to and including the next delimiter's leading
        // boundary character.
        let seg_end = next.start + char_len_at(trimmed, next.start);
        add_segment(&mut document, &trimmed[seg_start..seg_end], depth)?;
        seg_start = next.seg_start;
        previous = next;
    }
    add_segment(&mut document, &trimmed[seg_start..], depth)?;

    Ok(document)
}

/// Tries to parse `text` into a [`Document`], swallowing any parse failure.
///
/// # Examples
///
/// ```rust
/// assert!(smdl::try_parse("& a: 1").is_some());
/// assert!(smdl::try_parse("plain text").is_none());
/// ```
#[must_use]
pub fn try_parse(text: &str) -> Option<Document> {
    parse(text).ok()
}

fn add_segment(document: &mut Document, segment: &str, depth: usize) -> Result<()> {
    let attribute = Attribute::from_segment(segment, depth);
    let key = attribute.key().to_owned();
    if !document.add(attribute) {
        return Err(Error::DuplicateKey { key });
    }
    Ok(())
}

/// Finds the next delimiter at or after byte offset `from`.
///
/// A delimiter is a run of exactly `run_len` markers whose leading neighbor
/// (if any) is neither a marker nor the escape character and whose trailing
/// neighbor (if any) is not a marker. A run that opens the input needs no
/// leading neighbor.
fn find_delimiter(text: &str, run_len: usize, from: usize) -> Option<Delimiter> {
    let mut pos = from;
    while let Some(c) = text[pos..].chars().next() {
        if c == MARKER {
            if pos == 0 {
                if let Some(seg_start) = match_run(text, 0, run_len) {
                    return Some(Delimiter { start: 0, seg_start });
                }
            }
        } else if c != ESCAPE {
            if let Some(seg_start) = match_run(text, pos + c.len_utf8(), run_len) {
                return Some(Delimiter {
                    start: pos,
                    seg_start,
                });
            }
        }
        pos += c.len_utf8();
    }
    None
}

/// Checks for a run of exactly `run_len` markers at byte offset `run_at` and
/// returns the byte offset where the following segment's content begins.
fn match_run(text: &str, run_at: usize, run_len: usize) -> Option<usize> {
    let run = text[run_at..].chars().take_while(|&c| c == MARKER).count();
    if run != run_len {
        return None;
    }
    let after = run_at + run_len;
    if after < text.len() {
        Some(after)
    } else {
        // The run closes the input: the segment starts on the final marker.
        Some(after - 1)
    }
}

fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}
