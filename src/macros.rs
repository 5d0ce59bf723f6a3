//! The [`smdl!`] document-builder macro.

/// Builds a [`Document`](crate::Document) from a literal description.
///
/// Entries are comma-separated. A bare string literal is a flag; `key:
/// value` assigns the `Display` rendering of `value`; `key: { ... }` nests
/// another document. Every entry goes through
/// [`Document::set`](crate::Document::set), so values are normalized exactly
/// as if set by hand. An empty nested block collapses to a flag, since a
/// blank value is a flag by definition.
///
/// # Examples
///
/// ```rust
/// use smdl::smdl;
///
/// let document = smdl! {
///     "name": "Violet",
///     "pinned",
///     "retries": 3,
///     "server": {
///         "host": "127.0.0.1",
///         "port": 8080,
///     },
/// };
///
/// assert_eq!(document.string_value("name").unwrap(), "Violet");
/// assert!(!document.get("pinned").unwrap().has_value());
/// assert_eq!(document.len(), 4);
/// ```
#[macro_export]
macro_rules! smdl {
    // Empty document
    () => {
        $crate::Document::new()
    };

    // End of entries (possibly after a trailing comma)
    (@entries $doc:ident,) => {};

    // Nested document entry
    (@entries $doc:ident, $key:literal : { $($inner:tt)* }, $($rest:tt)*) => {
        $crate::smdl!(@entries $doc, $key : { $($inner)* });
        $crate::smdl!(@entries $doc, $($rest)*);
    };
    (@entries $doc:ident, $key:literal : { $($inner:tt)* }) => {
        $doc.set(
            $key,
            ::core::option::Option::Some(&$crate::smdl!($($inner)*).render($doc.depth() + 1)),
        );
    };

    // Value entry
    (@entries $doc:ident, $key:literal : $value:expr, $($rest:tt)*) => {
        $crate::smdl!(@entries $doc, $key : $value);
        $crate::smdl!(@entries $doc, $($rest)*);
    };
    (@entries $doc:ident, $key:literal : $value:expr) => {
        $doc.set_value($key, $value);
    };

    // Flag entry
    (@entries $doc:ident, $key:literal, $($rest:tt)*) => {
        $crate::smdl!(@entries $doc, $key);
        $crate::smdl!(@entries $doc, $($rest)*);
    };
    (@entries $doc:ident, $key:literal) => {
        $doc.set_flag($key);
    };

    // Entry list (public catch-all — must come after the `@entries` helper
    // arms so internal `@entries` calls don't re-match this rule)
    ($($entries:tt)+) => {{
        let mut document = $crate::Document::new();
        $crate::smdl!(@entries document, $($entries)+);
        document
    }};
}
