//! Tag catalogs and synthetic markers used by the rewriter.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup),
//! plus the marker strings the rewriter emits in place of elided tags. The
//! markers are HTML comments (or bracketed placeholders for links) so they
//! survive the intermediate markup untouched and are resolved by the
//! normalizer.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Synthetic markers ===

/// Emitted in place of a table-cell open tag; resolved to `<p>` later.
pub const CELL_START: &str = "<!--CELL_START-->";

/// Emitted in place of a table-cell close tag.
pub const CELL_END: &str = "<!--CELL_END-->";

/// Emitted in place of a `<div>` open tag; resolved to `<p>` later.
pub const DIV_START: &str = "<!--DIV_START-->";

/// Emitted in place of a `</div>` close tag.
pub const DIV_END: &str = "<!--DIV_END-->";

/// Placeholder replacing a normal anchor's open tag.
pub const LINK_START: &str = "[link]";

/// Placeholder replacing a normal anchor's close tag.
pub const LINK_END: &str = "[/link]";

// === Tag Lists (arrays for iteration) ===

/// Tags that never receive a separate end-tag emission.
pub static SELF_CLOSING_TAGS: [&str; 3] = ["img", "br", "hr"];

/// Table-structural tags elided entirely during flattening; their content
/// flows through unchanged.
pub static STRUCTURAL_TABLE_TAGS: [&str; 5] = ["table", "thead", "tbody", "tfoot", "tr"];

/// Table-cell tags converted to paragraph markers during flattening.
pub static CELL_TAGS: [&str; 2] = ["td", "th"];

/// HTML void elements: they produce no end tag, so they must never open a
/// depth-counted region (removal or pretext capture).
pub static VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content the tokenizer must treat as raw text.
pub static RAWTEXT_TAGS: [&str; 6] = ["style", "xmp", "iframe", "noembed", "noframes", "noscript"];

/// Elements whose content the tokenizer must treat as RCDATA (text with
/// character references, no tags).
pub static RCDATA_TAGS: [&str; 2] = ["title", "textarea"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `SELF_CLOSING_TAGS` as a `HashSet`
pub static SELF_CLOSING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SELF_CLOSING_TAGS.into_iter().collect());

/// `STRUCTURAL_TABLE_TAGS` as a `HashSet`
pub static STRUCTURAL_TABLE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STRUCTURAL_TABLE_TAGS.into_iter().collect());

/// `CELL_TAGS` as a `HashSet`
pub static CELL_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CELL_TAGS.into_iter().collect());

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_TAGS.into_iter().collect());

/// `RAWTEXT_TAGS` as a `HashSet`
pub static RAWTEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RAWTEXT_TAGS.into_iter().collect());

/// `RCDATA_TAGS` as a `HashSet`
pub static RCDATA_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RCDATA_TAGS.into_iter().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_closing_set_contains_void_elements() {
        assert!(SELF_CLOSING_TAG_SET.contains("img"));
        assert!(SELF_CLOSING_TAG_SET.contains("br"));
        assert!(SELF_CLOSING_TAG_SET.contains("hr"));
        assert!(!SELF_CLOSING_TAG_SET.contains("p"));
    }

    #[test]
    fn void_set_covers_self_closing_output_tags() {
        for tag in SELF_CLOSING_TAGS {
            assert!(VOID_TAG_SET.contains(tag));
        }
        assert!(VOID_TAG_SET.contains("input"));
        assert!(!VOID_TAG_SET.contains("span"));
    }

    #[test]
    fn structural_and_cell_sets_are_disjoint() {
        for tag in CELL_TAGS {
            assert!(!STRUCTURAL_TABLE_TAG_SET.contains(tag));
        }
    }
}
