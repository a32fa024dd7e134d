//! Compiled regex patterns for the rewriter and normalizer.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by their purpose in the cleaning pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Inline-Style Inspection Patterns
// =============================================================================

/// Matches style declarations that hide an element (pretext detection).
/// Spacing around the colon is irrelevant; matching is case-insensitive.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:display\s*:\s*none|visibility\s*:\s*hidden|mso-hide\s*:\s*all|max-height\s*:\s*0|opacity\s*:\s*0)",
    )
    .expect("HIDDEN_STYLE regex")
});

/// Matches a bold font-weight declaration in an inline style.
pub static BOLD_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)font-weight\s*:\s*bold").expect("BOLD_STYLE regex"));

/// Matches a 1px width declaration in an inline style (tracking pixels).
pub static PIXEL_WIDTH_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)width\s*:\s*1px").expect("PIXEL_WIDTH_STYLE regex"));

/// Matches a 1px height declaration in an inline style (tracking pixels).
pub static PIXEL_HEIGHT_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)height\s*:\s*1px").expect("PIXEL_HEIGHT_STYLE regex"));

// =============================================================================
// Marker Conversion Patterns
// =============================================================================

/// Matches one table-cell span emitted by the rewriter.
pub static CELL_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--CELL_START-->(.*?)<!--CELL_END-->").expect("CELL_SPAN regex")
});

/// Matches one div span emitted by the rewriter.
pub static DIV_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--DIV_START-->(.*?)<!--DIV_END-->").expect("DIV_SPAN regex")
});

/// Matches cell content that is already wrapped in a paragraph tag, to
/// avoid double-wrapping during cell conversion.
pub static LEADING_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^<p[\s>]").expect("LEADING_PARAGRAPH regex"));

// =============================================================================
// Text Cleanup Patterns
// =============================================================================

/// Matches a run of two or more `&nbsp;` entities (possibly whitespace
/// separated).
pub static NBSP_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(&nbsp;\s*){2,}").expect("NBSP_RUN regex"));

/// Matches any remaining stray run of whitespace and `&nbsp;` entities.
pub static NBSP_STRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*&nbsp;\s*)+").expect("NBSP_STRAY regex"));

/// Matches a candidate empty tag pair. The open and close names are captured
/// separately because the regex engine has no backreferences; the caller
/// compares them for equality before removing the pair.
pub static EMPTY_TAG_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w+)[^>]*>\s*</(\w+)>").expect("EMPTY_TAG_PAIR regex"));

/// Matches three or more consecutive blank-ish lines.
pub static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("EXCESS_BLANK_LINES regex"));

/// Matches the closing tag of a block-level element.
pub static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</(?:p|div|h[1-6]|tr|li|ul|ol|table|blockquote)>)").expect("BLOCK_CLOSE regex")
});

/// Matches any whitespace run (collapse-all mode).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches runs of the space character.
pub static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("SPACE_RUN regex"));

/// Horizontal whitespace between a block-closing tag and the next tag-open
/// (line breaks inserted earlier are preserved).
pub static BLOCK_CLOSE_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</(?:p|div|h[1-6]|tr|li|ul|ol|table|blockquote|br|hr|img)>)[ \t]+(<)")
        .expect("BLOCK_CLOSE_GAP regex")
});

/// Horizontal whitespace after a tag-close bracket before a block tag.
pub static BLOCK_OPEN_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(>)[ \t]+(</?(?:p|div|h[1-6]|tr|li|ul|ol|table|blockquote|br|hr|img))")
        .expect("BLOCK_OPEN_GAP regex")
});

/// As `BLOCK_CLOSE_GAP`, but eating newlines too (collapse-all mode).
pub static BLOCK_CLOSE_GAP_ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</(?:p|div|h[1-6]|tr|li|ul|ol|table|blockquote|br|hr|img)>)\s+(<)")
        .expect("BLOCK_CLOSE_GAP_ALL regex")
});

/// As `BLOCK_OPEN_GAP`, but eating newlines too (collapse-all mode).
pub static BLOCK_OPEN_GAP_ALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(>)\s+(</?(?:p|div|h[1-6]|tr|li|ul|ol|table|blockquote|br|hr|img))")
        .expect("BLOCK_OPEN_GAP_ALL regex")
});

// =============================================================================
// Paragraph Cleanup Patterns
// =============================================================================

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Whitespace immediately inside a paragraph-open tag.
pub static PARAGRAPH_OPEN_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s+").expect("PARAGRAPH_OPEN_SPACE regex"));

/// Whitespace immediately before a paragraph-close tag.
pub static PARAGRAPH_CLOSE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+</p>").expect("PARAGRAPH_CLOSE_SPACE regex"));

/// An empty paragraph, absorbing any trailing newlines it leaves behind.
pub static EMPTY_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s*</p>\n*").expect("EMPTY_PARAGRAPH regex"));

/// A paragraph containing only whitespace and `&nbsp;` entities.
pub static NBSP_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(\s*&nbsp;\s*)*</p>\n*").expect("NBSP_PARAGRAPH regex"));

/// A dangling paragraph-open tag stranded at the very start of the string.
pub static DANGLING_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<p>\s*\n").expect("DANGLING_PARAGRAPH regex"));
