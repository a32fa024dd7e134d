//! Text normalization over the rewriter's output.
//!
//! A fixed, ordered sequence of whole-string rewrites: marker-to-paragraph
//! conversion, `&nbsp;` collapsing, bounded empty-tag elision, whitespace
//! shaping, paragraph cleanup, and finally header assembly. Every stage is
//! a single linear scan or a bounded-iteration fixpoint, so pathological
//! input degrades to incomplete cleanup rather than unbounded work.

use regex::Captures;

use crate::config::Config;
use crate::patterns::{
    BLOCK_CLOSE, BLOCK_CLOSE_GAP, BLOCK_CLOSE_GAP_ALL, BLOCK_OPEN_GAP, BLOCK_OPEN_GAP_ALL,
    CELL_SPAN, DANGLING_PARAGRAPH, DIV_SPAN, EMPTY_PARAGRAPH, EMPTY_TAG_PAIR, EXCESS_BLANK_LINES,
    LEADING_PARAGRAPH, MULTIPLE_NEWLINES, NBSP_PARAGRAPH, NBSP_RUN, NBSP_STRAY,
    PARAGRAPH_CLOSE_SPACE, PARAGRAPH_OPEN_SPACE, SPACE_RUN, WHITESPACE_RUN,
};
use crate::rewriter::tags::{CELL_END, CELL_START, DIV_END, DIV_START};

/// Nested empty tags deeper than this survive the empty-tag pass; a known,
/// accepted limitation.
const EMPTY_TAG_PASSES: usize = 3;

/// Apply the full normalization sequence to the rewriter's concatenated
/// output. Purely functional: string in, string out.
#[must_use]
pub fn normalize(html: &str, config: &Config) -> String {
    let mut result = html.to_string();

    // 1. Table-cell markers become paragraphs.
    if config.flatten_tables {
        result = convert_cells_to_paragraphs(&result);
    }

    // 2. Successive &nbsp; entities collapse to a single space, then any
    //    stray remainder does too.
    if config.collapse_nbsp_runs {
        result = NBSP_RUN.replace_all(&result, " ").into_owned();
        result = NBSP_STRAY.replace_all(&result, " ").into_owned();
    }

    // 3. Empty tag pairs, iterated for nested empties.
    if config.remove_empty_tags {
        for _ in 0..EMPTY_TAG_PASSES {
            result = strip_empty_tag_pairs(&result);
        }
    }

    // 4. Whitespace shaping.
    if config.preserve_line_breaks {
        result = EXCESS_BLANK_LINES.replace_all(&result, "\n\n").into_owned();
        // A line break after each block element keeps the output readable.
        result = BLOCK_CLOSE.replace_all(&result, "${1}\n").into_owned();
    } else {
        result = WHITESPACE_RUN.replace_all(&result, " ").into_owned();
    }

    // 5. Space runs, then gaps between block tags (spaces around inline
    //    tags like <b> or <a> are content and stay).
    result = SPACE_RUN.replace_all(&result, " ").into_owned();
    if config.preserve_line_breaks {
        result = BLOCK_CLOSE_GAP.replace_all(&result, "${1}${2}").into_owned();
        result = BLOCK_OPEN_GAP.replace_all(&result, "${1}${2}").into_owned();
    } else {
        result = BLOCK_CLOSE_GAP_ALL
            .replace_all(&result, "${1}${2}")
            .into_owned();
        result = BLOCK_OPEN_GAP_ALL
            .replace_all(&result, "${1}${2}")
            .into_owned();
    }

    // 6.
    result = result.trim().to_string();

    // 7. Div markers become paragraphs.
    result = convert_divs_to_paragraphs(&result);

    // 8. Per-line trim, then at most one blank line in a row.
    result = result
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    result = MULTIPLE_NEWLINES.replace_all(&result, "\n\n").into_owned();

    // 9. No whitespace hugging the inside of a paragraph.
    result = PARAGRAPH_OPEN_SPACE.replace_all(&result, "<p>").into_owned();
    result = PARAGRAPH_CLOSE_SPACE
        .replace_all(&result, "</p>")
        .into_owned();

    // 10. Paragraphs left empty by earlier stages.
    result = EMPTY_PARAGRAPH.replace_all(&result, "").into_owned();
    result = NBSP_PARAGRAPH.replace_all(&result, "").into_owned();

    // 11. A dangling open paragraph stranded at the very start.
    result = DANGLING_PARAGRAPH.replace(&result, "").into_owned();

    // 12.
    result.trim().to_string()
}

/// Prepend the collected header data (title, pretexts, links) to the
/// normalized body. Header blocks are separated by one blank line; the
/// whole header is separated from the body by two.
#[must_use]
pub fn assemble_header(
    title: Option<&str>,
    pretexts: &[String],
    links: &[String],
    body: &str,
) -> String {
    let mut header_parts: Vec<String> = Vec::new();

    if let Some(title) = title {
        if !title.is_empty() {
            header_parts.push(format!("Title: {title}"));
        }
    }

    if !pretexts.is_empty() {
        let pretext_block = pretexts
            .iter()
            .map(|pretext| format!("Pretext: {pretext}"))
            .collect::<Vec<_>>()
            .join("\n");
        header_parts.push(pretext_block);
    }

    if !links.is_empty() {
        header_parts.push(format!("Links:\n{}", links.join("\n")));
    }

    if header_parts.is_empty() {
        body.to_string()
    } else {
        format!("{}\n\n\n{}", header_parts.join("\n\n"), body)
    }
}

/// Replace each cell-marker span with a paragraph around its trimmed
/// content, unless the content already starts with a paragraph tag. Any
/// unmatched leftover markers (malformed or nested tables) are stripped.
fn convert_cells_to_paragraphs(html: &str) -> String {
    let converted = CELL_SPAN.replace_all(html, |caps: &Captures| {
        let content = caps[1].trim();
        if content.is_empty() {
            String::new()
        } else if LEADING_PARAGRAPH.is_match(content) {
            content.to_string()
        } else {
            format!("<p>{content}</p>")
        }
    });
    converted.replace(CELL_START, "").replace(CELL_END, "")
}

/// Replace each div-marker span with a paragraph around its trimmed
/// content (empty spans vanish); strip unmatched leftovers.
fn convert_divs_to_paragraphs(html: &str) -> String {
    let converted = DIV_SPAN.replace_all(html, |caps: &Captures| {
        let content = caps[1].trim();
        if content.is_empty() {
            String::new()
        } else {
            format!("<p>{content}</p>")
        }
    });
    converted.replace(DIV_START, "").replace(DIV_END, "")
}

/// One pass of empty-pair removal. The regex engine has no backreferences,
/// so the open/close names are captured separately and compared here;
/// non-matching pairs are left untouched.
fn strip_empty_tag_pairs(html: &str) -> String {
    EMPTY_TAG_PAIR
        .replace_all(html, |caps: &Captures| {
            if caps[1] == caps[2] {
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
