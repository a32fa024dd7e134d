//! # email_safe_html
//!
//! Transforms arbitrary HTML markup into a restricted, email-safe subset.
//!
//! A bounded vocabulary of tags survives; everything else is either
//! unwrapped (content kept, tag dropped) or removed wholesale. Attributes
//! are filtered per-tag, tables are flattened into paragraphs, and
//! incidental noise (tracking pixels, hidden "pretext" spans used to fool
//! spam filters, `&nbsp;` runs, empty tags) is normalized away. The
//! document title, hidden pretexts, and discovered links are collected and
//! reported in a header above the cleaned body.
//!
//! ## Quick Start
//!
//! ```rust
//! use email_safe_html::clean;
//!
//! let html = r#"<div class="wrap"><span style="font-size:12px">Hello</span></div>"#;
//! let result = clean(html);
//! assert_eq!(result.text, "<p>Hello</p>");
//! ```
//!
//! ## Guarantees
//!
//! - Best-effort cleanup beats hard failure: malformed markup is tolerated,
//!   and on the one genuine parse-failure condition the original input is
//!   returned unmodified with the detail in
//!   [`CleanResult::parse_failure`] — never a corrupted partial rewrite.
//! - One invocation owns all its state; concurrent calls over different
//!   documents are safe.
//!
//! This is deliberately **not** a security sanitizer: it does not defend
//! against XSS, and visual fidelity is sacrificed for a compact, readable,
//! linear text representation.

mod config;
mod error;
mod normalize;
mod patterns;
mod result;

/// Streaming token-level rewriter (tag policy, side-channel collection).
pub mod rewriter;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

// Public API - re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use result::CleanResult;
pub use rewriter::{rewrite, Rewritten};

/// Clean an HTML document or selection using the default configuration.
///
/// # Example
///
/// ```rust
/// use email_safe_html::clean;
///
/// let result = clean(r#"<table><tr><td>A</td><td>B</td></tr></table>"#);
/// assert_eq!(result.text, "<p>A</p>\n<p>B</p>");
/// ```
#[must_use]
pub fn clean(html: &str) -> CleanResult {
    clean_with_config(html, &Config::default())
}

/// Clean an HTML document or selection with a custom configuration.
///
/// Never panics and never returns an error: if the tokenizer cannot make
/// sense of the input, the returned `text` is the raw input unchanged and
/// [`CleanResult::parse_failure`] carries the detail for the caller to
/// surface.
#[must_use]
pub fn clean_with_config(html: &str, config: &Config) -> CleanResult {
    match rewriter::rewrite(html, config) {
        Ok(rewritten) => {
            let body = normalize::normalize(&rewritten.html, config);
            let text = normalize::assemble_header(
                rewritten.title.as_deref(),
                &rewritten.pretexts,
                &rewritten.links,
                &body,
            );
            CleanResult {
                text,
                title: rewritten.title,
                pretexts: rewritten.pretexts,
                links: rewritten.links,
                parse_failure: None,
            }
        }
        Err(err) => CleanResult {
            text: html.to_string(),
            parse_failure: Some(err.to_string()),
            ..CleanResult::default()
        },
    }
}

/// Clean HTML bytes with automatic charset detection.
///
/// Detects the encoding from meta tags (first 1024 bytes), transcodes to
/// UTF-8, then cleans with the default configuration.
#[must_use]
pub fn clean_bytes(html: &[u8]) -> CleanResult {
    clean(&encoding::transcode_to_utf8(html))
}

/// Clean HTML bytes with automatic charset detection and a custom
/// configuration.
#[must_use]
pub fn clean_bytes_with_config(html: &[u8], config: &Config) -> CleanResult {
    clean_with_config(&encoding::transcode_to_utf8(html), config)
}
