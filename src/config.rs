//! Cleaning policy configuration.
//!
//! The `Config` struct is the single source of behavioral variation: tag
//! classification sets, per-tag attribute allow-lists, and boolean toggles.
//! It is immutable for the duration of a cleaning run and threaded through
//! the rewriter and normalizer as a shared reference, never process-wide
//! state, so concurrent invocations over multiple documents are safe.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Policy record controlling the cleaning behavior.
///
/// Tags fall into three classes:
/// - **keep**: open/close markup preserved in output,
/// - **remove-with-content**: tag and entire subtree deleted,
/// - everything else: unwrapped (tag dropped, content kept).
///
/// All fields are public for easy configuration. Use `Config::default()`
/// for standard email-cleaning settings, or deserialize host-editor
/// settings JSON via [`Config::from_json`].
///
/// # Example
///
/// ```rust
/// use email_safe_html::Config;
///
/// let config = Config {
///     convert_b_to_strong: true,
///     ..Config::default()
/// };
/// assert!(config.keep_tags.contains("p"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Tags whose markup survives in the output. Everything absent from
    /// both this set and `remove_with_content` is unwrapped.
    pub keep_tags: HashSet<String>,

    /// Tags removed together with their entire content.
    ///
    /// Invariant: disjoint from `keep_tags` (checked by [`Config::validate`]).
    pub remove_with_content: HashSet<String>,

    /// Table tags subject to flattening: structural ones (`table`, `thead`,
    /// `tbody`, `tfoot`, `tr`) are elided, cell tags (`td`, `th`) become
    /// paragraph markers.
    pub table_tags: HashSet<String>,

    /// Per-tag attribute allow-lists. The key `"*"` applies to all tags.
    /// Attributes not listed (and not already stripped by the flags below)
    /// are dropped.
    pub keep_attributes: HashMap<String, Vec<String>>,

    /// Case-insensitive substrings of `href` values that make an anchor an
    /// inline exception: such links are rendered as literal `<a>` tags
    /// instead of `[link]` markers and never enter the collected link list.
    ///
    /// Default: `mailto`, `disclosure`, `privacy`
    pub inline_anchor_keywords: Vec<String>,

    /// Capture the document title and report it in the output header.
    ///
    /// Default: `true`
    pub extract_title: bool,

    /// Drop `class` attributes.
    ///
    /// Default: `true`
    pub strip_classes: bool,

    /// Drop `id` attributes.
    ///
    /// Default: `true`
    pub strip_ids: bool,

    /// Drop `style` attributes. Bold inline styles are still honored via
    /// synthetic `<b>` reconstruction before the attribute is dropped.
    ///
    /// Default: `true`
    pub strip_inline_styles: bool,

    /// Drop `data-*` attributes.
    ///
    /// Default: `true`
    pub strip_data_attributes: bool,

    /// Strip tag pairs whose content is pure whitespace (bounded at three
    /// passes, handling nesting depth up to 3).
    ///
    /// Default: `true`
    pub remove_empty_tags: bool,

    /// Discard HTML comments.
    ///
    /// Default: `true`
    pub remove_comments: bool,

    /// Rename `b` to `strong` and `i` to `em` before the keep/unwrap
    /// decision.
    ///
    /// Default: `false`
    pub convert_b_to_strong: bool,

    /// Collapse runs of two or more `&nbsp;` entities into a single space.
    ///
    /// Default: `true`
    pub collapse_nbsp_runs: bool,

    /// Unwrap `span` tags (content kept, markup dropped).
    ///
    /// Default: `true`
    pub unwrap_spans: bool,

    /// Keep some line structure in the output instead of collapsing all
    /// whitespace to single spaces.
    ///
    /// Default: `true`
    pub preserve_line_breaks: bool,

    /// Flatten tables: elide structural tags, turn cells into paragraphs.
    ///
    /// Default: `true`
    pub flatten_tables: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keep_tags: [
                // Structure
                "p", "br", "hr",
                // Headings
                "h1", "h2", "h3", "h4", "h5", "h6",
                // Inline formatting
                "strong", "b", "em", "i", "s", "strike",
                // Links and images
                "a", "img",
                // Lists
                "ul", "ol", "li",
                // Other
                "blockquote", "pre", "code",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            remove_with_content: [
                "script", "style", "noscript", "iframe", "object", "embed",
                "form", "input", "button", "select", "textarea",
                "nav", "header", "footer", "aside",
                "svg", "canvas",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            table_tags: ["table", "thead", "tbody", "tfoot", "tr", "td", "th"]
                .into_iter()
                .map(String::from)
                .collect(),
            keep_attributes: [
                ("a", vec!["href", "title"]),
                ("img", vec!["src", "alt", "width", "height"]),
            ]
            .into_iter()
            .map(|(tag, attrs)| {
                (
                    tag.to_string(),
                    attrs.into_iter().map(String::from).collect(),
                )
            })
            .collect(),
            inline_anchor_keywords: ["mailto", "disclosure", "privacy"]
                .into_iter()
                .map(String::from)
                .collect(),
            extract_title: true,
            strip_classes: true,
            strip_ids: true,
            strip_inline_styles: true,
            strip_data_attributes: true,
            remove_empty_tags: true,
            remove_comments: true,
            convert_b_to_strong: false,
            collapse_nbsp_runs: true,
            unwrap_spans: true,
            preserve_line_breaks: true,
            flatten_tables: true,
        }
    }
}

impl Config {
    /// Deserialize a configuration from host-editor settings JSON.
    ///
    /// Missing fields fall back to their defaults, so a settings file only
    /// needs to name the options it overrides. The result is validated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use email_safe_html::Config;
    ///
    /// let config = Config::from_json(r#"{ "convert_b_to_strong": true }"#)?;
    /// assert!(config.convert_b_to_strong);
    /// assert!(config.strip_classes); // default preserved
    /// # Ok::<(), email_safe_html::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// `keep_tags` and `remove_with_content` must be disjoint: a tag cannot
    /// both survive and be deleted with its content.
    pub fn validate(&self) -> Result<()> {
        let mut overlap: Vec<&str> = self
            .keep_tags
            .intersection(&self.remove_with_content)
            .map(String::as_str)
            .collect();
        if overlap.is_empty() {
            return Ok(());
        }
        overlap.sort_unstable();
        Err(Error::Config(format!(
            "tags listed in both keep_tags and remove_with_content: {}",
            overlap.join(", ")
        )))
    }

    /// Whether a tag's markup is preserved in the output.
    #[must_use]
    pub fn is_kept(&self, tag: &str) -> bool {
        self.keep_tags.contains(tag)
    }

    /// Whether a tag is deleted together with its content.
    #[must_use]
    pub fn is_removed_with_content(&self, tag: &str) -> bool {
        self.remove_with_content.contains(tag)
    }

    /// Whether an href makes its anchor an inline exception.
    #[must_use]
    pub fn is_inline_anchor(&self, href: &str) -> bool {
        let href_lower = href.to_lowercase();
        self.inline_anchor_keywords
            .iter()
            .any(|keyword| href_lower.contains(keyword))
    }

    /// Whether an attribute name is allow-listed for a tag (tag-specific or
    /// wildcard entry).
    #[must_use]
    pub fn is_attribute_allowed(&self, tag: &str, attr: &str) -> bool {
        let listed = |key: &str| {
            self.keep_attributes
                .get(key)
                .is_some_and(|names| names.iter().any(|name| name == attr))
        };
        listed(tag) || listed("*")
    }
}
