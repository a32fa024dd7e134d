//! Result types for cleaning output.
//!
//! This module defines the structured output of a cleaning run: the final
//! text plus the side-channels collected by the rewriter.

use serde::{Deserialize, Serialize};

/// Result of cleaning one HTML document or selection.
///
/// `text` is the complete output, header included. The side-channels that
/// went into the header (title, pretexts, links) are also exposed
/// individually for callers that want to present them separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanResult {
    /// The cleaned text, with the assembled header prepended.
    ///
    /// When `parse_failure` is set this is byte-identical to the raw input:
    /// a failed parse never produces a partial rewrite.
    pub text: String,

    /// Document title captured from the `<title>` element, if any.
    pub title: Option<String>,

    /// Hidden-pretext strings, in capture order.
    pub pretexts: Vec<String>,

    /// Link targets discovered in anchors, unique, in first-seen order.
    /// Inline-exception anchors (mailto, disclosure, privacy) are excluded.
    pub links: Vec<String>,

    /// Failure detail when the tokenizer could not make sense of the input.
    ///
    /// The caller should surface this to the user and must not apply a
    /// partial edit; `text` already carries the untouched original.
    pub parse_failure: Option<String>,
}

impl CleanResult {
    /// Whether the run fell back to returning the original input.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.parse_failure.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_result_is_empty_and_not_fallback() {
        let result = CleanResult::default();
        assert!(result.text.is_empty());
        assert!(result.title.is_none());
        assert!(result.pretexts.is_empty());
        assert!(result.links.is_empty());
        assert!(!result.is_fallback());
    }
}
