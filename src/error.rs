//! Error types for email_safe_html.
//!
//! This module defines the error types returned by cleaning operations.

/// Error type for cleaning operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tokenizer could not make sense of the input markup.
    ///
    /// Raised when the document ends while still inside an unclosed
    /// remove-with-content or hidden-pretext region (for example a
    /// `<script>` element that is never closed), so the rewritten output
    /// would have silently swallowed the rest of the document.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// The supplied configuration is invalid or could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
