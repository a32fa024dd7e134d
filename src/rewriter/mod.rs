//! Streaming HTML-to-HTML rewriter.
//!
//! Drives the html5ever tokenizer over the input and applies the per-token
//! cleaning policy in [`sink::RewriteSink`]. The rewriter emits an
//! intermediate marked-up string (synthetic cell/div markers, `[link]`
//! placeholders) which the normalizer resolves, plus three side-channels:
//! the document title, hidden-pretext strings, and an ordered-unique link
//! list.

mod sink;
mod style;

/// Tag catalogs and the synthetic marker strings shared with the normalizer.
pub mod tags;

pub use sink::{Rewritten, RewriteSink};

use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use tendril::StrTendril;

use crate::config::Config;
use crate::error::Result;

/// Rewrite one document or selection.
///
/// Consumes the whole token stream synchronously; state is created fresh
/// here and consumed by the returned [`Rewritten`]. Fails only on the
/// malformed-input condition described in [`crate::Error::Parse`], in
/// which case the caller must fall back to the unmodified input.
pub fn rewrite(html: &str, config: &Config) -> Result<Rewritten> {
    let sink = RewriteSink::new(config);
    let mut tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.finish()
}
