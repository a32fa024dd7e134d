//! The per-token rewrite policy.
//!
//! `RewriteSink` receives the flat token stream from the html5ever tokenizer
//! and applies the cleaning policy to each token, emitting string fragments
//! into an append-only output buffer. Nested special regions (content
//! removal, hidden-pretext capture) are tracked with plain depth counters
//! rather than a tree walk, keeping per-token work O(1). Bold-style
//! reconstruction uses an explicit LIFO stack tied to matched start/end
//! pairs, since the tokenizer delivers a flat event stream.
//!
//! All state lives in one sink instance and is consumed by
//! [`RewriteSink::finish`]; nothing survives across documents.

use std::collections::HashSet;

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{TagKind, Token, TokenSink, TokenSinkResult};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rewriter::style::{self, Attr};
use crate::rewriter::tags::{
    CELL_END, CELL_START, CELL_TAG_SET, DIV_END, DIV_START, LINK_END, LINK_START, RAWTEXT_TAG_SET,
    RCDATA_TAG_SET, SELF_CLOSING_TAG_SET, VOID_TAG_SET,
};

/// Everything one rewrite pass produces: the intermediate marked-up HTML
/// plus the three side-channels.
#[derive(Debug, Default)]
pub struct Rewritten {
    /// Concatenated output fragments, still carrying synthetic markers.
    pub html: String,
    /// Document title, trimmed, if one was captured.
    pub title: Option<String>,
    /// Hidden-pretext strings in capture order.
    pub pretexts: Vec<String>,
    /// Unique link targets in first-seen order.
    pub links: Vec<String>,
}

/// Token sink applying the cleaning policy. One instance per invocation.
pub struct RewriteSink<'a> {
    config: &'a Config,

    /// Append-only output fragments, concatenated once at the end.
    out: Vec<String>,

    /// Depth of nested remove-with-content regions; >0 discards tokens.
    skip_depth: usize,

    /// Depth of nested hidden-pretext regions; >0 diverts text tokens.
    pretext_depth: usize,
    pretext_buf: String,
    pretexts: Vec<String>,

    /// Tags currently under synthetic bold styling (LIFO).
    bold_stack: Vec<String>,

    /// Open anchors rendered literally instead of as link markers.
    inline_anchor_depth: usize,

    links: Vec<String>,
    seen_links: HashSet<String>,

    title: Option<String>,
    in_title: bool,
    title_buf: String,
}

impl<'a> RewriteSink<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            out: Vec::new(),
            skip_depth: 0,
            pretext_depth: 0,
            pretext_buf: String::new(),
            pretexts: Vec::new(),
            bold_stack: Vec::new(),
            inline_anchor_depth: 0,
            links: Vec::new(),
            seen_links: HashSet::new(),
            title: None,
            in_title: false,
            title_buf: String::new(),
        }
    }

    /// Consume the sink after tokenization, yielding the rewrite output.
    ///
    /// An unclosed removal or pretext region at end of input means the
    /// rewrite silently swallowed the tail of the document; that is the
    /// malformed-input condition the caller falls back on.
    pub fn finish(mut self) -> Result<Rewritten> {
        if self.skip_depth > 0 {
            return Err(Error::Parse(
                "document ended inside an unclosed remove-with-content element".to_string(),
            ));
        }
        if self.pretext_depth > 0 {
            return Err(Error::Parse(
                "document ended inside an unclosed hidden element".to_string(),
            ));
        }
        if self.in_title {
            // Unterminated <title>: freeze what was buffered.
            self.in_title = false;
            self.title = Some(self.title_buf.trim().to_string());
        }
        Ok(Rewritten {
            html: self.out.concat(),
            title: self.title.filter(|title| !title.is_empty()),
            pretexts: self.pretexts,
            links: self.links,
        })
    }

    fn handle_start_tag(&mut self, name: &str, attrs: &[Attr], self_closing: bool) {
        // Title capture wins over every skip state so a title is never
        // swallowed by content removal elsewhere.
        if self.config.extract_title && name == "title" && self.title.is_none() && !self.in_title {
            self.in_title = true;
            return;
        }

        let void = self_closing || VOID_TAG_SET.contains(name);

        // Inside a removed region: only same-kind nesting matters.
        if self.skip_depth > 0 {
            if self.config.is_removed_with_content(name) && !void {
                self.skip_depth += 1;
            }
            return;
        }

        // Entering a removed region. Void removable tags (input, embed)
        // have no end tag and are dropped without opening a region.
        if self.config.is_removed_with_content(name) {
            if !void {
                self.skip_depth = 1;
            }
            return;
        }

        // Inside a hidden-pretext region: track nesting, capture nothing
        // here (text tokens are diverted separately).
        if self.pretext_depth > 0 {
            if !void {
                self.pretext_depth += 1;
            }
            return;
        }

        // Entering a hidden-pretext region. A hidden void element carries
        // no text, so it is simply dropped.
        if style::is_hidden(attrs) {
            if !void {
                self.pretext_depth = 1;
            }
            return;
        }

        // Table flattening: structural tags elided, cells become markers.
        if self.config.flatten_tables && self.config.table_tags.contains(name) {
            if CELL_TAG_SET.contains(name) {
                self.out.push(CELL_START.to_string());
            }
            return;
        }

        // Generic block containers become paragraph markers.
        if name == "div" {
            self.out.push(DIV_START.to_string());
            return;
        }

        if name == "span" && self.config.unwrap_spans {
            return;
        }

        if name == "img" && style::is_tracking_pixel(attrs) {
            return;
        }

        let name = self.renamed(name);

        // Not kept: unwrap, content flows through.
        if !self.config.is_kept(name) {
            return;
        }

        if name == "a" {
            self.handle_anchor_start(attrs);
            return;
        }

        let filtered = self.filter_attributes(name, attrs);
        // Bold detection looks at the original attributes, before the
        // style attribute itself is stripped.
        let is_bold = style::has_bold_style(attrs);
        let self_closing_output = SELF_CLOSING_TAG_SET.contains(name);

        let mut markup = String::with_capacity(name.len() + 2);
        markup.push('<');
        markup.push_str(name);
        for (attr_name, value) in &filtered {
            markup.push(' ');
            markup.push_str(attr_name);
            markup.push_str("=\"");
            markup.push_str(&escape_attribute(value));
            markup.push('"');
        }
        if self_closing_output {
            markup.push_str(" />");
        } else {
            markup.push('>');
        }
        self.out.push(markup);

        if is_bold && !self_closing_output {
            self.bold_stack.push(name.to_string());
            self.out.push("<b>".to_string());
        }
    }

    fn handle_end_tag(&mut self, name: &str) {
        if name == "title" && self.in_title {
            self.in_title = false;
            self.title = Some(std::mem::take(&mut self.title_buf).trim().to_string());
            return;
        }

        let void = VOID_TAG_SET.contains(name);

        if self.skip_depth > 0 {
            if self.config.is_removed_with_content(name) && !void {
                self.skip_depth -= 1;
            }
            return;
        }

        if self.pretext_depth > 0 {
            if void {
                return;
            }
            self.pretext_depth -= 1;
            if self.pretext_depth == 0 {
                self.flush_pretext();
            }
            return;
        }

        if self.config.flatten_tables && self.config.table_tags.contains(name) {
            if CELL_TAG_SET.contains(name) {
                self.out.push(CELL_END.to_string());
            }
            return;
        }

        if name == "div" {
            self.out.push(DIV_END.to_string());
            return;
        }

        if name == "span" && self.config.unwrap_spans {
            return;
        }

        let name = self.renamed(name);

        // Self-closing output tags never receive an end-tag emission; a
        // start/end pair must produce the same output as a true
        // self-closing token.
        if SELF_CLOSING_TAG_SET.contains(name) {
            return;
        }

        if !self.config.is_kept(name) {
            return;
        }

        if name == "a" {
            if self.inline_anchor_depth > 0 {
                self.out.push("</a>".to_string());
                self.inline_anchor_depth -= 1;
            } else {
                self.out.push(LINK_END.to_string());
            }
            return;
        }

        if self.bold_stack.last().is_some_and(|top| top == name) {
            self.out.push("</b>".to_string());
            self.bold_stack.pop();
        }
        self.out.push(format!("</{name}>"));
    }

    /// Anchors are special-cased: inline-exception hrefs stay literal
    /// anchors, everything else becomes a `[link]` marker with the href
    /// collected once into the ordered link list.
    fn handle_anchor_start(&mut self, attrs: &[Attr]) {
        let href = style::attr_value(attrs, "href");

        if let Some(href) = href {
            if !href.is_empty() && self.config.is_inline_anchor(href) {
                self.out
                    .push(format!("<a href=\"{}\">", escape_attribute(href)));
                self.inline_anchor_depth += 1;
                return;
            }
            if !href.is_empty() && !self.seen_links.contains(href) {
                self.seen_links.insert(href.to_string());
                self.links.push(href.to_string());
            }
        }
        self.out.push(LINK_START.to_string());
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_title {
            self.title_buf.push_str(text);
            return;
        }
        if self.skip_depth > 0 {
            return;
        }
        if self.pretext_depth > 0 {
            self.pretext_buf.push_str(text);
            return;
        }
        self.out.push(escape_text(text));
    }

    fn handle_comment(&mut self, text: &str) {
        if self.skip_depth > 0 || self.pretext_depth > 0 {
            return;
        }
        if !self.config.remove_comments {
            self.out.push(format!("<!--{text}-->"));
        }
    }

    /// Trim a captured pretext and record it if anything is left. Leading
    /// and trailing non-breaking spaces count as whitespace here, so a
    /// pretext of pure `&nbsp;` entities is dropped entirely.
    fn flush_pretext(&mut self) {
        let buffered = std::mem::take(&mut self.pretext_buf);
        let pretext = buffered.trim();
        if !pretext.is_empty() {
            self.pretexts.push(pretext.to_string());
        }
    }

    fn renamed<'n>(&self, name: &'n str) -> &'n str {
        if self.config.convert_b_to_strong {
            match name {
                "b" => "strong",
                "i" => "em",
                other => other,
            }
        } else {
            name
        }
    }

    /// Apply the strip flags and the per-tag/wildcard allow-lists. A
    /// missing attribute value has already been normalized to `""` by the
    /// tokenizer.
    fn filter_attributes(&self, tag: &str, attrs: &[Attr]) -> Vec<Attr> {
        attrs
            .iter()
            .filter(|(name, _)| {
                if name == "class" && self.config.strip_classes {
                    return false;
                }
                if name == "id" && self.config.strip_ids {
                    return false;
                }
                if name == "style" && self.config.strip_inline_styles {
                    return false;
                }
                if name.starts_with("data-") && self.config.strip_data_attributes {
                    return false;
                }
                self.config.is_attribute_allowed(tag, name)
            })
            .cloned()
            .collect()
    }
}

impl TokenSink for RewriteSink<'_> {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                let name: &str = &tag.name;
                match tag.kind {
                    TagKind::StartTag => {
                        let attrs: Vec<Attr> = tag
                            .attrs
                            .iter()
                            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                            .collect();
                        self.handle_start_tag(name, &attrs, tag.self_closing);
                        if !tag.self_closing {
                            // Keep the tokenizer in sync with raw-text
                            // content models so <script>/<style>/<title>
                            // bodies arrive as text, not markup.
                            if name == "script" {
                                return TokenSinkResult::RawData(RawKind::ScriptData);
                            }
                            if RAWTEXT_TAG_SET.contains(name) {
                                return TokenSinkResult::RawData(RawKind::Rawtext);
                            }
                            if RCDATA_TAG_SET.contains(name) {
                                return TokenSinkResult::RawData(RawKind::Rcdata);
                            }
                        }
                    }
                    TagKind::EndTag => self.handle_end_tag(name),
                }
            }
            Token::CharacterTokens(text) => self.handle_text(&text),
            Token::CommentToken(text) => self.handle_comment(&text),
            // Malformed markup is tolerated best-effort; the tokenizer
            // recovers on its own.
            Token::ParseError(_)
            | Token::DoctypeToken(_)
            | Token::NullCharacterToken
            | Token::EOFToken => {}
        }
        TokenSinkResult::Continue
    }
}

/// Escape text content for re-emission. The tokenizer decodes character
/// references, so emitted text must be re-escaped; non-breaking spaces go
/// back to the literal `&nbsp;` entity the normalizer operates on.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape an attribute value for emission inside double quotes.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            other => escaped.push(other),
        }
    }
    escaped
}
