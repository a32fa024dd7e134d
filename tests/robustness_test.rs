use email_safe_html::{clean, clean_bytes, Config};

#[test]
fn unclosed_script_falls_back_to_raw_input() {
    let html = "<p>a</p><script>var x = 1;";
    let result = clean(html);
    assert_eq!(result.text, html);
    assert!(result.is_fallback());
    match result.parse_failure {
        Some(detail) => assert!(detail.contains("unclosed")),
        None => panic!("expected a parse failure"),
    }
}

#[test]
fn unclosed_hidden_element_falls_back_to_raw_input() {
    let html = r#"<div style="display:none">secret"#;
    let result = clean(html);
    assert_eq!(result.text, html);
    match result.parse_failure {
        Some(detail) => assert!(detail.contains("hidden")),
        None => panic!("expected a parse failure"),
    }
}

#[test]
fn unclosed_ordinary_tags_are_tolerated() {
    let result = clean("<p>text<div>more");
    assert_eq!(result.text, "<p>textmore");
    assert!(!result.is_fallback());
}

#[test]
fn empty_input_produces_empty_output() {
    let result = clean("");
    assert_eq!(result.text, "");
    assert!(result.parse_failure.is_none());
}

#[test]
fn plain_text_passes_through() {
    let result = clean("just words, no markup");
    assert_eq!(result.text, "just words, no markup");
}

#[test]
fn doctype_and_null_characters_are_dropped() {
    let result = clean("<!DOCTYPE html><p>a\u{0}b</p>");
    assert_eq!(result.text, "<p>ab</p>");
}

#[test]
fn document_wrapper_tags_are_unwrapped() {
    let html = "<html><head><meta charset=\"utf-8\"></head><body><p>x</p></body></html>";
    let result = clean(html);
    assert_eq!(result.text, "<p>x</p>");
}

#[test]
fn cleaning_is_idempotent_without_header_data() {
    let once = clean("<div>Hello <b>world</b></div>");
    assert_eq!(once.text, "<p>Hello <b>world</b></p>");
    let twice = clean(&once.text);
    assert_eq!(twice.text, once.text);
}

#[test]
fn recleaning_header_output_collapses_the_separator() {
    // Header lines are plain text on a second pass; the triple newline
    // between header and body does not survive blank-line normalization.
    let result = clean("Title: T\n\n\n<p>x</p>");
    assert_eq!(result.text, "Title: T\n\n<p>x</p>");
    assert!(result.links.is_empty());
}

#[test]
fn empty_tags_nested_past_the_pass_limit_survive() {
    let result = clean("<p><b><i><em><strong></strong></em></i></b></p>");
    assert_eq!(result.text, "<p><b></b></p>");
}

#[test]
fn latin1_bytes_are_transcoded_before_cleaning() {
    let html: Vec<u8> = [
        &b"<html><head><meta charset=\"iso-8859-1\"></head>"[..],
        &b"<body><p>caf\xe9</p></body></html>"[..],
    ]
    .concat();
    let result = clean_bytes(&html);
    assert_eq!(result.text, "<p>caf\u{e9}</p>");
}

#[test]
fn fallback_preserves_custom_config_input_verbatim() {
    let config = Config {
        preserve_line_breaks: false,
        ..Config::default()
    };
    let html = "<style>p { color: red; }";
    let result = email_safe_html::clean_with_config(html, &config);
    assert_eq!(result.text, html);
    assert!(result.is_fallback());
}
