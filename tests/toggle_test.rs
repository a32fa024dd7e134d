use email_safe_html::{clean_with_config, Config};

#[test]
fn spans_can_be_kept_when_unwrap_disabled() {
    let mut config = Config {
        unwrap_spans: false,
        ..Config::default()
    };
    config.keep_tags.insert("span".to_string());
    let result = clean_with_config("<p><span>x</span></p>", &config);
    assert_eq!(result.text, "<p><span>x</span></p>");
}

#[test]
fn collapse_mode_joins_everything_on_one_line() {
    let config = Config {
        preserve_line_breaks: false,
        ..Config::default()
    };
    let result = clean_with_config("<p>a</p>\n\n<p>b</p>", &config);
    assert_eq!(result.text, "<p>a</p><p>b</p>");
}

#[test]
fn preserve_mode_breaks_after_block_elements() {
    let config = Config::default();
    let result = clean_with_config("<h2>Head</h2><p>a</p><ul><li>one</li></ul>", &config);
    assert_eq!(result.text, "<h2>Head</h2>\n<p>a</p>\n<ul><li>one</li>\n</ul>");
}

#[test]
fn empty_tag_removal_can_be_disabled() {
    let config = Config {
        remove_empty_tags: false,
        ..Config::default()
    };
    let result = clean_with_config("<p><strong></strong></p>", &config);
    assert_eq!(result.text, "<p><strong></strong></p>");
}

#[test]
fn nbsp_collapsing_can_be_disabled() {
    let config = Config {
        collapse_nbsp_runs: false,
        ..Config::default()
    };
    let result = clean_with_config("<p>a&nbsp;&nbsp;b</p>", &config);
    assert_eq!(result.text, "<p>a&nbsp;&nbsp;b</p>");
}

#[test]
fn comments_survive_when_stripping_disabled() {
    let config = Config {
        remove_comments: false,
        ..Config::default()
    };
    let result = clean_with_config("<p>a</p><!-- note -->", &config);
    assert_eq!(result.text, "<p>a</p>\n<!-- note -->");
}

#[test]
fn custom_keep_set_is_honored() {
    let mut config = Config::default();
    config.keep_tags.remove("em");
    let result = clean_with_config("<p><em>x</em></p>", &config);
    assert_eq!(result.text, "<p>x</p>");
}

#[test]
fn custom_attribute_allow_list_is_honored() {
    let mut config = Config::default();
    config
        .keep_attributes
        .insert("*".to_string(), vec!["title".to_string()]);
    let result = clean_with_config(r#"<p title="note" lang="en">x</p>"#, &config);
    assert_eq!(result.text, r#"<p title="note">x</p>"#);
}

#[test]
fn custom_inline_anchor_keywords() {
    let mut config = Config::default();
    config.inline_anchor_keywords = vec!["unsubscribe".to_string()];
    let html = concat!(
        r#"<p><a href="https://x.io/unsubscribe">u</a>"#,
        r#"<a href="mailto:a@b.c">m</a></p>"#,
    );
    let result = clean_with_config(html, &config);
    // mailto is no longer an exception: collected and replaced by markers.
    assert_eq!(result.links, vec!["mailto:a@b.c".to_string()]);
    assert!(result
        .text
        .contains(r#"<a href="https://x.io/unsubscribe">u</a>"#));
    assert!(result.text.contains("[link]m[/link]"));
}
