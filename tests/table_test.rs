use email_safe_html::{clean, clean_with_config, Config};

#[test]
fn table_rows_flatten_to_paragraphs() {
    let result = clean("<table><tr><td>A</td><td>B</td></tr></table>");
    assert_eq!(result.text, "<p>A</p>\n<p>B</p>");
}

#[test]
fn structural_tags_are_fully_elided() {
    let html = "<table><thead><tr><th>H</th></tr></thead><tbody><tr><td>C</td></tr></tbody></table>";
    let result = clean(html);
    assert_eq!(result.text, "<p>H</p>\n<p>C</p>");
    for tag in ["table", "thead", "tbody", "tr", "td", "th"] {
        assert!(!result.text.contains(tag));
    }
}

#[test]
fn cell_content_already_wrapped_is_not_double_wrapped() {
    let result = clean("<table><tr><td><p>Wrapped</p></td></tr></table>");
    assert_eq!(result.text, "<p>Wrapped</p>");
}

#[test]
fn empty_cells_vanish() {
    let result = clean("<table><tr><td></td><td>B</td><td>  </td></tr></table>");
    assert_eq!(result.text, "<p>B</p>");
}

#[test]
fn nested_table_markers_degrade_gracefully() {
    // Nested cells confuse the lazy marker matching; leftovers are
    // stripped rather than corrupting the output.
    let html = "<table><tr><td>Out<table><tr><td>In</td></tr></table></td></tr></table>";
    let result = clean(html);
    assert_eq!(result.text, "<p>OutIn</p>");
    assert!(!result.text.contains("CELL_"));
}

#[test]
fn table_cells_with_formatting_keep_it() {
    let result = clean("<table><tr><td><strong>Bold</strong> rest</td></tr></table>");
    assert_eq!(result.text, "<p><strong>Bold</strong> rest</p>");
}

#[test]
fn flattening_disabled_unwraps_table_markup() {
    let config = Config {
        flatten_tables: false,
        ..Config::default()
    };
    let result = clean_with_config("<table><tr><td>A</td></tr></table>", &config);
    assert_eq!(result.text, "A");
}
