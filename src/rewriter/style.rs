//! Inline-style inspection for the rewriter.
//!
//! Attributes at this layer are the rewriter's `(name, value)` pairs with
//! names already lowercased by the tokenizer.

use crate::patterns::{BOLD_STYLE, HIDDEN_STYLE, PIXEL_HEIGHT_STYLE, PIXEL_WIDTH_STYLE};

/// Attribute pair as collected from a start tag.
pub type Attr = (String, String);

/// Look up an attribute value by name.
pub fn attr_value<'a>(attrs: &'a [Attr], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(attr_name, _)| attr_name == name)
        .map(|(_, value)| value.as_str())
}

/// Whether an element's style declarations hide it: such elements are
/// email "pretext" and their text is captured out-of-band.
pub fn is_hidden(attrs: &[Attr]) -> bool {
    attr_value(attrs, "style").is_some_and(|style| HIDDEN_STYLE.is_match(style))
}

/// Whether an element carries a bold font-weight in its inline style.
pub fn has_bold_style(attrs: &[Attr]) -> bool {
    attr_value(attrs, "style").is_some_and(|style| BOLD_STYLE.is_match(style))
}

/// Whether an image is a 1x1 tracking pixel.
///
/// Both dimensions must resolve to 1, each from either a `width`/`height`
/// attribute (`"1"` or `"1px"`) or a `width:1px`/`height:1px` inline style.
pub fn is_tracking_pixel(attrs: &[Attr]) -> bool {
    let mut width_1 = false;
    let mut height_1 = false;
    for (name, value) in attrs {
        match name.as_str() {
            "width" if value == "1" || value == "1px" => width_1 = true,
            "height" if value == "1" || value == "1px" => height_1 = true,
            "style" => {
                if PIXEL_WIDTH_STYLE.is_match(value) {
                    width_1 = true;
                }
                if PIXEL_HEIGHT_STYLE.is_match(value) {
                    height_1 = true;
                }
            }
            _ => {}
        }
    }
    width_1 && height_1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<Attr> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn hidden_detects_display_none() {
        assert!(is_hidden(&attrs(&[("style", "display:none")])));
        assert!(is_hidden(&attrs(&[("style", "color:red; DISPLAY : NONE")])));
        assert!(!is_hidden(&attrs(&[("style", "display:block")])));
        assert!(!is_hidden(&attrs(&[("class", "display:none")])));
    }

    #[test]
    fn bold_detection_requires_style_attribute() {
        assert!(has_bold_style(&attrs(&[("style", "font-weight: bold")])));
        assert!(!has_bold_style(&attrs(&[("style", "font-weight: 400")])));
        assert!(!has_bold_style(&attrs(&[("width", "bold")])));
    }

    #[test]
    fn tracking_pixel_requires_both_dimensions() {
        assert!(is_tracking_pixel(&attrs(&[("width", "1"), ("height", "1")])));
        assert!(is_tracking_pixel(&attrs(&[
            ("width", "1px"),
            ("height", "1")
        ])));
        assert!(!is_tracking_pixel(&attrs(&[("width", "1")])));
        assert!(!is_tracking_pixel(&attrs(&[
            ("width", "1"),
            ("height", "100")
        ])));
    }

    #[test]
    fn tracking_pixel_accepts_style_dimensions() {
        assert!(is_tracking_pixel(&attrs(&[(
            "style",
            "width: 1px; height:1px"
        )])));
        assert!(is_tracking_pixel(&attrs(&[
            ("width", "1"),
            ("style", "height: 1px")
        ])));
        assert!(!is_tracking_pixel(&attrs(&[("style", "width:1px")])));
    }

    #[test]
    fn attr_value_returns_first_match() {
        let pairs = attrs(&[("href", "https://a"), ("title", "t")]);
        assert_eq!(attr_value(&pairs, "href"), Some("https://a"));
        assert_eq!(attr_value(&pairs, "missing"), None);
    }
}
