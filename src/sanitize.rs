//! HTML-to-text stripping for post bodies.

use scraper::Html;

/// Renders an HTML fragment down to its visible text.
///
/// Post bodies arrive as markup; everything but the text nodes is
/// discarded, entities included.
pub(crate) fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stripped() {
        assert_eq!(strip_html("<b>great</b> deal"), "great deal");
    }

    #[test]
    fn nested_markup_keeps_text_order() {
        let html = "<div><p>first</p><blockquote><p>second</p></blockquote></div>";
        assert_eq!(strip_html(html), "firstsecond");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(strip_html("a &amp; b"), "a & b");
    }

    #[test]
    fn empty_body_is_empty() {
        assert_eq!(strip_html(""), "");
    }
}
