use pulldown_cmark::{html, Options, Parser};

/// Converts a Markdown document to an HTML fragment.
///
/// Plain CommonMark: no tables, footnotes or strikethrough. Inline HTML is
/// passed through untouched.
pub fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut body_html = String::new();
    html::push_html(&mut body_html, parser);
    body_html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            to_html("# Title\n\nDescription"),
            "<h1>Title</h1>\n<p>Description</p>\n"
        );
    }

    #[test]
    fn raw_html_passes_through() {
        assert!(to_html("<span>hi</span>\n").contains("<span>hi</span>"));
    }
}
