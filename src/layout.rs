//! The HTML shell every output document is wrapped in.
//!
//! [`render_layout`] returns everything up to and including the opening
//! `<div id="page">`; documents end with [`LAYOUT_END`].

use std::fmt::Write as _;

pub const LAYOUT_END: &str = "</div></body></html>";

/// Visual parameters of the layout shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub font_stylesheets: Vec<String>,
    pub body_font: String,
    pub code_font: String,
    pub font_size_px: u32,
    pub narrow_font_size_px: u32,
    pub background: String,
    pub text_color: String,
    pub muted_color: String,
    pub link_color: String,
    pub code_background: String,
    pub max_width: String,
    /// Prefix `h1`..`h4` with `#`..`####` and render them at body size.
    pub heading_markers: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_stylesheets: vec![
                "https://fonts.googleapis.com/css?family=Roboto:400,400italic,500,500italic"
                    .to_string(),
                "https://fonts.googleapis.com/css?family=Roboto+Mono:400,400italic,500,500italic"
                    .to_string(),
            ],
            body_font: "'Roboto'".to_string(),
            code_font: "'Roboto Mono', monospace".to_string(),
            font_size_px: 17,
            narrow_font_size_px: 15,
            background: "#fafafa".to_string(),
            text_color: "rgba(0, 0, 0, 0.87)".to_string(),
            muted_color: "rgba(0, 0, 0, 0.54)".to_string(),
            link_color: "#1976d2".to_string(),
            code_background: "#f5f5f5".to_string(),
            max_width: "40.625rem".to_string(),
            heading_markers: true,
        }
    }
}

impl Theme {
    /// Native heading sizes, no `#` markers.
    pub fn plain() -> Self {
        Self {
            heading_markers: false,
            ..Self::default()
        }
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            concat!(
                "html{{font-size:{size}px;}}",
                "@media (max-width: 600px){{html{{font-size:{narrow}px;}}}}",
                "body{{background-color:{bg};color:{fg};font-family:{font};",
                "font-weight:400;line-height:1.71875;text-rendering:optimizeLegibility;}}",
                "h1,h2,h3,h4{{font-weight:500;}}",
            ),
            size = self.font_size_px,
            narrow = self.narrow_font_size_px,
            bg = self.background,
            fg = self.text_color,
            font = self.body_font,
        );
        if self.heading_markers {
            for level in 1..=4 {
                let _ = write!(
                    css,
                    "h{level}{{font-size:1rem;}}h{level}:before{{content:'{} '}}",
                    "#".repeat(level)
                );
            }
        }
        let _ = write!(
            css,
            concat!(
                "#page{{margin:2.5em auto;max-width:{width};padding:0 0.5rem;}}",
                "a{{text-decoration:none;color:{link};}}",
                "a:hover{{text-decoration:underline;}}",
                "a:visited{{color:{link};}}",
                "nav ul{{list-style-type:none;padding:0;}}",
                "nav.posts li{{margin-bottom:1.5rem;}}",
                "nav.posts .date{{line-height:1.125rem;}}",
                "nav.pages li{{margin-bottom:0.5rem;}}",
                ".date{{color:{muted};font-size:0.889rem;}}",
                "pre{{background-color:{code_bg};}}",
                "code{{font-family:{code_font};font-size:0.889rem;}}",
            ),
            width = self.max_width,
            link = self.link_color,
            muted = self.muted_color,
            code_bg = self.code_background,
            code_font = self.code_font,
        );
        css
    }
}

/// Document head and the opening body container.
///
/// `title` is inserted as is: markup in it is not escaped.
pub fn render_layout(theme: &Theme, title: &str) -> String {
    let mut res = String::from(concat!(
        "<!DOCTYPE html><html><head>",
        "<meta charset=\"utf-8\">",
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
    ));
    for href in &theme.font_stylesheets {
        let _ = write!(
            res,
            "<link href=\"{href}\" rel=\"stylesheet\" type=\"text/css\">"
        );
    }
    let _ = write!(
        res,
        "<title>{title}</title><style>{}</style></head><body><div id=\"page\">",
        theme.stylesheet()
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_ends_inside_page_container() {
        let html = render_layout(&Theme::default(), "Blog");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("<body><div id=\"page\">"));
        assert!(html.contains("<title>Blog</title>"));
    }

    #[test]
    fn title_is_inserted_verbatim() {
        let html = render_layout(&Theme::default(), "A & <B>");
        assert!(html.contains("<title>A & <B></title>"));
    }

    #[test]
    fn fonts_are_linked() {
        let html = render_layout(&Theme::default(), "t");
        assert_eq!(html.matches("rel=\"stylesheet\"").count(), 2);
        assert!(html.contains("family=Roboto+Mono"));
    }

    #[test]
    fn heading_markers_follow_theme() {
        assert!(Theme::default().stylesheet().contains("h2:before{content:'## '}"));
        assert!(!Theme::plain().stylesheet().contains(":before"));
    }

    #[test]
    fn colors_come_from_theme() {
        let theme = Theme {
            link_color: "#ff0000".to_string(),
            ..Theme::default()
        };
        assert!(theme.stylesheet().contains("a{text-decoration:none;color:#ff0000;}"));
    }
}
