//! Assembly of the four kinds of output document.
//!
//! Titles are inserted without escaping, in `<title>` as well as in the
//! navigation lists, so they render exactly as the author wrote them.

use maud::{html, Markup, PreEscaped};

use crate::{
    generator::data::{Page, Post},
    layout::{render_layout, Theme, LAYOUT_END},
    markdown,
    metadata::{PageMeta, PostMeta},
};

fn back_link(href: &str) -> Markup {
    html! {
        p { a href=(href) { "←" } }
    }
}

fn post_item(meta: &PostMeta) -> Markup {
    html! {
        li {
            div.date { (meta.date) }
            a href={ "posts/" (meta.id) ".html" } { (PreEscaped(&meta.title)) }
        }
        "\n"
    }
}

fn page_item(meta: &PageMeta) -> Markup {
    html! {
        li {
            a href={ "pages/" (meta.id) ".html" } { (PreEscaped(&meta.title)) }
        }
        "\n"
    }
}

fn document(theme: &Theme, title: &str, content: Markup) -> String {
    let mut res = render_layout(theme, title);
    res.push_str(&content.into_string());
    res.push_str(LAYOUT_END);
    res
}

/// `recent_posts` is listed in the order given.
pub fn render_home_page<'a>(
    theme: &Theme,
    site_title: &str,
    header_html: &str,
    recent_posts: impl IntoIterator<Item = &'a PostMeta>,
    pages: impl IntoIterator<Item = &'a PageMeta>,
) -> String {
    let content = html! {
        (PreEscaped(header_html))
        h2 { "Posts" }
        nav.posts {
            ul {
                @for meta in recent_posts {
                    (post_item(meta))
                }
            }
        }
        p { a href="all-posts.html" { "All posts" } }
        h2 { "Pages" }
        nav.pages {
            ul {
                @for meta in pages {
                    (page_item(meta))
                }
            }
        }
    };
    document(theme, site_title, content)
}

pub fn render_post_page(theme: &Theme, post: &Post, site_title: &str) -> String {
    let title = format!("{} – {}", post.meta.title, site_title);
    let content = html! {
        (back_link("../index.html"))
        p.date { (post.meta.date) }
        (PreEscaped(markdown::to_html(&post.body)))
        (back_link("../index.html"))
    };
    document(theme, &title, content)
}

/// `posts` is listed in the order given.
pub fn render_archive_page<'a>(
    theme: &Theme,
    site_title: &str,
    posts: impl IntoIterator<Item = &'a PostMeta>,
) -> String {
    let title = format!("All posts – {site_title}");
    let content = html! {
        (back_link("index.html"))
        h1 { "All posts" }
        nav.posts {
            ul {
                @for meta in posts {
                    (post_item(meta))
                }
            }
        }
        (back_link("index.html"))
    };
    document(theme, &title, content)
}

pub fn render_page_page(theme: &Theme, page: &Page, site_title: &str) -> String {
    let title = format!("{} – {}", page.meta.title, site_title);
    let content = html! {
        (back_link("../index.html"))
        (PreEscaped(markdown::to_html(&page.body)))
        (back_link("../index.html"))
    };
    document(theme, &title, content)
}
