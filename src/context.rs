use std::path::{Path, PathBuf};

use crate::layout::Theme;

/// Number of posts listed on the home page.
pub const RECENT_POSTS: usize = 5;

/// Where the site is read from and written to.
///
/// Every path is relative to `root`. The binary roots it at the current
/// working directory; tests point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,

    pub sections_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub header_file: PathBuf,

    pub posts_out_dir: PathBuf,
    pub pages_out_dir: PathBuf,

    pub recent_posts: usize,
    pub theme: Theme,
}

impl Context {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sections_dir: PathBuf::from("_sections"),
            posts_dir: PathBuf::from("_posts"),
            pages_dir: PathBuf::from("_pages"),
            header_file: PathBuf::from("header.md"),
            posts_out_dir: PathBuf::from("posts"),
            pages_out_dir: PathBuf::from("pages"),
            recent_posts: RECENT_POSTS,
            theme: Theme::default(),
        }
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    pub fn sections_path(&self) -> PathBuf {
        self.resolve(&self.sections_dir)
    }

    pub fn posts_path(&self) -> PathBuf {
        self.resolve(&self.posts_dir)
    }

    pub fn pages_path(&self) -> PathBuf {
        self.resolve(&self.pages_dir)
    }

    pub fn header_path(&self) -> PathBuf {
        self.sections_path().join(&self.header_file)
    }

    pub fn posts_out_path(&self) -> PathBuf {
        self.resolve(&self.posts_out_dir)
    }

    pub fn pages_out_path(&self) -> PathBuf {
        self.resolve(&self.pages_out_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.html")
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join("all-posts.html")
    }

    pub fn post_output(&self, id: &str) -> PathBuf {
        self.posts_out_path().join(format!("{id}.html"))
    }

    pub fn page_output(&self, id: &str) -> PathBuf {
        self.pages_out_path().join(format!("{id}.html"))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted() {
        let ctx = Context::new("/site");
        assert_eq!(ctx.header_path(), PathBuf::from("/site/_sections/header.md"));
        assert_eq!(ctx.index_path(), PathBuf::from("/site/index.html"));
        assert_eq!(ctx.archive_path(), PathBuf::from("/site/all-posts.html"));
        assert_eq!(
            ctx.post_output("2024-01-01-c"),
            PathBuf::from("/site/posts/2024-01-01-c.html")
        );
        assert_eq!(ctx.page_output("about"), PathBuf::from("/site/pages/about.html"));
    }

    #[test]
    fn default_limit_is_five() {
        assert_eq!(Context::default().recent_posts, 5);
    }
}
