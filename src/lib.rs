//! Builds a static blog from Markdown sources.
//!
//! Sources live in `_sections/header.md`, `_posts/` and `_pages/`; the
//! site is written to `index.html`, `all-posts.html`, `posts/` and
//! `pages/`, all relative to [`Context::root`].

pub mod bootstrap;
pub mod context;
pub mod generator;
pub mod layout;
pub mod markdown;
pub mod metadata;
pub mod renderer;
pub mod source;

pub use context::Context;
pub use generator::{generate, Summary};
