use std::path::Path;

use anyhow::Context as _;
use log::{debug, info};

use crate::{
    context::Context,
    markdown,
    metadata::{PageMeta, PostMeta},
    renderer::{render_archive_page, render_home_page, render_page_page, render_post_page},
    source::{list_content_files, read_file, site_title, ContentFile},
};

use self::{
    data::{Page, Post},
    utils::{newest_first, recent},
};

pub mod data;
mod utils;

/// Number of documents written by [`generate`], besides the home page and
/// the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub posts: usize,
    pub pages: usize,
}

fn write_file(path: &Path, html: &str) -> anyhow::Result<()> {
    std::fs::write(path, html).with_context(|| format!("while writing {path:?}"))?;
    info!("wrote {path:?}");
    Ok(())
}

fn post_metas<'a>(
    files: impl IntoIterator<Item = &'a ContentFile>,
) -> anyhow::Result<Vec<PostMeta>> {
    files
        .into_iter()
        .map(|file| Post::load(file).map(|post| post.meta))
        .collect()
}

fn page_metas(files: &[ContentFile]) -> anyhow::Result<Vec<PageMeta>> {
    files
        .iter()
        .map(|file| Page::load(file).map(|page| page.meta))
        .collect()
}

fn generate_index(
    ctx: &Context,
    posts: &[ContentFile],
    pages: &[ContentFile],
) -> anyhow::Result<()> {
    let header = read_file(&ctx.header_path())?;
    let recent_posts = post_metas(recent(posts, ctx.recent_posts))?;
    let pages = page_metas(pages)?;
    let html = render_home_page(
        &ctx.theme,
        &site_title(ctx)?,
        &markdown::to_html(&header),
        &recent_posts,
        &pages,
    );
    write_file(&ctx.index_path(), &html).context("while generating index.html")
}

fn generate_posts(ctx: &Context, posts: &[ContentFile]) -> anyhow::Result<()> {
    for file in posts {
        let post = Post::load(file)?;
        debug!("post {:?}", post.meta);
        let html = render_post_page(&ctx.theme, &post, &site_title(ctx)?);
        write_file(&ctx.post_output(&post.meta.id), &html)
            .with_context(|| format!("while generating post {:?}", post.meta.id))?;
    }
    Ok(())
}

fn generate_archive(ctx: &Context, posts: &[ContentFile]) -> anyhow::Result<()> {
    let all_posts = post_metas(newest_first(posts))?;
    let html = render_archive_page(&ctx.theme, &site_title(ctx)?, &all_posts);
    write_file(&ctx.archive_path(), &html).context("while generating all-posts.html")
}

fn generate_pages(ctx: &Context, pages: &[ContentFile]) -> anyhow::Result<()> {
    for file in pages {
        let page = Page::load(file)?;
        debug!("page {:?}", page.meta);
        let html = render_page_page(&ctx.theme, &page, &site_title(ctx)?);
        write_file(&ctx.page_output(&page.meta.id), &html)
            .with_context(|| format!("while generating page {:?}", page.meta.id))?;
    }
    Ok(())
}

/// Writes the home page, one document per post, the archive and one
/// document per page. The first error aborts the run.
///
/// Items are read from the directory listings as they are needed; the
/// listings are oldest first.
pub fn generate(ctx: &Context) -> anyhow::Result<Summary> {
    let posts = list_content_files(&ctx.posts_path())?;
    let pages = list_content_files(&ctx.pages_path())?;

    generate_index(ctx, &posts, &pages)?;
    generate_posts(ctx, &posts)?;
    generate_archive(ctx, &posts)?;
    generate_pages(ctx, &pages)?;

    Ok(Summary {
        posts: posts.len(),
        pages: pages.len(),
    })
}
