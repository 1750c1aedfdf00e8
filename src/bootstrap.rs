//! First-run setup: source and output directories plus seed content.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::NaiveDate;
use log::info;

use crate::context::Context;

const HEADER_SEED: &str = "# Title\n\nDescription";
const POST_SEED: &str = "# Initial post\n\nThis is the initial post.";
const PAGE_SEED: &str = "# About\n\nThis is the about page.";

/// Files written by [`run_on`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seeded {
    pub header: Option<PathBuf>,
    pub post: Option<PathBuf>,
    pub page: Option<PathBuf>,
}

impl Seeded {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.post.is_none() && self.page.is_none()
    }
}

fn create_dir(path: &Path) -> anyhow::Result<()> {
    fs_extra::dir::create_all(path, false).with_context(|| format!("while creating {path:?}"))
}

fn seed(path: PathBuf, content: &str) -> anyhow::Result<PathBuf> {
    std::fs::write(&path, content).with_context(|| format!("while seeding {path:?}"))?;
    info!("seeded {path:?}");
    Ok(path)
}

/// [`run_on`] with today's local date.
pub fn run(ctx: &Context) -> anyhow::Result<Seeded> {
    run_on(ctx, chrono::Local::now().date_naive())
}

/// Creates missing directories and seeds a header, a post dated `today` and
/// an about page.
///
/// The post and page are only seeded when the matching output directory
/// did not exist yet, so a second run writes nothing new.
pub fn run_on(ctx: &Context, today: NaiveDate) -> anyhow::Result<Seeded> {
    create_dir(&ctx.sections_path())?;
    create_dir(&ctx.posts_path())?;
    create_dir(&ctx.pages_path())?;

    let mut seeded = Seeded::default();

    let header = ctx.header_path();
    if !header.exists() {
        seeded.header = Some(seed(header, HEADER_SEED)?);
    }

    if !ctx.posts_out_path().exists() {
        let name = format!("{}-initial-post.md", today.format("%Y-%m-%d"));
        seeded.post = Some(seed(ctx.posts_path().join(name), POST_SEED)?);
    }

    if !ctx.pages_out_path().exists() {
        seeded.page = Some(seed(ctx.pages_path().join("about.md"), PAGE_SEED)?);
    }

    create_dir(&ctx.posts_out_path())?;
    create_dir(&ctx.pages_out_path())?;

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn fresh_directory_is_seeded() {
        let tmp = TempDir::new().unwrap();
        let ctx = Context::new(tmp.path());
        let seeded = run_on(&ctx, date()).unwrap();

        assert_eq!(seeded.header, Some(ctx.header_path()));
        assert_eq!(
            seeded.post,
            Some(ctx.posts_path().join("2024-03-09-initial-post.md"))
        );
        assert_eq!(seeded.page, Some(ctx.pages_path().join("about.md")));

        assert_eq!(std::fs::read_to_string(ctx.header_path()).unwrap(), HEADER_SEED);
        assert!(ctx.posts_out_path().is_dir());
        assert!(ctx.pages_out_path().is_dir());
    }

    #[test]
    fn second_run_seeds_nothing() {
        let tmp = TempDir::new().unwrap();
        let ctx = Context::new(tmp.path());
        run_on(&ctx, date()).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(run_on(&ctx, later).unwrap().is_empty());
        assert_eq!(std::fs::read_dir(ctx.posts_path()).unwrap().count(), 1);
        assert_eq!(std::fs::read_dir(ctx.pages_path()).unwrap().count(), 1);
    }

    #[test]
    fn existing_header_is_kept() {
        let tmp = TempDir::new().unwrap();
        let ctx = Context::new(tmp.path());
        std::fs::create_dir_all(ctx.sections_path()).unwrap();
        std::fs::write(ctx.header_path(), "# Mine").unwrap();
        let seeded = run_on(&ctx, date()).unwrap();
        assert_eq!(seeded.header, None);
        assert_eq!(std::fs::read_to_string(ctx.header_path()).unwrap(), "# Mine");
    }

    #[test]
    fn existing_output_directories_suppress_seeds() {
        let tmp = TempDir::new().unwrap();
        let ctx = Context::new(tmp.path());
        std::fs::create_dir_all(ctx.posts_out_path()).unwrap();
        std::fs::create_dir_all(ctx.pages_out_path()).unwrap();
        let seeded = run_on(&ctx, date()).unwrap();
        assert_eq!(seeded.post, None);
        assert_eq!(seeded.page, None);
        assert_eq!(std::fs::read_dir(ctx.posts_path()).unwrap().count(), 0);
    }
}
