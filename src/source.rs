use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use log::debug;

use crate::{context::Context, metadata};

/// A directory entry under one of the content roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    pub file_name: String,
    pub path: PathBuf,
}

/// Entries of `dir`, sorted by file name.
pub fn list_content_files(dir: &Path) -> anyhow::Result<Vec<ContentFile>> {
    let mut files = vec![];
    for entry in std::fs::read_dir(dir).with_context(|| format!("while listing {dir:?}"))? {
        let entry = entry.with_context(|| format!("while listing {dir:?}"))?;
        let file_name = entry
            .file_name()
            .into_string()
            .map_err(|name| anyhow!("non UTF-8 file name {name:?} in {dir:?}"))?;
        files.push(ContentFile {
            file_name,
            path: entry.path(),
        });
    }
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!("{} entries in {dir:?}", files.len());

    Ok(files)
}

pub fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("while reading {path:?}"))
}

/// Title of the site, from the first line of the header section.
pub fn site_title(ctx: &Context) -> anyhow::Result<String> {
    let path = ctx.header_path();
    let content = read_file(&path)?;
    metadata::title(&content).with_context(|| format!("while reading the title of {path:?}"))
}
