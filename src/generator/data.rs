use anyhow::Context as _;

use crate::{
    metadata::{extract_page_meta, extract_post_meta, PageMeta, PostMeta},
    source::{read_file, ContentFile},
};

/// A dated entry read from the posts directory.
#[derive(Debug, Clone)]
pub struct Post {
    pub meta: PostMeta,
    pub body: String,
}

/// An undated standalone entry read from the pages directory.
#[derive(Debug, Clone)]
pub struct Page {
    pub meta: PageMeta,
    pub body: String,
}

impl Post {
    pub fn load(file: &ContentFile) -> anyhow::Result<Self> {
        let body = read_file(&file.path)?;
        let meta = extract_post_meta(&file.file_name, &body)
            .with_context(|| format!("while preprocessing {:?}", file.path))?;
        Ok(Self { meta, body })
    }
}

impl Page {
    pub fn load(file: &ContentFile) -> anyhow::Result<Self> {
        let body = read_file(&file.path)?;
        let meta = extract_page_meta(&file.file_name, &body)
            .with_context(|| format!("while preprocessing {:?}", file.path))?;
        Ok(Self { meta, body })
    }
}
