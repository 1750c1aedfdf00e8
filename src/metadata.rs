//! Identifier, title and date extraction from a source file's name and
//! first line. No Markdown is parsed here.

use log::warn;
use thiserror::Error;

const EXTENSION_LEN: usize = 3;
const DATE_LEN: usize = 10;
const HEADING_MARKER: &str = "# ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetadataError {
    #[error("first line {line:?} is too short to hold a heading marker")]
    TitleTooShort { line: String },
    #[error("file name {name:?} is shorter than {needed} characters")]
    FileNameTooShort { name: String, needed: usize },
    #[error("file name {name:?} cannot be split at byte {at}")]
    NotOnCharBoundary { name: String, at: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub id: String,
    /// `YYYY-MM-DD` as written in the file name; not validated.
    pub date: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub id: String,
    pub title: String,
}

pub fn extract_post_meta(file_name: &str, content: &str) -> Result<PostMeta, MetadataError> {
    Ok(PostMeta {
        id: file_id(file_name)?,
        date: date_prefix(file_name)?,
        title: title(content)?,
    })
}

pub fn extract_page_meta(file_name: &str, content: &str) -> Result<PageMeta, MetadataError> {
    Ok(PageMeta {
        id: file_id(file_name)?,
        title: title(content)?,
    })
}

/// File name with its trailing three-character extension (`.md`) removed.
pub fn file_id(file_name: &str) -> Result<String, MetadataError> {
    if file_name.len() < EXTENSION_LEN {
        return Err(MetadataError::FileNameTooShort {
            name: file_name.to_string(),
            needed: EXTENSION_LEN,
        });
    }
    let at = file_name.len() - EXTENSION_LEN;
    split_name(file_name, at).map(|(id, _)| id.to_string())
}

/// The leading `YYYY-MM-DD` of a post file name.
pub fn date_prefix(file_name: &str) -> Result<String, MetadataError> {
    if file_name.len() < DATE_LEN {
        return Err(MetadataError::FileNameTooShort {
            name: file_name.to_string(),
            needed: DATE_LEN,
        });
    }
    split_name(file_name, DATE_LEN).map(|(date, _)| date.to_string())
}

fn split_name(file_name: &str, at: usize) -> Result<(&str, &str), MetadataError> {
    if !file_name.is_char_boundary(at) {
        return Err(MetadataError::NotOnCharBoundary {
            name: file_name.to_string(),
            at,
        });
    }
    Ok(file_name.split_at(at))
}

/// First line of `content` without its two-character heading marker.
///
/// Any two leading characters are stripped; a line that does not start
/// with `"# "` is only warned about.
pub fn title(content: &str) -> Result<String, MetadataError> {
    let line = content.lines().next().unwrap_or("");
    let mut chars = line.char_indices();
    let start = match (chars.next(), chars.next()) {
        (Some(_), Some((i, c))) => i + c.len_utf8(),
        _ => {
            return Err(MetadataError::TitleTooShort {
                line: line.to_string(),
            })
        }
    };
    if !line.starts_with(HEADING_MARKER) {
        warn!("first line {line:?} does not start with {HEADING_MARKER:?}");
    }
    Ok(line[start..].to_string())
}
