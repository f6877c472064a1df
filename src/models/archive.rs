//! ZIP codec for project file trees.
//!
//! Decoding skips directory entries; every other entry becomes one path in
//! the resulting [`FileTree`]. Entry bytes that are not valid UTF-8 are
//! decoded lossily. Encoding stores every path deflate-compressed.

use std::io::{Cursor, Read, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::FileTree;

const ARCHIVE_SUFFIX: &str = ".zip";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("invalid archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn decode(bytes: &[u8]) -> Result<FileTree, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut tree = FileTree::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        // The declared size is untrusted; bound the hint by the input length.
        let hint = entry.size().min(bytes.len() as u64) as usize;
        let mut data = Vec::with_capacity(hint);
        entry.read_to_end(&mut data)?;
        let content = match String::from_utf8(data) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        tree.upsert(entry.name(), content);
    }

    Ok(tree)
}

pub fn encode(tree: &FileTree) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, content) in tree.iter() {
        zip.start_file(path, options)?;
        zip.write_all(content.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Project name for an uploaded archive: the file name with a trailing
/// `.zip` removed, compared case-insensitively.
pub fn project_name_from_file_name(file_name: &str) -> String {
    let split = file_name.len().saturating_sub(ARCHIVE_SUFFIX.len());
    match file_name.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(ARCHIVE_SUFFIX) => file_name[..split].to_string(),
        _ => file_name.to_string(),
    }
}

/// Suggested download name for an exported project.
pub fn archive_file_name(project_name: &str) -> String {
    format!("{project_name}{ARCHIVE_SUFFIX}")
}

#[cfg(test)]
#[path = "../../tests/unit/models/archive.rs"]
mod tests;
