use thiserror::Error;

use crate::models::ArchiveError;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("could not read archive: {0}")]
    Decode(#[source] ArchiveError),

    #[error("could not build archive: {0}")]
    Encode(#[source] ArchiveError),

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{op} failed for {path}: {error}")]
    Io {
        op: &'static str,
        path: String,
        error: String,
    },
}

impl ProjectError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ProjectError::ProjectNotFound(_) | ProjectError::FileNotFound(_)
        )
    }
}
