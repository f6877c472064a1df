//! Wire contract of the assistant backend.
//!
//! Request: `{ "prompt", "projectName", "files" }`.
//! Response: `{ "messages"?, "updates"?, "newFiles"? }`, every field optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::FileTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub prompt: String,
    pub project_name: Option<String>,
    pub files: FileTree,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updates: Option<FileTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_files: Option<FileTree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("empty file path in `{0}`")]
    EmptyPath(&'static str),

    #[error("file path `{path}` in `{field}` must be relative without `..` or empty segments")]
    UnsafePath { field: &'static str, path: String },
}

impl AssistantResponse {
    pub fn messages(&self) -> &[String] {
        self.messages.as_deref().unwrap_or_default()
    }

    /// `true` when the response carries at least one file.
    pub fn has_file_changes(&self) -> bool {
        self.updates.as_ref().is_some_and(|t| !t.is_empty())
            || self.new_files.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Rejects file maps whose keys could escape the project root.
    pub fn validate(&self) -> Result<(), ResponseError> {
        for (field, tree) in [("updates", &self.updates), ("newFiles", &self.new_files)] {
            let Some(tree) = tree else {
                continue;
            };
            for path in tree.paths() {
                validate_path(field, path)?;
            }
        }
        Ok(())
    }
}

fn validate_path(field: &'static str, path: &str) -> Result<(), ResponseError> {
    if path.is_empty() {
        return Err(ResponseError::EmptyPath(field));
    }
    let unsafe_path = path.starts_with('/')
        || path.contains('\\')
        || path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "..");
    if unsafe_path {
        return Err(ResponseError::UnsafePath {
            field,
            path: path.to_string(),
        });
    }
    Ok(())
}
