use std::path::PathBuf;

use crate::kernel::services::ports::AssistantResponse;

#[derive(Debug, Clone)]
pub enum Action {
    /// Bytes of an uploaded archive; `file_name` is the name it was uploaded as.
    ImportArchive {
        file_name: String,
        bytes: Vec<u8>,
    },
    LoadArchive(PathBuf),
    ArchiveLoadError {
        path: PathBuf,
        error: String,
    },
    InstantiateTemplate(String),
    SelectProject(String),
    OpenFile(String),
    EditFile {
        path: String,
        content: String,
    },
    Commit,
    ExportArchive {
        dir: PathBuf,
    },
    ArchiveWritten {
        path: PathBuf,
    },
    ArchiveWriteError {
        path: PathBuf,
        error: String,
    },
    AskAssistant(String),
    AssistantReplied {
        ticket_id: u64,
        response: AssistantResponse,
    },
    AssistantFailed {
        ticket_id: u64,
        error: String,
    },
}
