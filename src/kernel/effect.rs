use std::path::PathBuf;

use crate::kernel::services::ports::AssistantRequest;

#[derive(Debug, Clone)]
pub enum Effect {
    ReadArchive(PathBuf),
    WriteArchive {
        path: PathBuf,
        bytes: Vec<u8>,
    },
    RequestAssistant {
        ticket_id: u64,
        request: AssistantRequest,
    },
}
