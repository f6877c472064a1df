use std::path::PathBuf;

use crate::kernel::services::KernelServiceContext;
use crate::kernel::Action;

/// Reads an archive file and posts its bytes for import.
pub fn read_archive(ctx: &KernelServiceContext, path: PathBuf) {
    let task_ctx = ctx.clone();
    ctx.spawn_future(async move {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                tracing::debug!(path = %path.display(), len = bytes.len(), "archive read");
                task_ctx.dispatch(Action::ImportArchive { file_name, bytes });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "archive read failed");
                task_ctx.dispatch(Action::ArchiveLoadError {
                    path,
                    error: e.to_string(),
                });
            }
        }
    });
}

/// Writes exported archive bytes, creating the parent directory if needed.
pub fn write_archive(ctx: &KernelServiceContext, path: PathBuf, bytes: Vec<u8>) {
    let task_ctx = ctx.clone();
    ctx.spawn_future(async move {
        let result = async {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, &bytes).await
        }
        .await;

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), len = bytes.len(), "archive exported");
                task_ctx.dispatch(Action::ArchiveWritten { path });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "archive write failed");
                task_ctx.dispatch(Action::ArchiveWriteError {
                    path,
                    error: e.to_string(),
                });
            }
        }
    });
}
