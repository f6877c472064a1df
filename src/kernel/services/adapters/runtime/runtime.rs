use std::io;

use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};

pub struct AsyncRuntime {
    /// Always `Some` until dropped.
    runtime: Option<tokio::runtime::Runtime>,
}

impl AsyncRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime: Some(runtime),
        })
    }
}

impl AsyncExecutor for AsyncRuntime {
    fn spawn(&self, task: BoxFuture) {
        if let Some(runtime) = &self.runtime {
            runtime.spawn(task);
        }
    }
}

// The last executor handle may be released from a worker thread, where a
// blocking shutdown would panic.
impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
