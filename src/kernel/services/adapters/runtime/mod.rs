//! Async runtime adapter: executes IO effects and posts the outcome back on the kernel bus.

mod archive_io;
mod runtime;

pub use archive_io::{read_archive, write_archive};
pub use runtime::AsyncRuntime;
