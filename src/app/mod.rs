//! Application layer: the session and its line shell.

mod session;
mod shell;

pub use session::Session;
pub use shell::{Flow, Shell};
