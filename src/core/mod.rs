//! Core framework pieces shared by the kernel and the shell:
//! - Service: service registration and lookup
//! - Command: shell command parsing

pub mod command;
pub mod service;

pub use command::{Command, CommandError};
pub use service::{Service, ServiceError, ServiceRegistry};
