//! wtzcode - in-memory project editor for game-server resources
//!
//! Modules:
//! - models: file trees, archive codec, templates
//! - kernel: project store (state/action/effect) and services
//! - core: service registry, shell commands
//! - app: session and line shell

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
