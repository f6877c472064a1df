//! Headless application core (state/action/effect).

pub mod action;
pub mod assistant;
pub mod effect;
pub mod error;
pub mod projects;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use assistant::{AssistantState, AssistantTicket, ChatLine, ChatRole, BACKEND_ERROR_TEXT};
pub use effect::Effect;
pub use error::ProjectError;
pub use projects::{
    ExportedArchive, MergeOutcome, OpenFile, ProjectHandle, ProjectPhase, ProjectsState,
};
pub use state::{AppState, Notice, NoticeLevel, UiState};
pub use store::{DispatchResult, Store};
