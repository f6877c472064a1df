use crate::models::TemplateCatalog;

use super::assistant::AssistantState;
use super::projects::ProjectsState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Single status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    /// Bumped whenever a notice is set, even with identical text.
    notice_revision: u64,
}

impl UiState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.set(NoticeLevel::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(NoticeLevel::Error, text.into());
    }

    pub fn notice_revision(&self) -> u64 {
        self.notice_revision
    }

    fn set(&mut self, level: NoticeLevel, text: String) {
        self.notice_revision += 1;
        self.notice = Some(Notice { level, text });
    }
}

#[derive(Default)]
pub struct AppState {
    pub projects: ProjectsState,
    pub assistant: AssistantState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(templates: TemplateCatalog) -> Self {
        Self {
            projects: ProjectsState::new(templates),
            assistant: AssistantState::default(),
            ui: UiState::default(),
        }
    }
}
