use super::{Action, AppState, Effect, ProjectError};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    pub error: Option<ProjectError>,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            error: None,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
            error: None,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ImportArchive { file_name, bytes } => {
                let result = self
                    .state
                    .projects
                    .import_archive(&file_name, &bytes)
                    .map(|handle| format!("Imported {} ({} files)", handle.name, self.file_count()));
                self.finish(result)
            }
            Action::LoadArchive(path) => DispatchResult::effect(Effect::ReadArchive(path)),
            Action::ArchiveLoadError { path, error } => self.fail(ProjectError::Io {
                op: "read archive",
                path: path.display().to_string(),
                error,
            }),
            Action::InstantiateTemplate(template_id) => {
                let result = self.state.projects.instantiate_template(&template_id);
                self.finish(result.map(|handle| format!("Loaded template {}", handle.name)))
            }
            Action::SelectProject(name) => {
                let result = self.state.projects.select_project(&name);
                self.finish(result.map(|handle| format!("Switched to {}", handle.name)))
            }
            Action::OpenFile(path) => {
                let result = self.state.projects.open(&path).map(|_| ());
                match result {
                    Ok(()) => DispatchResult::changed(true),
                    Err(e) => self.fail(e),
                }
            }
            Action::EditFile { path, content } => {
                DispatchResult::changed(self.state.projects.edit(&path, content))
            }
            Action::Commit => {
                let changed = self.state.projects.commit();
                if changed {
                    if let Some(name) = self.state.projects.current_project() {
                        let text = format!("Saved {name}");
                        self.state.ui.info(text);
                    }
                }
                DispatchResult::changed(changed)
            }
            Action::ExportArchive { dir } => match self.state.projects.export_archive() {
                Ok(Some(exported)) => DispatchResult::effect(Effect::WriteArchive {
                    path: dir.join(exported.file_name),
                    bytes: exported.bytes,
                }),
                Ok(None) => DispatchResult::changed(false),
                Err(e) => self.fail(e),
            },
            Action::ArchiveWritten { path } => {
                self.state.ui.info(format!("Exported {}", path.display()));
                DispatchResult::changed(true)
            }
            Action::ArchiveWriteError { path, error } => self.fail(ProjectError::Io {
                op: "write archive",
                path: path.display().to_string(),
                error,
            }),
            Action::AskAssistant(prompt) => {
                match self
                    .state
                    .assistant
                    .begin_request(&prompt, &self.state.projects)
                {
                    Some((ticket, request)) => DispatchResult {
                        effects: vec![Effect::RequestAssistant {
                            ticket_id: ticket.id,
                            request,
                        }],
                        state_changed: true,
                        error: None,
                    },
                    None => DispatchResult::changed(false),
                }
            }
            Action::AssistantReplied {
                ticket_id,
                response,
            } => {
                let Some(ticket) = self.state.assistant.finish(ticket_id) else {
                    tracing::debug!(ticket_id, "reply for unknown assistant request");
                    return DispatchResult::changed(false);
                };

                let live = ticket.is_live(&self.state.projects);
                for text in response.messages() {
                    self.state.assistant.push_reply(text, !live);
                }

                if !response.has_file_changes() {
                    return DispatchResult::changed(true);
                }
                if live {
                    let outcome = self.state.projects.merge_assistant_result(&response);
                    self.state
                        .ui
                        .info(format!("Assistant wrote {} file(s)", outcome.files_written));
                } else {
                    tracing::info!(
                        ticket_id,
                        project = ?ticket.project,
                        "discarding file changes from stale assistant reply"
                    );
                    self.state
                        .ui
                        .info("Ignored file changes from an outdated assistant reply");
                }
                DispatchResult::changed(true)
            }
            Action::AssistantFailed { ticket_id, error } => {
                if self.state.assistant.finish(ticket_id).is_none() {
                    return DispatchResult::changed(false);
                }
                self.state.assistant.push_backend_error();
                self.fail(ProjectError::Backend(error))
            }
        }
    }

    fn file_count(&self) -> usize {
        self.state.projects.working_copy().len()
    }

    fn finish(&mut self, result: Result<String, ProjectError>) -> DispatchResult {
        match result {
            Ok(text) => {
                self.state.ui.info(text);
                DispatchResult::changed(true)
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ProjectError) -> DispatchResult {
        self.state.ui.error(error.to_string());
        DispatchResult {
            effects: Vec::new(),
            state_changed: true,
            error: Some(error),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
