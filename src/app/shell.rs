//! Line-oriented front end over a [`Session`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::command::HELP;
use crate::core::{Command, CommandError};
use crate::kernel::{Action, ChatRole, NoticeLevel, ProjectPhase};
use crate::models::NodeKind;

use super::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    session: Session,
    out: W,
    export_dir: PathBuf,
}

impl<W: Write> Shell<W> {
    pub fn new(session: Session, out: W) -> Self {
        Self {
            session,
            out,
            export_dir: PathBuf::from("."),
        }
    }

    /// Default target of `export` without an argument.
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(self.out)?;
                break;
            };
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Loads the archive at `path` as a new project, taking the path as given.
    pub fn import(&mut self, path: PathBuf) -> io::Result<()> {
        self.run_async(Action::LoadArchive(path))
    }

    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "error: {e}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(command = command.name(), "shell command");

        match command {
            Command::Help => self.print_help()?,
            Command::Projects => self.print_projects()?,
            Command::Templates => self.print_templates()?,
            Command::Import(path) => self.import(path)?,
            Command::Template(id) => {
                self.dispatch_action(Action::InstantiateTemplate(id))?;
            }
            Command::Select { name, force } => self.select(name, force)?,
            Command::Files => self.print_files()?,
            Command::Open(path) => {
                if self.dispatch_action(Action::OpenFile(path))? {
                    self.print_open_file()?;
                }
            }
            Command::Edit { path, content } => self.edit(path, content)?,
            Command::Show => self.print_open_file()?,
            Command::Save => {
                if !self.dispatch_action(Action::Commit)? {
                    writeln!(self.out, "Nothing to save")?;
                }
            }
            Command::Export(dir) => {
                if self.session.state().projects.current_project().is_none() {
                    writeln!(self.out, "No project selected")?;
                } else {
                    let dir = dir.unwrap_or_else(|| self.export_dir.clone());
                    self.run_async(Action::ExportArchive { dir })?;
                }
            }
            Command::Ask(prompt) => self.ask(prompt)?,
            Command::Status => self.print_status()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self) -> io::Result<()> {
        let projects = &self.session.state().projects;
        match projects.current_project() {
            Some(name) if projects.has_unsaved_changes() => write!(self.out, "[{name}*]> ")?,
            Some(name) => write!(self.out, "[{name}]> ")?,
            None => write!(self.out, "> ")?,
        }
        self.out.flush()
    }

    /// Dispatches `action` and prints the resulting notice. Returns `true`
    /// when the action succeeded and changed state.
    fn dispatch_action(&mut self, action: Action) -> io::Result<bool> {
        let revision = self.session.state().ui.notice_revision();
        let result = self.session.dispatch(action);
        self.print_notice_since(revision)?;
        Ok(matches!(result, Ok(true)))
    }

    fn run_async(&mut self, action: Action) -> io::Result<()> {
        let revision = self.session.state().ui.notice_revision();
        let result = self.session.dispatch(action);
        let errors = self.session.wait_idle(None);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "command failed");
        }
        for e in &errors {
            tracing::debug!(error = %e, "background work failed");
        }
        self.print_notice_since(revision)
    }

    fn print_notice_since(&mut self, revision: u64) -> io::Result<()> {
        let ui = &self.session.state().ui;
        if ui.notice_revision() == revision {
            return Ok(());
        }
        match &ui.notice {
            Some(notice) if notice.level == NoticeLevel::Error => {
                writeln!(self.out, "error: {}", notice.text)
            }
            Some(notice) => writeln!(self.out, "{}", notice.text),
            None => Ok(()),
        }
    }

    fn select(&mut self, name: String, force: bool) -> io::Result<()> {
        let projects = &self.session.state().projects;
        if !force && projects.has_unsaved_changes() && projects.contains_project(&name) {
            let current = projects.current_project().unwrap_or_default();
            return writeln!(
                self.out,
                "{current} has unsaved changes; `save` first or `select -f {name}` to discard them"
            );
        }
        self.dispatch_action(Action::SelectProject(name))?;
        Ok(())
    }

    fn edit(&mut self, path: String, content: String) -> io::Result<()> {
        let open = self.session.state().projects.open_file().map(|f| f.path.to_string());
        if open.as_deref() != Some(path.as_str()) {
            return writeln!(self.out, "Open {path} before editing it");
        }
        if self.dispatch_action(Action::EditFile { path, content })? {
            writeln!(self.out, "Edited (unsaved)")?;
        } else {
            writeln!(self.out, "No change")?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: String) -> io::Result<()> {
        let seen = self.session.state().assistant.transcript().len();
        self.run_async(Action::AskAssistant(prompt))?;
        let transcript = self.session.state().assistant.transcript();
        for line in transcript.iter().skip(seen) {
            if line.role == ChatRole::Assistant {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        let width = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
        for (usage, about) in HELP {
            writeln!(self.out, "  {usage:<width$}  {about}")?;
        }
        Ok(())
    }

    fn print_projects(&mut self) -> io::Result<()> {
        let projects = &self.session.state().projects;
        let mut any = false;
        for name in projects.project_names() {
            any = true;
            let mark = if projects.current_project() == Some(name) {
                '*'
            } else {
                ' '
            };
            writeln!(self.out, "{mark} {name}")?;
        }
        if !any {
            writeln!(self.out, "No projects yet; try `import <zip>` or `template <id>`")?;
        }
        Ok(())
    }

    fn print_templates(&mut self) -> io::Result<()> {
        let templates = self.session.state().projects.templates();
        for id in templates.ids() {
            let files = templates.get(id).map_or(0, |t| t.files.len());
            writeln!(self.out, "  {id} ({files} files)")?;
        }
        Ok(())
    }

    fn print_files(&mut self) -> io::Result<()> {
        let projects = &self.session.state().projects;
        if projects.phase() == ProjectPhase::Empty {
            return writeln!(self.out, "No project selected");
        }
        let open = projects.open_file().map(|f| f.path);
        for row in projects.working_copy().rows() {
            let indent = "  ".repeat(row.depth);
            match row.kind {
                NodeKind::Dir => writeln!(self.out, "{indent}{}/", row.name)?,
                NodeKind::File if row.path.is_some() && row.path == open => {
                    writeln!(self.out, "{indent}{} <", row.name)?
                }
                NodeKind::File => writeln!(self.out, "{indent}{}", row.name)?,
            }
        }
        Ok(())
    }

    fn print_open_file(&mut self) -> io::Result<()> {
        match self.session.state().projects.open_file() {
            Some(file) => {
                writeln!(self.out, "--- {} ---", file.path)?;
                if !file.content.is_empty() {
                    writeln!(self.out, "{}", file.content.trim_end_matches('\n'))?;
                }
                Ok(())
            }
            None => writeln!(self.out, "No file open"),
        }
    }

    fn print_status(&mut self) -> io::Result<()> {
        let state = self.session.state();
        let projects = &state.projects;
        match projects.current_project() {
            Some(name) => {
                let phase = match projects.phase() {
                    ProjectPhase::Editing => "editing",
                    _ => "viewing",
                };
                writeln!(
                    self.out,
                    "project: {name} ({phase}, {} files{})",
                    projects.working_copy().len(),
                    if projects.has_unsaved_changes() {
                        ", unsaved changes"
                    } else {
                        ""
                    }
                )?;
            }
            None => writeln!(self.out, "project: none")?,
        }
        if let Some(file) = projects.open_file() {
            writeln!(self.out, "open file: {}", file.path)?;
        }
        writeln!(
            self.out,
            "assistant: {} request(s) in flight",
            state.assistant.in_flight().len()
        )?;
        if let Some(assistant) = self.session.assistant() {
            writeln!(self.out, "endpoint: {}", assistant.endpoint())?;
        }
        if let Some(path) = self.session.settings().and_then(|s| s.path()) {
            writeln!(self.out, "settings: {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;
