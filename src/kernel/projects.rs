//! Project registry, working copy and file selection.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::kernel::services::ports::AssistantResponse;
use crate::kernel::ProjectError;
use crate::models::{archive, project_name_from_file_name, FileTree, TemplateCatalog};

/// Identifies a project as it became current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandle {
    pub name: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPhase {
    Empty,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFile<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Distinct paths written; a path in both maps counts once.
    pub files_written: usize,
    pub open_file_changed: bool,
}

pub struct ProjectsState {
    registry: FxHashMap<String, FileTree>,
    /// First-registration order, for the project selector.
    order: Vec<String>,
    current: Option<String>,
    working: FileTree,
    /// Invariant: always a key of `working`.
    open_path: Option<String>,
    generation: u64,
    templates: TemplateCatalog,
}

impl ProjectsState {
    pub fn new(templates: TemplateCatalog) -> Self {
        Self {
            registry: FxHashMap::default(),
            order: Vec::new(),
            current: None,
            working: FileTree::new(),
            open_path: None,
            generation: 0,
            templates,
        }
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn phase(&self) -> ProjectPhase {
        match (&self.current, &self.open_path) {
            (None, _) => ProjectPhase::Empty,
            (Some(_), None) => ProjectPhase::Viewing,
            (Some(_), Some(_)) => ProjectPhase::Editing,
        }
    }

    /// Bumped every time the current project is (re)set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_project(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains_project(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Last committed snapshot of a project.
    pub fn snapshot(&self, name: &str) -> Option<&FileTree> {
        self.registry.get(name)
    }

    pub fn working_copy(&self) -> &FileTree {
        &self.working
    }

    pub fn open_file(&self) -> Option<OpenFile<'_>> {
        let path = self.open_path.as_deref()?;
        let content = self.working.get(path)?;
        Some(OpenFile { path, content })
    }

    pub fn has_unsaved_changes(&self) -> bool {
        match &self.current {
            Some(name) => self.registry.get(name) != Some(&self.working),
            None => false,
        }
    }

    pub fn import_archive(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<ProjectHandle, ProjectError> {
        let tree = archive::decode(bytes).map_err(ProjectError::Decode)?;
        Ok(self.register_and_select(project_name_from_file_name(file_name), tree))
    }

    pub fn instantiate_template(&mut self, template_id: &str) -> Result<ProjectHandle, ProjectError> {
        let template = self
            .templates
            .get(template_id)
            .ok_or_else(|| ProjectError::UnknownTemplate(template_id.to_string()))?;
        let name = template.project_name();
        let tree = template.files.clone();
        Ok(self.register_and_select(name, tree))
    }

    /// Makes `name` current. Uncommitted edits of the previous working copy
    /// are discarded.
    pub fn select_project(&mut self, name: &str) -> Result<ProjectHandle, ProjectError> {
        let tree = self
            .registry
            .get(name)
            .ok_or_else(|| ProjectError::ProjectNotFound(name.to_string()))?
            .clone();
        Ok(self.set_current(name.to_string(), tree))
    }

    pub fn open(&mut self, path: &str) -> Result<&str, ProjectError> {
        if !self.working.contains(path) {
            return Err(ProjectError::FileNotFound(path.to_string()));
        }
        self.open_path = Some(path.to_string());
        Ok(self.working.get(path).unwrap_or_default())
    }

    /// Writes into the working copy only when `path` is the open file.
    pub fn edit(&mut self, path: &str, content: impl Into<String>) -> bool {
        if self.open_path.as_deref() != Some(path) {
            return false;
        }
        let content = content.into();
        if self.working.get(path) == Some(content.as_str()) {
            return false;
        }
        self.working.set(path, content)
    }

    /// Replaces the current project's snapshot with the whole working copy.
    pub fn commit(&mut self) -> bool {
        let Some(name) = &self.current else {
            return false;
        };
        if self.registry.get(name) == Some(&self.working) {
            return false;
        }
        self.registry.insert(name.clone(), self.working.clone());
        true
    }

    /// Encodes the working copy, uncommitted edits included.
    pub fn export_archive(&self) -> Result<Option<ExportedArchive>, ProjectError> {
        let Some(name) = &self.current else {
            return Ok(None);
        };
        let bytes = archive::encode(&self.working).map_err(ProjectError::Encode)?;
        Ok(Some(ExportedArchive {
            file_name: archive::archive_file_name(name),
            bytes,
        }))
    }

    /// Upserts `updates`, then `newFiles`, into the working copy.
    pub fn merge_assistant_result(&mut self, result: &AssistantResponse) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        let before = self.open_file().map(|f| f.content.to_string());
        let mut written = FxHashSet::default();

        for tree in [&result.updates, &result.new_files].into_iter().flatten() {
            for (path, content) in tree.iter() {
                self.working.upsert(path, content);
                written.insert(path);
            }
        }

        outcome.files_written = written.len();

        outcome.open_file_changed = before.as_deref() != self.open_file().map(|f| f.content);
        outcome
    }

    fn register_and_select(&mut self, name: String, tree: FileTree) -> ProjectHandle {
        if !self.registry.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.registry.insert(name.clone(), tree.clone());
        self.set_current(name, tree)
    }

    fn set_current(&mut self, name: String, tree: FileTree) -> ProjectHandle {
        self.generation += 1;
        self.current = Some(name.clone());
        self.working = tree;
        self.open_path = None;
        ProjectHandle {
            name,
            generation: self.generation,
        }
    }
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self::new(TemplateCatalog::builtin())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/projects.rs"]
mod tests;
