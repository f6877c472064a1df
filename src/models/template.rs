//! Template catalog: named file-tree skeletons used to seed new projects.

use super::FileTree;

const TEMPLATE_SUFFIX: &str = " (template)";

const WTZ_BASE: &[&str] = &[
    "fxmanifest.lua",
    "config.lua",
    "client/main.lua",
    "server/main.lua",
    "shared/utils.lua",
];

const DRUG_SYSTEM: &[&str] = &[
    "fxmanifest.lua",
    "config/drugs.lua",
    "server/production.lua",
    "server/cooldowns.lua",
    "client/interaction.lua",
    "shared/items.lua",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub files: FileTree,
}

impl Template {
    /// Template whose files all start empty.
    pub fn skeleton<I, S>(id: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            files: paths
                .into_iter()
                .map(|path| (path.into(), String::new()))
                .collect(),
        }
    }

    pub fn project_name(&self) -> String {
        project_name_for(&self.id)
    }
}

/// Name under which an instantiated template is registered.
pub fn project_name_for(template_id: &str) -> String {
    format!("{template_id}{TEMPLATE_SUFFIX}")
}

/// Read-only set of templates, enumerable in declaration order.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template::skeleton("WTZ Base", WTZ_BASE.iter().copied()),
                Template::skeleton("Drug System Template", DRUG_SYSTEM.iter().copied()),
            ],
        }
    }

    /// Adds a template, replacing any existing one with the same id in place.
    pub fn insert(&mut self, template: Template) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
