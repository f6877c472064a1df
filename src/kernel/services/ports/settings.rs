use serde::{Deserialize, Serialize};

use crate::models::{Template, TemplateCatalog};

pub const DEFAULT_ENDPOINT: &str = "https://wtz-be-web.onrender.com/api/generate";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub templates: Vec<TemplateSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout; no timeout when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Extra template: every listed path starts as an empty file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    pub id: String,
    #[serde(default)]
    pub files: Vec<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Built-in templates extended (or overridden by id) with configured ones.
    pub fn catalog(&self) -> TemplateCatalog {
        let mut catalog = TemplateCatalog::builtin();
        for template in &self.templates {
            catalog.insert(Template::skeleton(
                template.id.clone(),
                template.files.iter().cloned(),
            ));
        }
        catalog
    }
}
