//! Service ports: traits + data contracts.

pub mod assistant;
pub mod runtime;
pub mod settings;

pub use assistant::{AssistantRequest, AssistantResponse, ResponseError};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{AssistantSettings, Settings, TemplateSettings, DEFAULT_ENDPOINT};
