//! Service adapters: OS/runtime specific implementations (IO/async/HTTP).

pub mod assistant;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use assistant::{parse_response, AssistantError, AssistantService};
pub use paths::{ensure_log_dir, get_log_dir, get_settings_path};
pub use runtime::{read_archive, write_archive, AsyncRuntime};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, load_settings, SettingsError, SettingsService,
};
