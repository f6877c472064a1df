//! Data model layer: file trees, the archive codec and templates.

pub mod archive;
pub mod file_tree;
pub mod template;

pub use archive::{archive_file_name, project_name_from_file_name, ArchiveError};
pub use file_tree::{FileTree, FileTreeRow, NodeKind};
pub use template::{Template, TemplateCatalog};
