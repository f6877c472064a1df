//! Flat file tree: relative path -> text content.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

/// One line of the explorer listing derived from the flat path map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTreeRow<'a> {
    pub depth: usize,
    pub name: &'a str,
    pub kind: NodeKind,
    /// Full path for files; `None` for synthesized directory rows.
    pub path: Option<&'a str>,
}

/// Mapping of forward-slash separated relative paths to file contents.
///
/// Keys are unique and iterate in sorted order. Directories are implicit:
/// they exist only as prefixes of file paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    files: BTreeMap<String, String>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Inserts or overwrites `path`. Returns the previous content, if any.
    pub fn upsert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), content.into())
    }

    /// Overwrites an existing path. Returns `false` if the path is absent.
    pub fn set(&mut self, path: &str, content: impl Into<String>) -> bool {
        match self.files.get_mut(path) {
            Some(slot) => {
                *slot = content.into();
                true
            }
            None => false,
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Explorer rows in sorted path order. A directory row is emitted the
    /// first time its prefix appears.
    pub fn rows(&self) -> Vec<FileTreeRow<'_>> {
        let mut rows = Vec::new();
        let mut open_dirs: Vec<&str> = Vec::new();

        for path in self.files.keys() {
            let segments: Vec<&str> = path.split('/').collect();
            let (dirs, name) = segments.split_at(segments.len() - 1);

            let shared = open_dirs
                .iter()
                .zip(dirs.iter())
                .take_while(|(a, b)| a == b)
                .count();
            open_dirs.truncate(shared);

            for (depth, dir) in dirs.iter().enumerate().skip(shared) {
                rows.push(FileTreeRow {
                    depth,
                    name: dir,
                    kind: NodeKind::Dir,
                    path: None,
                });
                open_dirs.push(dir);
            }

            rows.push(FileTreeRow {
                depth: dirs.len(),
                name: name[0],
                kind: NodeKind::File,
                path: Some(path.as_str()),
            });
        }

        rows
    }
}

impl FromIterator<(String, String)> for FileTree {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FileTree {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl IntoIterator for FileTree {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
