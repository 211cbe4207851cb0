//! Walk results

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// JSON strings must be UTF-8; names that are not are replaced lossily.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_paths<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

/// Whether an emitted path was a directory when the walker queried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// One emitted path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Everything a single walk produced.
///
/// Entries are in pre-order: every directory appears before its contents,
/// and its contents follow it contiguously. Directories that could not be
/// listed contribute no entries and are recorded in `unreadable` instead.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WalkReport {
    #[serde(serialize_with = "lossy_path")]
    root: PathBuf,
    entries: Vec<Entry>,
    #[serde(serialize_with = "lossy_paths")]
    unreadable: Vec<PathBuf>,
}

impl WalkReport {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            unreadable: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, path: PathBuf, kind: EntryKind) {
        self.entries.push(Entry { path, kind });
    }

    pub(crate) fn mark_unreadable(&mut self, path: PathBuf) {
        self.unreadable.push(path);
    }

    /// The absolute root the walk started from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over emitted paths in traversal order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }

    /// Directories whose listing failed, including the root itself.
    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    pub fn file_count(&self) -> usize {
        self.len() - self.dir_count()
    }

    /// Consume the report, keeping only the path sequence.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.entries.into_iter().map(|e| e.path).collect()
    }
}
