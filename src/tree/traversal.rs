//! Building blocks for the iterative walk.
//!
//! The walker keeps an explicit stack of [`Frame`]s instead of recursing, so
//! tree depth is bounded by heap rather than call stack. Each frame owns the
//! fully-read listing of one directory; the directory handle itself is closed
//! before any child is opened.

use std::collections::HashSet;
use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

use super::report::EntryKind;

/// A directory whose entries are still being emitted.
pub struct Frame {
    entries: std::vec::IntoIter<DirEntry>,
    /// Depth of the entries in this frame (root entries are depth 1).
    pub depth: usize,
    /// Canonical path of the directory, as registered in the ancestor chain.
    pub canonical: PathBuf,
}

impl Frame {
    pub fn new(entries: Vec<DirEntry>, depth: usize, canonical: PathBuf) -> Self {
        Self {
            entries: entries.into_iter(),
            depth,
            canonical,
        }
    }

    pub fn next_entry(&mut self) -> Option<DirEntry> {
        self.entries.next()
    }
}

/// Canonical paths of the directories currently open on the stack.
///
/// A directory that resolves to one of its own ancestors would loop forever;
/// such entries are emitted but never descended.
#[derive(Debug, Default)]
pub struct AncestorChain {
    active: HashSet<PathBuf>,
}

impl AncestorChain {
    /// Register a directory. Returns false if it is already an ancestor.
    pub fn enter(&mut self, canonical: &Path) -> bool {
        if self.active.contains(canonical) {
            return false;
        }
        self.active.insert(canonical.to_path_buf());
        true
    }

    pub fn leave(&mut self, canonical: &Path) {
        self.active.remove(canonical);
    }
}

/// Read the immediate entries of a directory in enumeration order.
/// Entries that fail to read individually are dropped.
pub fn read_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    Ok(std::fs::read_dir(path)?.filter_map(|e| e.ok()).collect())
}

/// Decide whether an entry is a directory.
///
/// With `follow_symlinks` the answer comes from the symlink target, so a link
/// to a directory counts as one. A dangling link is always a file.
pub fn classify(entry: &DirEntry, follow_symlinks: bool) -> EntryKind {
    let is_dir = if follow_symlinks {
        entry.path().is_dir()
    } else {
        entry.file_type().is_ok_and(|t| t.is_dir())
    };
    if is_dir { EntryKind::Dir } else { EntryKind::File }
}

/// Resolve a possibly-relative root against the current directory.
/// Symlinks and `..` are left alone so emitted paths keep the caller's prefix.
pub fn absolute_root(root: &Path) -> PathBuf {
    std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf())
}
