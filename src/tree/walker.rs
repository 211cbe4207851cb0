//! TreeWalker - flattens a directory tree into a pre-order path listing

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::config::WalkerConfig;
use super::report::{EntryKind, WalkReport};
use super::traversal::{AncestorChain, Frame, absolute_root, classify, read_entries};

/// Depth-first, pre-order directory walker.
///
/// Every entry beneath the root is emitted as an absolute path before any of
/// its own children. Entries keep the order the filesystem lists them in.
/// A directory that cannot be listed contributes nothing and is noted in the
/// report's `unreadable` list; walking never fails.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn walk(&self, root: &Path) -> WalkReport {
        let root = absolute_root(root);
        let mut report = WalkReport::new(root.clone());

        if !self.config.may_emit(1) {
            return report;
        }

        let mut chain = AncestorChain::default();
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.open_dir(&root, 1, &mut chain, &mut report) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let depth = frame.depth;
            let Some(entry) = frame.next_entry() else {
                if let Some(done) = stack.pop() {
                    chain.leave(&done.canonical);
                }
                continue;
            };

            let path = entry.path();
            let kind = classify(&entry, self.config.follow_symlinks);
            report.push(path.clone(), kind);

            if kind == EntryKind::Dir && self.config.may_descend(depth) {
                if let Some(child) = self.open_dir(&path, depth + 1, &mut chain, &mut report) {
                    stack.push(child);
                }
            }
        }

        report
    }

    /// List a directory and register it on the ancestor chain.
    /// Returns None when it must not be descended.
    fn open_dir(
        &self,
        path: &Path,
        depth: usize,
        chain: &mut AncestorChain,
        report: &mut WalkReport,
    ) -> Option<Frame> {
        let canonical = match path.canonicalize() {
            Ok(c) => c,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot resolve directory");
                report.mark_unreadable(path.to_path_buf());
                return None;
            }
        };

        if !chain.enter(&canonical) {
            debug!(
                path = %path.display(),
                target = %canonical.display(),
                "not descending into an ancestor"
            );
            return None;
        }

        match read_entries(path) {
            Ok(entries) => {
                trace!(path = %path.display(), entries = entries.len(), depth, "listing directory");
                Some(Frame::new(entries, depth, canonical))
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot list directory");
                chain.leave(&canonical);
                report.mark_unreadable(path.to_path_buf());
                None
            }
        }
    }
}

/// Walk `root` with the default configuration and return the path sequence.
pub fn walk(root: &Path) -> Vec<PathBuf> {
    TreeWalker::default().walk(root).into_paths()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn position(paths: &[PathBuf], p: &Path) -> usize {
        paths
            .iter()
            .position(|x| x == p)
            .unwrap_or_else(|| panic!("{} missing from {:?}", p.display(), paths))
    }

    #[test]
    fn test_flat_directory() {
        let dir = TempDir::new().unwrap();
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let paths = walk(dir.path());
        assert_eq!(paths.len(), 3);
        for p in &paths {
            assert!(p.is_absolute());
            assert_ne!(p, dir.path());
        }
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(walk(dir.path()).is_empty());

        let report = TreeWalker::default().walk(dir.path());
        assert!(report.unreadable().is_empty());
    }

    #[test]
    fn test_missing_root_is_silent() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let report = TreeWalker::default().walk(&missing);
        assert!(report.is_empty());
        assert_eq!(report.unreadable(), &[missing]);
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(walk(&file).is_empty());
    }

    #[test]
    fn test_pre_order_nesting() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(root.join("b/c")).unwrap();
        fs::write(root.join("a/file1"), "").unwrap();
        fs::write(root.join("b/c/file2"), "").unwrap();

        let paths = walk(root);
        assert_eq!(paths.len(), 5);

        let a = position(&paths, &root.join("a"));
        let file1 = position(&paths, &root.join("a/file1"));
        let b = position(&paths, &root.join("b"));
        let c = position(&paths, &root.join("b/c"));
        let file2 = position(&paths, &root.join("b/c/file2"));

        assert_eq!(file1, a + 1, "a's subtree follows a directly");
        assert_eq!(c, b + 1);
        assert_eq!(file2, c + 1);
    }

    #[test]
    fn test_subtrees_are_contiguous() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for p in ["x/1", "x/2", "x/y/3", "z/4", "top"] {
            let full = root.join(p);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, "").unwrap();
        }

        let paths = walk(root);
        let x = root.join("x");
        let start = position(&paths, &x);
        let inside = paths.iter().filter(|p| p.starts_with(&x) && **p != x).count();
        for p in &paths[start + 1..=start + inside] {
            assert!(p.starts_with(&x), "{} breaks x's subtree", p.display());
        }
    }

    #[test]
    fn test_everything_under_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("deep/er/still")).unwrap();
        fs::write(dir.path().join("deep/er/still/leaf"), "").unwrap();

        for p in walk(dir.path()) {
            assert!(p.starts_with(dir.path()));
            assert!(p.exists());
        }
    }

    #[test]
    fn test_repeat_walk_same_set() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/f"), "").unwrap();
        fs::write(dir.path().join("g"), "").unwrap();

        let mut first = walk(dir.path());
        let mut second = walk(dir.path());
        first.sort();
        second.sort();
        assert_eq!(first, second);
    }

    #[test]
    fn test_kinds_recorded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();
        fs::write(dir.path().join("d/f"), "").unwrap();

        let report = TreeWalker::default().walk(dir.path());
        assert_eq!(report.dir_count(), 1);
        assert_eq!(report.file_count(), 1);
        assert!(report.entries()[0].is_dir());
    }

    #[test]
    fn test_max_depth() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/f"), "").unwrap();

        let walker = TreeWalker::new(WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        });
        let paths = walker.walk(dir.path()).into_paths();
        assert_eq!(paths, vec![dir.path().join("a"), dir.path().join("a/b")]);

        let none = TreeWalker::new(WalkerConfig {
            max_depth: Some(0),
            ..Default::default()
        });
        assert!(none.walk(dir.path()).is_empty());
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let dir = TempDir::new().unwrap();
        let mut deep = dir.path().to_path_buf();
        for _ in 0..200 {
            deep.push("d");
        }
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(walk(dir.path()).len(), 200);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_cycle_is_bounded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/f"), "").unwrap();
        std::os::unix::fs::symlink("..", dir.path().join("sub/up")).unwrap();

        let paths = walk(dir.path());
        // sub, sub/f, sub/up; the link itself is listed but not expanded
        assert_eq!(paths.len(), 3);
        assert!(paths.contains(&dir.path().join("sub/up")));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_to_sibling_is_expanded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/f"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();

        let paths = walk(dir.path());
        assert!(paths.contains(&dir.path().join("real/f")));
        assert!(paths.contains(&dir.path().join("alias/f")));
    }

    #[test]
    #[cfg(unix)]
    fn test_no_follow_lists_link_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/f"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();

        let walker = TreeWalker::new(WalkerConfig {
            follow_symlinks: false,
            ..Default::default()
        });
        let report = walker.walk(dir.path());
        let paths: Vec<_> = report.paths().collect();
        assert!(paths.contains(&dir.path().join("alias").as_path()));
        assert!(!paths.contains(&dir.path().join("alias/f").as_path()));
        assert_eq!(report.dir_count(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret"), "").unwrap();
        fs::write(dir.path().join("open"), "").unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can list anything; nothing to check then.
        let enforced = fs::read_dir(&locked).is_err();
        let report = TreeWalker::default().walk(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !enforced {
            return;
        }
        let paths: Vec<_> = report.paths().collect();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&locked.as_path()));
        assert_eq!(report.unreadable(), &[locked]);
    }
}
