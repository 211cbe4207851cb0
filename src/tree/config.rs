//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend only N levels deep. Entries of the root are at depth 1.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
    /// Treat symlinks to directories as directories and descend into them.
    pub follow_symlinks: bool,
}

impl WalkerConfig {
    /// Check if a directory found at `depth` may be descended.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }

    /// Check if anything at `depth` may be emitted at all.
    pub fn may_emit(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: true,
        }
    }
}
