//! reclist - recursively list every file and directory beneath a path

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{ListerError, Result};
pub use output::{ListingFormatter, OutputConfig, print_json, render_text};
pub use tree::{Entry, EntryKind, TreeWalker, WalkReport, WalkerConfig, walk};
