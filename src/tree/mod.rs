//! Directory tree walking logic
//!
//! `TreeWalker` flattens everything beneath a root into a single pre-order
//! sequence of absolute paths, returned as a `WalkReport`. The `walk` function
//! is the shorthand for the default configuration.

mod config;
mod report;
mod traversal;
mod walker;

pub use config::WalkerConfig;
pub use report::{Entry, EntryKind, WalkReport};
pub use walker::{TreeWalker, walk};
