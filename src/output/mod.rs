//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `text` - Newline-joined path listing, optionally colored
//! - `json` - JSON output

mod config;
mod json;
mod text;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use text::{ListingFormatter, render_text, summary_line};
