//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::WalkReport;

/// Print a walk report as pretty-printed JSON to stdout.
pub fn print_json(report: &WalkReport) -> Result<()> {
    write_json(&mut io::stdout().lock(), report)
}

/// Serialize the whole report before writing, so a failure leaves `out` untouched.
pub fn write_json<W: Write>(out: &mut W, report: &WalkReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
