//! Plain-text listing output
//!
//! The listing is one absolute path per line, each line terminated by a
//! newline. `ListingFormatter` writes the same text through `termcolor` so
//! directories can be highlighted on a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::Result;
use crate::tree::WalkReport;

use super::config::OutputConfig;

/// Render a report as newline-terminated lines, without color.
/// Names that are not valid UTF-8 are rendered lossily; `ListingFormatter`
/// writes the raw bytes instead.
pub fn render_text(report: &WalkReport) -> String {
    let mut text = String::new();
    for path in report.paths() {
        text.push_str(&path.to_string_lossy());
        text.push('\n');
    }
    text
}

/// The trailing summary line, e.g. "3 directories, 7 files".
pub fn summary_line(report: &WalkReport) -> String {
    let mut line = format!(
        "{} directories, {} files",
        report.dir_count(),
        report.file_count()
    );
    let unreadable = report.unreadable().len();
    if unreadable > 0 {
        line.push_str(&format!(", {} unreadable", unreadable));
    }
    line
}

/// Writes a whole listing at once to a color-capable writer.
pub struct ListingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl ListingFormatter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> ListingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_report(&mut self, report: &WalkReport) -> Result<()> {
        for entry in report.entries() {
            let bytes = entry.path.as_os_str().as_encoded_bytes();
            if entry.is_dir() && self.config.use_color {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                self.out.write_all(bytes)?;
                self.out.reset()?;
            } else {
                self.out.write_all(bytes)?;
            }
            writeln!(self.out)?;
        }

        if self.config.summary {
            if !report.is_empty() {
                writeln!(self.out)?;
            }
            writeln!(self.out, "{}", summary_line(report))?;
        }

        self.out.flush()?;
        Ok(())
    }
}
