//! Command execution: the one fixed dump operation.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{DumpError, DumpResult};
use crate::lines::sanitize_line;
use crate::source::SourceFile;
use crate::window::LineWindow;

/// The file this tool inspects. Embedded, not caller-supplied.
pub const SOURCE_PATH: &str = "electron/renderer.js";

/// Lines 1801 through 1850, as a zero-based half-open window.
pub const DUMP_WINDOW: LineWindow = LineWindow::new(1800, 1850);

/// Binary entry point: dump the embedded window of [`SOURCE_PATH`] to stdout.
#[instrument]
pub fn run() -> DumpResult<()> {
    dump(Path::new(SOURCE_PATH), DUMP_WINDOW, &mut io::stdout().lock())
}

/// Print the selected window of `path` to `out`, one `<number>: <text>`
/// record per line, ascending.
///
/// A file shorter than the window yields a short or empty dump, not an
/// error.
#[instrument(skip(out))]
pub fn dump(path: &Path, window: LineWindow, out: &mut impl Write) -> DumpResult<()> {
    let source = SourceFile::load(path)?;
    debug!(
        "loaded {} lines from {}, dumping from line {}",
        source.line_count(),
        source.path().display(),
        window.first_line_number()
    );

    for line in source.select(window) {
        writeln!(out, "{}: {}", line.number, sanitize_line(line.text))
            .map_err(|source| DumpError::Output { source })?;
    }
    Ok(())
}
