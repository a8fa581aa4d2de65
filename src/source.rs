//! Source file loading with strict decoding.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{DumpError, DumpResult};
use crate::lines::split_lines;
use crate::window::{LineWindow, NumberedLine};

/// A text file read fully into memory and split into lines.
///
/// Loading is strict: invalid UTF-8 anywhere in the file is a fatal
/// [`DumpError::Decoding`], never patched up. Leniency exists only on the
/// output side ([`crate::lines::sanitize_line`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read and decode the file at `path`.
    ///
    /// The file handle is scoped to the read; nothing stays open afterwards.
    pub fn load(path: impl Into<PathBuf>) -> DumpResult<Self> {
        let path = path.into();
        let bytes = fs::read(&path).map_err(|source| DumpError::FileAccess {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| DumpError::Decoding {
            path: path.clone(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        let lines = split_lines(&text).into_iter().map(str::to_string).collect();
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines covered by `window`, clamped to the file, with 1-based numbers.
    pub fn select(&self, window: LineWindow) -> Vec<NumberedLine<'_>> {
        let range = window.clamp(self.line_count());
        self.lines[range.clone()]
            .iter()
            .enumerate()
            .map(|(offset, text)| NumberedLine {
                number: range.start + offset + 1,
                text: text.as_str(),
            })
            .collect()
    }
}
