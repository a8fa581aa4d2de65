//! linedump: print a fixed window of one source file with 1-based line numbers.
//!
//! The input path and the line range are embedded in the binary; the only
//! run-to-run variation is the content of the inspected file. Input decoding
//! is strict, output re-encoding drops unrepresentable characters.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod lines;
pub mod source;
pub mod util;
pub mod window;

pub use errors::{DumpError, DumpResult};
pub use source::SourceFile;
pub use window::{LineWindow, NumberedLine};
