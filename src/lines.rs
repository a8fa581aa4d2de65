//! Line splitting and output-side sanitizing.
//!
//! The two directions are deliberately asymmetric: loading a file decodes
//! strictly (see [`crate::source::SourceFile::load`]), while the output path
//! drops anything the encoding cannot carry instead of failing.

use std::borrow::Cow;

/// Split `text` on universal newline boundaries: `\n`, `\r\n`, and lone `\r`.
///
/// Terminators are excluded from the returned lines. A trailing terminator
/// does not produce a trailing empty line; a final line without one is still
/// included. Empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Re-encode `line` for output, dropping whatever UTF-8 cannot represent.
///
/// Valid text passes through borrowed and byte-identical.
pub fn sanitize_line(line: &str) -> Cow<'_, str> {
    match drop_invalid_utf8(line.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(line),
        Cow::Owned(owned) => Cow::Owned(owned),
    }
}

/// Decode `bytes`, skipping invalid sequences entirely.
///
/// Unlike [`String::from_utf8_lossy`] no replacement character is
/// substituted: invalid input shrinks, it never gains U+FFFD.
pub fn drop_invalid_utf8(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(valid) => Cow::Borrowed(valid),
        Err(_) => {
            let mut out = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
            }
            Cow::Owned(out)
        }
    }
}
