//! Line reader with per-line fallible parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tally_model::LineIssue;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// How line bytes are decoded into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// Lines that are not valid UTF-8 become [`LineIssue`]s.
    #[default]
    Strict,
    /// Invalid sequences are replaced with U+FFFD.
    Lossy,
}

/// Options controlling how an input file is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    pub decoding: Decoding,
}

impl IngestOptions {
    #[must_use]
    pub fn with_decoding(mut self, decoding: Decoding) -> Self {
        self.decoding = decoding;
        self
    }
}

/// A successfully parsed line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine<T> {
    /// 1-based physical line number.
    pub line_number: usize,
    pub value: T,
}

/// Parsed values and rejected lines of one file, both in line order.
#[derive(Debug, Clone)]
pub struct LineReport<T> {
    pub values: Vec<ParsedLine<T>>,
    pub issues: Vec<LineIssue>,
    /// Number of physical lines read.
    pub lines_read: usize,
}

impl<T> Default for LineReport<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            issues: Vec::new(),
            lines_read: 0,
        }
    }
}

/// Opens an input file for buffered line reading.
pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    Ok(BufReader::new(file))
}

/// Reads `path` line by line, trims each line and passes it to `parse`.
///
/// Parse failures are recorded as [`LineIssue`]s and logged; the line is
/// dropped and reading continues. Only failing to open or read the file is an
/// error.
pub fn read_parsed_lines<T, F>(
    path: &Path,
    options: &IngestOptions,
    mut parse: F,
) -> Result<LineReport<T>>
where
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let reader = open_file(path)?;
    let mut report = LineReport::default();

    let mut line_number = 0;
    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(|e| IngestError::from_io(path, e))?;
        for bytes in physical_lines(&chunk) {
            line_number += 1;
            report.lines_read = line_number;

            let text = match decode(bytes.to_vec(), options.decoding) {
                Ok(text) => text,
                Err(raw) => {
                    let reason = "invalid UTF-8".to_string();
                    record_issue(&mut report, path, line_number, raw, reason);
                    continue;
                }
            };
            let trimmed = text.trim();
            match parse(trimmed) {
                Ok(value) => report.values.push(ParsedLine { line_number, value }),
                Err(reason) => {
                    record_issue(&mut report, path, line_number, trimmed.to_string(), reason);
                }
            }
        }
    }

    debug!(
        path = %path.display(),
        lines = report.lines_read,
        valid = report.values.len(),
        rejected = report.issues.len(),
        "file read"
    );
    Ok(report)
}

/// Splits a `\n`-terminated chunk on `\r`, so `\r\n` and a lone `\r` both end a line.
fn physical_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    body.split(|&b| b == b'\r')
}

fn decode(bytes: Vec<u8>, decoding: Decoding) -> std::result::Result<String, String> {
    match decoding {
        Decoding::Strict => String::from_utf8(bytes)
            .map_err(|e| String::from_utf8_lossy(e.as_bytes()).trim().to_string()),
        Decoding::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

fn record_issue<T>(
    report: &mut LineReport<T>,
    path: &Path,
    line_number: usize,
    raw: String,
    reason: String,
) {
    warn!(
        path = %path.display(),
        line = line_number,
        raw = %raw,
        reason = %reason,
        "skipping invalid line"
    );
    report.issues.push(LineIssue {
        line_number,
        raw,
        reason,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(chunk: &[u8]) -> Vec<String> {
        physical_lines(chunk)
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    #[test]
    fn carriage_returns_split_physical_lines() {
        assert_eq!(lines_of(b"1\r"), vec!["1"]);
        assert_eq!(lines_of(b"1\r2\r3\r"), vec!["1", "2", "3"]);
        assert_eq!(lines_of(b"\r\r"), vec!["", ""]);
        assert_eq!(lines_of(b""), vec![""]);
    }

    #[test]
    fn strict_decoding_rejects_invalid_utf8() {
        let decoded = decode(vec![b'1', 0xFF, b'2'], Decoding::Strict);
        assert_eq!(decoded, Err("1\u{FFFD}2".to_string()));
    }

    #[test]
    fn lossy_decoding_replaces_invalid_bytes() {
        let decoded = decode(vec![b'h', 0xFF, b'i'], Decoding::Lossy);
        assert_eq!(decoded, Ok("h\u{FFFD}i".to_string()));
    }
}
