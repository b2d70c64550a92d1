//! Line-oriented ingestion of plain-text input files.
//!
//! # Features
//!
//! - **Line Reading**: Read a file line by line, trimming each line and handing it
//!   to a tool-specific parser
//! - **Issue Collection**: Lines that fail to parse are collected as [`LineIssue`]s
//!   instead of aborting the file
//! - **Labels**: Derive the per-file display name used by each report
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tally_ingest::{IngestOptions, read_parsed_lines};
//!
//! let lines = read_parsed_lines(Path::new("a.txt"), &IngestOptions::default(), |line| {
//!     line.parse::<f64>().map_err(|e| e.to_string())
//! })?;
//! println!("{} valid, {} rejected", lines.values.len(), lines.issues.len());
//! ```
//!
//! [`LineIssue`]: tally_model::LineIssue

mod error;
mod label;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Labels ===
pub use label::LabelStyle;

// === Line Reading ===
pub use reader::{Decoding, IngestOptions, LineReport, ParsedLine, open_file, read_parsed_lines};
