//! Data model shared by the tally tools.
//!
//! Every tool produces one [`FileSummary`] per input file and gathers them in a
//! [`RunSummary`]. The per-file payload depends on the tool:
//!
//! - `compute-statistics`: `Option<StatisticsSummary>` (absent for files without valid numbers)
//! - `convert-numbers`: `Vec<ConversionRecord>`
//! - `word-count`: [`WordFrequencyTable`]

pub mod conversion;
pub mod statistics;
pub mod summary;
pub mod words;

pub use conversion::ConversionRecord;
pub use statistics::StatisticsSummary;
pub use summary::{FileStatus, FileSummary, LineIssue, RunSummary};
pub use words::WordFrequencyTable;
