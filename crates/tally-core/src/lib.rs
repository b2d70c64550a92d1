//! Per-file aggregation cores and the multi-file collector.
//!
//! - [`statistics`]: mean, median, mode, population variance and standard deviation
//! - [`conversion`]: decimal to binary / hexadecimal by repeated division
//! - [`words`]: word normalization and frequency counting
//! - [`collector`]: the [`Aggregator`] trait and the loop that runs it over many files

pub mod collector;
pub mod conversion;
pub mod statistics;
pub mod words;

pub use collector::{Aggregator, collect_file, collect_files};
pub use conversion::{
    ConversionAggregator, Radix, convert, decimal_to_binary, decimal_to_hexadecimal, parse_integer,
    to_radix,
};
pub use statistics::{
    StatisticsAggregator, compute_statistics, mean, median, mode, parse_real, population_variance,
};
pub use words::{WordCountAggregator, count_words, normalize_word, words_in_line};
