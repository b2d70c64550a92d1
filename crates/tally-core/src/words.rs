//! Word normalization and frequency counting.

use tally_ingest::{Decoding, IngestOptions, LabelStyle, ParsedLine};
use tally_model::WordFrequencyTable;

use crate::collector::Aggregator;

/// Keeps only the letters of `token`, lowercased as a whole word.
///
/// Letter numerals such as `Ⅻ` are not letters. Returns `None` when no
/// letter remains.
pub fn normalize_word(token: &str) -> Option<String> {
    let letters: String = token.chars().filter(|&c| is_letter(c)).collect();
    (!letters.is_empty()).then(|| letters.to_lowercase())
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Splits `line` on whitespace and normalizes every token.
pub fn words_in_line(line: &str) -> Vec<String> {
    line.split_whitespace().filter_map(normalize_word).collect()
}

pub fn count_words<I, S>(lines: I) -> WordFrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| words_in_line(line.as_ref()))
        .collect()
}

/// Aggregator behind `word-count`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountAggregator;

impl Aggregator for WordCountAggregator {
    type Value = Vec<String>;
    type Output = WordFrequencyTable;

    fn name(&self) -> &'static str {
        "word-count"
    }

    fn label_style(&self) -> LabelStyle {
        LabelStyle::Path
    }

    fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default().with_decoding(Decoding::Lossy)
    }

    fn parse_line(&self, line: &str) -> Result<Vec<String>, String> {
        Ok(words_in_line(line))
    }

    fn aggregate(&self, lines: Vec<ParsedLine<Vec<String>>>) -> WordFrequencyTable {
        lines.into_iter().flat_map(|line| line.value).collect()
    }

    fn data_points(&self, output: &WordFrequencyTable, _parsed_lines: usize) -> usize {
        usize::try_from(output.total()).unwrap_or(usize::MAX)
    }
}
