//! Descriptive statistics over a numeric sample.

use tally_ingest::{LabelStyle, ParsedLine};
use tally_model::StatisticsSummary;

use crate::collector::Aggregator;

/// Computes the full summary for `values`, or `None` for an empty sample.
pub fn compute_statistics(values: &[f64]) -> Option<StatisticsSummary> {
    let mean = mean(values)?;
    let sorted = sorted(values);
    let median = median_of_sorted(&sorted)?;
    let mode = mode_of_sorted(&sorted)?;
    let variance = variance_around(values, mean);
    Some(StatisticsSummary {
        mean,
        median,
        mode,
        variance,
        std_dev: variance.sqrt(),
    })
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value of the sorted sample; the average of the two middle values
/// when the sample size is even.
pub fn median(values: &[f64]) -> Option<f64> {
    median_of_sorted(&sorted(values))
}

/// Most frequent value. Ties resolve to the smallest value.
pub fn mode(values: &[f64]) -> Option<f64> {
    mode_of_sorted(&sorted(values))
}

/// Mean squared deviation from the mean, dividing by the sample size.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    mean(values).map(|mean| variance_around(values, mean))
}

/// Parses one line as a real number.
pub fn parse_real(line: &str) -> Result<f64, String> {
    line.parse::<f64>()
        .map_err(|_| "not a number".to_string())
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

// Runs of equal values are adjacent once sorted; a later run only wins with a
// strictly higher count, so ties keep the smallest value.
fn mode_of_sorted(sorted: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];
        let run = sorted[start..]
            .iter()
            .take_while(|&&other| other == value)
            .count()
            .max(1);
        if best.is_none_or(|(_, count)| run > count) {
            best = Some((value, run));
        }
        start += run;
    }
    best.map(|(value, _)| value)
}

fn variance_around(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Aggregator behind `compute-statistics`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAggregator;

impl Aggregator for StatisticsAggregator {
    type Value = f64;
    type Output = Option<StatisticsSummary>;

    fn name(&self) -> &'static str {
        "statistics"
    }

    fn label_style(&self) -> LabelStyle {
        LabelStyle::StripTxt
    }

    fn parse_line(&self, line: &str) -> Result<f64, String> {
        parse_real(line)
    }

    fn aggregate(&self, lines: Vec<ParsedLine<f64>>) -> Option<StatisticsSummary> {
        let sample: Vec<f64> = lines.into_iter().map(|line| line.value).collect();
        compute_statistics(&sample)
    }
}
