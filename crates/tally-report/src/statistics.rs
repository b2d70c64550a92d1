//! `StatisticsResults.txt` layout.

use tally_model::{FileSummary, RunSummary, StatisticsSummary};

use crate::format::{NOT_AVAILABLE, format_float};

type StatisticsFile = FileSummary<Option<StatisticsSummary>>;

/// Renders one `TC` header row plus one row per metric, a column per file.
///
/// Files without valid data get `#N/A` in every row.
pub fn render_statistics_report(run: &RunSummary<Option<StatisticsSummary>>) -> Vec<String> {
    let header = std::iter::once("TC".to_string())
        .chain(run.files.iter().map(|file| file.label.clone()));
    let count = row("COUNT", &run.files, |file| {
        (file.valid_count > 0).then(|| file.valid_count.to_string())
    });

    let mut lines = vec![join(header), count];
    let metrics: [(&str, fn(&StatisticsSummary) -> f64); 5] = [
        ("MEAN", |s| s.mean),
        ("MEDIAN", |s| s.median),
        ("MODE", |s| s.mode),
        ("SD", |s| s.std_dev),
        ("VARIANCE", |s| s.variance),
    ];
    for (name, metric) in metrics {
        lines.push(row(name, &run.files, |file| {
            statistics_of(file).map(|stats| format_float(metric(&stats)))
        }));
    }
    lines
}

fn statistics_of(file: &StatisticsFile) -> Option<StatisticsSummary> {
    file.result.flatten()
}

fn row<F>(name: &str, files: &[StatisticsFile], cell: F) -> String
where
    F: Fn(&StatisticsFile) -> Option<String>,
{
    let cells = files
        .iter()
        .map(|file| cell(file).unwrap_or_else(|| NOT_AVAILABLE.to_string()));
    join(std::iter::once(name.to_string()).chain(cells))
}

fn join(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("\t")
}
