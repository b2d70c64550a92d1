//! Rendering tests for the three report layouts.

use std::path::PathBuf;
use std::time::Duration;

use tally_model::{
    ConversionRecord, FileStatus, FileSummary, RunSummary, StatisticsSummary, WordFrequencyTable,
};
use tally_report::{
    CONVERSION_HEADER, render_conversion_report, render_statistics_report,
    render_word_count_report,
};

fn processed<T>(label: &str, valid_count: usize, result: T) -> FileSummary<T> {
    FileSummary {
        path: PathBuf::from(format!("{label}.txt")),
        label: label.to_string(),
        status: FileStatus::Processed,
        valid_count,
        result: Some(result),
        errors: Vec::new(),
        elapsed: Duration::from_millis(2),
    }
}

fn missing<T>(label: &str) -> FileSummary<T> {
    FileSummary::unavailable(
        PathBuf::from(format!("{label}.txt")),
        label.to_string(),
        FileStatus::Missing,
        format!("file not found: {label}.txt"),
        Duration::ZERO,
    )
}

#[test]
fn statistics_report_layout() {
    let run = RunSummary {
        files: vec![
            processed(
                "TC1",
                4,
                Some(StatisticsSummary {
                    mean: 2.5,
                    median: 2.5,
                    mode: 1.0,
                    variance: 1.25,
                    std_dev: 1.25_f64.sqrt(),
                }),
            ),
            missing("TC2"),
            processed("TC3", 0, None),
        ],
        elapsed: Duration::from_millis(5),
    };

    let lines = render_statistics_report(&run);

    insta::assert_snapshot!(lines.join("\n"), @r"
TC	TC1	TC2	TC3
COUNT	4	#N/A	#N/A
MEAN	2.5	#N/A	#N/A
MEDIAN	2.5	#N/A	#N/A
MODE	1.0	#N/A	#N/A
SD	1.118033988749895	#N/A	#N/A
VARIANCE	1.25	#N/A	#N/A
");
}

#[test]
fn statistics_report_without_files_has_metric_names_only() {
    let run: RunSummary<Option<StatisticsSummary>> = RunSummary {
        files: Vec::new(),
        elapsed: Duration::ZERO,
    };

    let lines = render_statistics_report(&run);

    assert_eq!(
        lines,
        vec!["TC", "COUNT", "MEAN", "MEDIAN", "MODE", "SD", "VARIANCE"]
    );
}

#[test]
fn conversion_report_groups_rows_by_file() {
    let record = |line_number, value: i64, binary: &str, hexadecimal: &str| ConversionRecord {
        line_number,
        value,
        binary: binary.to_string(),
        hexadecimal: hexadecimal.to_string(),
    };
    let run = RunSummary {
        files: vec![
            processed(
                "first",
                2,
                vec![record(1, 10, "1010", "A"), record(2, 255, "11111111", "FF")],
            ),
            missing("gone"),
            processed("second", 1, vec![record(3, 0, "0", "0")]),
        ],
        elapsed: Duration::from_micros(1_500),
    };

    let lines = render_conversion_report(&run);

    assert_eq!(
        lines,
        vec![
            CONVERSION_HEADER,
            "1\t10\tfirst\t1010\tA",
            "2\t255\tfirst\t11111111\tFF",
            "3\t0\tsecond\t0\t0",
            "Tiempo transcurrido: 0.001500 segundos",
        ]
    );
}

#[test]
fn word_count_report_layout() {
    let table: WordFrequencyTable = ["hello", "world", "hello"].into_iter().collect();
    let run = RunSummary {
        files: vec![
            processed("notes.txt", 3, table),
            missing("absent.txt"),
            processed("empty.txt", 0, WordFrequencyTable::new()),
        ],
        elapsed: Duration::from_millis(1_234),
    };

    let lines = render_word_count_report(&run);

    insta::assert_snapshot!(lines.join("\n"), @r"
Word Count Results:

Resultados para notes.txt:
hello: 2
world: 1

Resultados para absent.txt:
Error procesando el archivo.

Resultados para empty.txt:
Error procesando el archivo.

Tiempo transcurrido: 1.23 segundos
");
}
