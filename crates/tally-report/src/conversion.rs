//! `ConvertionResults.txt` layout.

use tally_model::{ConversionRecord, RunSummary};

pub const CONVERSION_HEADER: &str = "ÍTEM\tNúmero\tArchivo\tBIN\tHEX";

/// Renders the header, one row per converted line grouped by file in input
/// order, and the elapsed time of the whole run.
///
/// Files that could not be read contribute no rows.
pub fn render_conversion_report(run: &RunSummary<Vec<ConversionRecord>>) -> Vec<String> {
    let mut lines = vec![CONVERSION_HEADER.to_string()];
    for file in &run.files {
        let Some(records) = file.result.as_ref() else {
            continue;
        };
        lines.extend(records.iter().map(|record| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                record.line_number, record.value, file.label, record.binary, record.hexadecimal
            )
        }));
    }
    lines.push(format!(
        "Tiempo transcurrido: {:.6} segundos",
        run.elapsed.as_secs_f64()
    ));
    lines
}
