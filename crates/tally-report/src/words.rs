//! `word_count_results.txt` layout.

use tally_model::{RunSummary, WordFrequencyTable};

/// Line printed for a file without a usable word table.
pub const FILE_ERROR_LINE: &str = "Error procesando el archivo.";

pub fn render_word_count_report(run: &RunSummary<WordFrequencyTable>) -> Vec<String> {
    let mut lines = vec!["Word Count Results:".to_string()];
    for file in &run.files {
        lines.push(String::new());
        lines.push(format!("Resultados para {}:", file.label));
        match file.result.as_ref() {
            Some(table) if !table.is_empty() => {
                lines.extend(table.iter().map(|(word, count)| format!("{word}: {count}")));
            }
            // an empty table gets the error line too
            _ => lines.push(FILE_ERROR_LINE.to_string()),
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Tiempo transcurrido: {:.2} segundos",
        run.elapsed.as_secs_f64()
    ));
    lines
}
