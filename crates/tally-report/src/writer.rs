//! Console echo and report file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, Result};

/// Echoes `lines` to `console`, then writes them to `path`.
///
/// The file is written even when the console echo fails; the first error wins.
pub fn emit_report<W: Write>(lines: &[String], path: &Path, console: &mut W) -> Result<()> {
    let echoed = lines
        .iter()
        .try_for_each(|line| writeln!(console, "{line}"))
        .and_then(|()| console.flush())
        .map_err(ReportError::Console);
    write_report(lines, path)?;
    echoed
}

/// Writes `lines`, newline-terminated, to `path`, replacing any existing file.
pub fn write_report(lines: &[String], path: &Path) -> Result<()> {
    let to_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;
    info!(path = %path.display(), lines = lines.len(), "report written");
    Ok(())
}
