//! Export of comparison records.
//!
//! - [`RecordSink`] / [`TableWriter`]: the seven-column whitespace table
//! - [`PlotRenderer`] / [`PythonRenderer`]: hands a [`PlotScript`] to an
//!   external interpreter
//!
//! The table is flushed and closed before any plot is rendered, so the
//! plotting process always reads complete data.

pub mod error;
pub mod plot;
pub mod table;

pub use error::ExportError;
pub use plot::{PlotRenderer, PlotScript, PythonRenderer, DEFAULT_INTERPRETER};
pub use table::{RecordSink, TableWriter};

use std::path::Path;

use crate::comparison::ComparisonReport;

/// Writes the report's records to a new table file at `path`.
///
/// The file is closed when this returns.
///
/// # Errors
/// `ExportError::Io` or `ExportError::Csv` on write failure.
pub fn write_table<P: AsRef<Path>>(report: &ComparisonReport, path: P) -> Result<usize, ExportError> {
    let mut writer = TableWriter::create(path)?;
    writer.write_records(report.records())?;
    let written = writer.written();
    writer.finish()?;
    Ok(written)
}
