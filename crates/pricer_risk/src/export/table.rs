//! Whitespace-delimited table sink.
//!
//! One line per record, seven numeric columns, no header, sweep order:
//!
//! ```text
//! h fd_delta ad_delta fd_vega ad_vega fd_rho ad_rho
//! ```
//!
//! Values use Rust's shortest round-trip exponent form (`1e-5`,
//! `3.2154e-12`); invalid entries print as `NaN`. `numpy.loadtxt` reads the
//! file directly.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use super::error::ExportError;
use crate::comparison::ComparisonRecord;

/// Destination for comparison records.
pub trait RecordSink {
    /// Writes all records, in order.
    fn write_records(&mut self, records: &[ComparisonRecord]) -> Result<(), ExportError>;
}

/// Writes records as a space-delimited table.
///
/// # Examples
/// ```
/// use pricer_models::market::MarketParams;
/// use pricer_risk::comparison::{ComparisonHarness, StepSweep};
/// use pricer_risk::export::{RecordSink, TableWriter};
///
/// let report = ComparisonHarness::new(MarketParams::reference())
///     .run(&StepSweep::Linear { increment: 1e-3, count: 2 })
///     .unwrap();
///
/// let mut writer = TableWriter::from_writer(Vec::new());
/// writer.write_records(report.records()).unwrap();
/// let text = String::from_utf8(writer.finish().unwrap()).unwrap();
///
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.lines().all(|l| l.split(' ').count() == 7));
/// ```
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    writer: csv::Writer<W>,
    written: usize,
}

impl TableWriter<File> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    /// `ExportError::Io` if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let file = File::create(path.as_ref())?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> TableWriter<W> {
    /// Wraps any writer.
    pub fn from_writer(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(inner);

        Self { writer, written: 0 }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    /// `ExportError::Io` if the final flush fails.
    pub fn finish(self) -> Result<W, ExportError> {
        let written = self.written;
        let inner = self
            .writer
            .into_inner()
            .map_err(|err| ExportError::Io(err.into_error()))?;
        info!(records = written, "table written");
        Ok(inner)
    }
}

impl<W: Write> RecordSink for TableWriter<W> {
    fn write_records(&mut self, records: &[ComparisonRecord]) -> Result<(), ExportError> {
        for record in records {
            self.writer
                .write_record(record.columns().iter().map(|v| format!("{:e}", v)))?;
            self.written += 1;
        }
        self.writer.flush()?;
        Ok(())
    }
}
