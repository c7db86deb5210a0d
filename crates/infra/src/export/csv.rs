//! CSV report sink
//!
//! Writes report rows in fixed column order to a file or stdout. The header
//! row is written when the sink is opened, so even an empty run produces a
//! well-formed file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use ghreport_core::ports::ReportSink;
use ghreport_domain::types::report::{METRICS_HEADER, TEAM_SEAT_HEADER};
use ghreport_domain::{MetricsRow, ReportError, Result, TeamSeatRow};
use tracing::info;

/// Which report layout the sink emits; fixes the header and column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    TeamSeat,
    Metrics,
}

pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    kind: ReportKind,
    rows: u64,
}

impl CsvSink<File> {
    /// Open a file sink, truncating any existing file, and write the header.
    pub fn create(path: &Path, kind: ReportKind) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| ReportError::Export(format!("cannot create {}: {e}", path.display())))?;
        info!(path = %path.display(), "writing report");
        Self::from_writer(file, kind)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap any writer (stdout, an in-memory buffer in tests) as a sink.
    pub fn from_writer(inner: W, kind: ReportKind) -> Result<Self> {
        let mut writer = Writer::from_writer(inner);
        match kind {
            ReportKind::TeamSeat => writer.write_record(TEAM_SEAT_HEADER),
            ReportKind::Metrics => writer.write_record(METRICS_HEADER),
        }
        .map_err(|e| ReportError::Export(format!("cannot write CSV header: {e}")))?;
        Ok(Self { writer, kind, rows: 0 })
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    fn write(&mut self, record: impl IntoIterator<Item = String>) -> Result<()> {
        self.writer
            .write_record(record)
            .map_err(|e| ReportError::Export(format!("cannot write CSV row: {e}")))?;
        self.rows += 1;
        Ok(())
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_team_seat(&mut self, row: &TeamSeatRow) -> Result<()> {
        debug_assert_eq!(self.kind, ReportKind::TeamSeat);
        self.write(row.record())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> Result<()> {
        debug_assert_eq!(self.kind, ReportKind::Metrics);
        self.write(row.record())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| ReportError::Export(format!("cannot flush CSV output: {e}")))?;
        info!(rows = self.rows, "report flushed");
        Ok(())
    }
}
