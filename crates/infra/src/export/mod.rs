pub mod csv;

pub use csv::{CsvSink, ReportKind};
