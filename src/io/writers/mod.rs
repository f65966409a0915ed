//! Writers that encode a [`PortfolioExport`] onto an output sink.

mod json;
mod tabular;

pub use json::JsonWriter;
pub use tabular::{summary_rows, CsvWriter, SummaryCsvWriter, SummaryRow};

use std::io::Write;

use crate::io::PortfolioExport;

/// Supported export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Complete document: header, statistics, and studies
    Json,
    /// Detailed row-per-study table with domain and raw-answer columns
    Csv,
    /// Publication-ready summary table
    CsvSummary,
}

/// Sink for a portfolio export document
pub trait ExportWriter {
    fn write_portfolio(&mut self, export: &PortfolioExport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: ExportFormat, writer: W) -> Box<dyn ExportWriter> {
    match format {
        ExportFormat::Json => Box::new(JsonWriter::new(writer)),
        ExportFormat::Csv => Box::new(CsvWriter::new(writer)),
        ExportFormat::CsvSummary => Box::new(SummaryCsvWriter::new(writer)),
    }
}
