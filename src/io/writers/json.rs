use std::io::Write;

use crate::io::writers::ExportWriter;
use crate::io::PortfolioExport;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ExportWriter for JsonWriter<W> {
    fn write_portfolio(&mut self, export: &PortfolioExport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(export)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}
