use std::io::{self, Write};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;

/// A synthesized table held in memory: one header line plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Stream the document as CSV.
    ///
    /// Fields are comma-separated and quoted only when they contain a comma,
    /// a quote or a line break. Records end with `\r\n`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Encode the whole document.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Render the whole document to a string.
    pub fn render(&self) -> Result<String> {
        String::from_utf8(self.to_bytes()?)
            .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)).into())
    }
}
