use super::table_layout::{ascii_format, render_table, TableLayout};
use crate::ports::outbound::ReportWriter;
use crate::shared::error::WriteError;
use std::io::Write;

/// TableWriter adapter rendering report rows as a fixed-width table
///
/// Rows are buffered in memory and the whole table is rendered once, on
/// flush, so column widths can account for every value. Header text is used
/// exactly as supplied.
pub struct TableWriter<W: Write> {
    out: W,
    header: Vec<String>,
    layout: TableLayout,
    rows: Vec<Vec<String>>,
    flushed: bool,
    error: Option<WriteError>,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, header: &[&str]) -> Self {
        Self {
            out,
            header: header.iter().map(|h| h.to_string()).collect(),
            layout: TableLayout::for_header(header),
            rows: Vec::new(),
            flushed: false,
            error: None,
        }
    }
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write(&mut self, fields: &[&str]) -> Result<(), WriteError> {
        if self.flushed {
            return Err(WriteError::AlreadyFlushed);
        }
        self.rows
            .push(fields.iter().map(|f| self.layout.wrap(f)).collect());
        Ok(())
    }

    fn flush(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;

        if let Err(e) = render_table(&mut self.out, ascii_format(), &self.header, &self.rows) {
            self.error = Some(WriteError::from(e));
        }
    }

    fn error(&self) -> Option<WriteError> {
        self.error.clone()
    }
}
