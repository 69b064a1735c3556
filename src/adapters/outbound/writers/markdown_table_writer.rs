use super::table_layout::{markdown_format, render_table};
use crate::ports::outbound::ReportWriter;
use crate::shared::error::WriteError;
use std::io::Write;

/// MarkdownTableWriter adapter rendering report rows as a Markdown table
///
/// Like [`TableWriter`](super::TableWriter) it buffers rows and renders once
/// on flush. Markdown rows cannot span lines, so cells are never wrapped:
/// line breaks become spaces and pipes are escaped.
pub struct MarkdownTableWriter<W: Write> {
    out: W,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    flushed: bool,
    error: Option<WriteError>,
}

impl<W: Write> MarkdownTableWriter<W> {
    pub fn new(out: W, header: &[&str]) -> Self {
        Self {
            out,
            header: header.iter().map(|h| escape_markdown_table_cell(h)).collect(),
            rows: Vec::new(),
            flushed: false,
            error: None,
        }
    }
}

impl<W: Write> ReportWriter for MarkdownTableWriter<W> {
    fn write(&mut self, fields: &[&str]) -> Result<(), WriteError> {
        if self.flushed {
            return Err(WriteError::AlreadyFlushed);
        }
        self.rows
            .push(fields.iter().map(|f| escape_markdown_table_cell(f)).collect());
        Ok(())
    }

    fn flush(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;

        if let Err(e) = render_table(&mut self.out, markdown_format(), &self.header, &self.rows) {
            self.error = Some(WriteError::from(e));
        }
    }

    fn error(&self) -> Option<WriteError> {
        self.error.clone()
    }
}

/// Escapes pipe characters and line breaks for safe Markdown table rendering
fn escape_markdown_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", " ").replace(['\n', '\r'], " ")
}
