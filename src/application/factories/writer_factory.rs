use crate::adapters::outbound::writers::{DelimitedWriter, MarkdownTableWriter, TableWriter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportWriter;
use std::io::Write;

/// Factory for creating report writers
///
/// Maps an already validated [`ReportFormat`] to the matching writer adapter,
/// so the report assembler only ever sees a single resolved writer.
pub struct WriterFactory;

impl WriterFactory {
    /// Creates a writer for `format` that owns `out`
    ///
    /// # Examples
    /// ```
    /// use license_report::application::dto::ReportFormat;
    /// use license_report::application::factories::WriterFactory;
    /// use license_report::ports::outbound::ReportWriter;
    ///
    /// let mut buf = Vec::new();
    /// {
    ///     let mut writer = WriterFactory::create(
    ///         ReportFormat::Delimited,
    ///         Box::new(&mut buf),
    ///         &["name", "license_url", "license_name"],
    ///     );
    ///     writer.flush();
    /// }
    /// assert_eq!(buf, b"name,license_url,license_name\n");
    /// ```
    pub fn create<'a>(
        format: ReportFormat,
        out: Box<dyn Write + 'a>,
        header: &[&str],
    ) -> Box<dyn ReportWriter + 'a> {
        match format {
            ReportFormat::Delimited => Box::new(DelimitedWriter::new(out, header)),
            ReportFormat::Table => Box::new(TableWriter::new(out, header)),
            ReportFormat::MarkdownTable => Box::new(MarkdownTableWriter::new(out, header)),
        }
    }

    /// Returns the progress message for the specified format
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Delimited => "📝 Writing CSV report...",
            ReportFormat::Table => "📝 Writing table report...",
            ReportFormat::MarkdownTable => "📝 Writing Markdown table report...",
        }
    }
}
