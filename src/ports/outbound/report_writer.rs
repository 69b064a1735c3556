use crate::shared::error::WriteError;

/// ReportWriter port - a sink rendering an ordered stream of report rows
///
/// Lifecycle: construct with a header, call [`write`](ReportWriter::write)
/// zero or more times, call [`flush`](ReportWriter::flush) exactly once, then
/// check [`error`](ReportWriter::error). Writing after a flush fails with
/// [`WriteError::AlreadyFlushed`]; a second flush does nothing.
pub trait ReportWriter {
    /// Appends one row
    ///
    /// # Errors
    /// Streaming writers return the underlying I/O failure. Buffering writers
    /// never perform I/O here and only fail when already flushed.
    fn write(&mut self, fields: &[&str]) -> Result<(), WriteError>;

    /// Flushes streamed output or renders buffered rows
    ///
    /// Failures are not returned; they are kept for [`error`](ReportWriter::error).
    fn flush(&mut self);

    /// Returns the first unrecovered error of this sink, if any
    fn error(&self) -> Option<WriteError>;
}

impl<W: ReportWriter + ?Sized> ReportWriter for Box<W> {
    fn write(&mut self, fields: &[&str]) -> Result<(), WriteError> {
        (**self).write(fields)
    }

    fn flush(&mut self) {
        (**self).flush()
    }

    fn error(&self) -> Option<WriteError> {
        (**self).error()
    }
}
