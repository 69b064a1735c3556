use crate::ports::outbound::ReportWriter;
use crate::shared::error::WriteError;
use std::io::{BufWriter, Write};

/// Field delimiter of the delimited format
const DELIMITER: char = ',';

/// Record terminator of the delimited format
const LINE_TERMINATOR: &str = "\n";

/// DelimitedWriter adapter streaming report rows as CSV
///
/// Each row is encoded completely before it reaches the buffered stream, so
/// the stream never holds a partial record. The header record is emitted
/// ahead of the first row, or on flush when no row was written.
///
/// Quoting follows RFC 4180: fields containing the delimiter, a double
/// quote, or a line break are quoted and embedded quotes are doubled. Fields
/// with leading whitespace and the lone field `\.` are quoted as well so that
/// common CSV readers do not trim or misinterpret them.
pub struct DelimitedWriter<W: Write> {
    out: BufWriter<W>,
    header: Vec<String>,
    header_written: bool,
    flushed: bool,
    error: Option<WriteError>,
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(out: W, header: &[&str]) -> Self {
        Self {
            out: BufWriter::new(out),
            header: header.iter().map(|h| h.to_string()).collect(),
            header_written: false,
            flushed: false,
            error: None,
        }
    }

    fn write_record(&mut self, fields: &[&str]) -> Result<(), WriteError> {
        let record = encode_record(fields);
        self.out.write_all(record.as_bytes()).map_err(|e| {
            let err = WriteError::from(e);
            self.error.get_or_insert_with(|| err.clone());
            err
        })
    }

    fn ensure_header(&mut self) -> Result<(), WriteError> {
        if self.header_written {
            return Ok(());
        }
        let header = std::mem::take(&mut self.header);
        let fields: Vec<&str> = header.iter().map(String::as_str).collect();
        let result = self.write_record(&fields);
        self.header = header;
        self.header_written = result.is_ok();
        result
    }
}

impl<W: Write> ReportWriter for DelimitedWriter<W> {
    fn write(&mut self, fields: &[&str]) -> Result<(), WriteError> {
        if self.flushed {
            return Err(WriteError::AlreadyFlushed);
        }
        self.ensure_header()?;
        self.write_record(fields)
    }

    fn flush(&mut self) {
        if self.flushed {
            return;
        }
        self.flushed = true;

        if self.ensure_header().is_err() {
            return;
        }
        if let Err(e) = self.out.flush() {
            self.error.get_or_insert_with(|| WriteError::from(e));
        }
    }

    fn error(&self) -> Option<WriteError> {
        self.error.clone()
    }
}

/// Encodes one record, including its line terminator
fn encode_record(fields: &[&str]) -> String {
    let mut record = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            record.push(DELIMITER);
        }
        if field_needs_quotes(field) {
            record.push('"');
            record.push_str(&field.replace('"', "\"\""));
            record.push('"');
        } else {
            record.push_str(field);
        }
    }
    record.push_str(LINE_TERMINATOR);
    record
}

fn field_needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    if field == r"\." {
        return true;
    }
    field.contains(DELIMITER)
        || field.contains('"')
        || field.contains('\r')
        || field.contains('\n')
        || field.starts_with(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_generation::domain::ReportRow;
    use std::io;

    fn render(rows: &[[&str; 3]]) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = DelimitedWriter::new(&mut buf, &ReportRow::HEADER);
            for row in rows {
                writer.write(row).unwrap();
            }
            writer.flush();
            assert!(writer.error().is_none());
        }
        String::from_utf8(buf).unwrap()
    }

    /// Sink that rejects every write
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn test_header_and_rows() {
        let output = render(&[
            ["pkg/a", "https://example/a/LICENSE", "MIT"],
            ["pkg/b", "Unknown", "Unknown"],
        ]);
        assert_eq!(
            output,
            "name,license_url,license_name\n\
             pkg/a,https://example/a/LICENSE,MIT\n\
             pkg/b,Unknown,Unknown\n"
        );
    }

    #[test]
    fn test_header_only_when_no_rows() {
        assert_eq!(render(&[]), "name,license_url,license_name\n");
    }

    #[test]
    fn test_quoting_rules() {
        let output = render(&[["a,b", "say \"hi\"", "line1\nline2"]]);
        assert_eq!(
            output.lines().nth(1).unwrap(),
            "\"a,b\",\"say \"\"hi\"\"\",\"line1"
        );
        assert!(output.ends_with("line2\"\n"));
    }

    #[test]
    fn test_leading_space_and_special_fields_are_quoted() {
        let output = render(&[[" padded", r"\.", ""]]);
        assert_eq!(output.lines().nth(1).unwrap(), "\" padded\",\"\\.\",");
    }

    #[test]
    fn test_plain_fields_are_not_quoted() {
        assert_eq!(encode_record(&["pkg/a", "Apache-2.0"]), "pkg/a,Apache-2.0\n");
    }

    #[test]
    fn test_write_after_flush_is_rejected() {
        let mut buf = Vec::new();
        let mut writer = DelimitedWriter::new(&mut buf, &ReportRow::HEADER);
        writer.flush();
        let err = writer.write(&["pkg/a", "Unknown", "Unknown"]).unwrap_err();
        assert!(matches!(err, WriteError::AlreadyFlushed));
    }

    #[test]
    fn test_second_flush_is_noop() {
        let mut buf = Vec::new();
        {
            let mut writer = DelimitedWriter::new(&mut buf, &ReportRow::HEADER);
            writer.flush();
            writer.flush();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "name,license_url,license_name\n");
    }

    #[test]
    fn test_buffered_failure_surfaces_on_flush() {
        let mut writer = DelimitedWriter::new(BrokenSink, &ReportRow::HEADER);
        writer.write(&["pkg/a", "Unknown", "Unknown"]).unwrap();
        assert!(writer.error().is_none());

        writer.flush();
        let err = writer.error().unwrap();
        assert!(err.to_string().contains("broken pipe"));
    }

    #[test]
    fn test_oversized_record_fails_on_write() {
        let mut writer = DelimitedWriter::new(BrokenSink, &ReportRow::HEADER);
        let long_url = "x".repeat(64 * 1024);

        let err = writer.write(&["pkg/a", &long_url, "MIT"]).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert!(writer.error().is_some());
    }
}
