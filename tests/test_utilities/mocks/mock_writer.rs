use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output stream that accepts a fixed number of bytes, then fails
///
/// Everything accepted is kept in `written` so tests can inspect partial
/// output after the writer is gone.
#[derive(Clone)]
pub struct FailingWriter {
    pub written: Arc<Mutex<Vec<u8>>>,
    pub capacity: usize,
}

impl FailingWriter {
    pub fn new(capacity: usize) -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            capacity,
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.written.lock().unwrap()).into_owned()
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut written = self.written.lock().unwrap();
        let remaining = self.capacity.saturating_sub(written.len());
        if remaining == 0 {
            return Err(io::Error::other("disk full"));
        }
        let accepted = remaining.min(buf.len());
        written.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
