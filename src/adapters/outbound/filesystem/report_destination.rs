use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the report stream goes
///
/// The destination is validated once, before the first row is produced, and
/// handed to the selected report writer. An output file is only created when
/// the writer emits its first byte, so a run that fails before writing
/// leaves any previous report in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    File(PathBuf),
}

impl ReportDestination {
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => ReportDestination::File(path),
            None => ReportDestination::Stdout,
        }
    }

    /// Opens the destination stream
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory of the output file does not exist
    /// - The output file exists and is a symbolic link
    ///
    /// A file that cannot be created surfaces as an I/O error on the first
    /// write.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            ReportDestination::Stdout => Ok(Box::new(io::stdout().lock())),
            ReportDestination::File(path) => {
                validate_parent_directory(path)?;
                validate_output_security(path)?;
                Ok(Box::new(DeferredFile::new(path.clone())))
            }
        }
    }

    /// Human-readable name for progress messages
    pub fn describe(&self) -> String {
        match self {
            ReportDestination::Stdout => "stdout".to_string(),
            ReportDestination::File(path) => path.display().to_string(),
        }
    }
}

/// Output file that is created, and truncated, on the first write
struct DeferredFile {
    path: PathBuf,
    file: Option<File>,
}

impl DeferredFile {
    fn new(path: PathBuf) -> Self {
        Self { path, file: None }
    }

    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = File::create(&self.path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create output file: {}\nDetails: {}\n\n💡 Hint: Please verify that you have write permissions",
                        self.path.display(),
                        e
                    ),
                )
            })?;
            self.file = Some(file);
        }
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(io::Error::other("output file is not open")),
        }
    }
}

impl Write for DeferredFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn validate_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            anyhow::bail!(
                "Failed to write to file: {}\nDetails: Parent directory does not exist: {}\n\n💡 Hint: Please verify that the directory exists",
                path.display(),
                parent.display()
            );
        }
    }
    Ok(())
}

/// Refuses to write through an existing symbolic link
fn validate_output_security(path: &Path) -> Result<()> {
    if path.symlink_metadata().is_ok() {
        validate_not_symlink(path, "write")?;
    }
    Ok(())
}
