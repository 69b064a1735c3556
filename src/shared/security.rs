use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a license file that will be read (1 MiB)
pub const MAX_LICENSE_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size of a dependency manifest that will be read (32 MiB)
pub const MAX_MANIFEST_SIZE: u64 = 32 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a regular file into a string after checking type and size
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Description used in error messages (e.g., "license file")
/// * `max_size` - Maximum accepted size in bytes
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or cannot be inspected
/// - The path is a symbolic link or not a regular file
/// - The file is larger than `max_size`
/// - The content is not valid UTF-8
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} {}: {}",
            file_description,
            path.display(),
            e
        )
    })
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("LICENSE");
        fs::write(&file_path, "MIT").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/LICENSE");
        assert!(validate_not_symlink(&path, "write").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("LICENSE");
        let link = temp_dir.path().join("LICENSE.link");
        fs::write(&target, "MIT").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_regular_file(&link, "license file", MAX_LICENSE_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("LICENSE");
        fs::write(&file_path, "Apache License").unwrap();

        let content = read_regular_file(&file_path, "license file", MAX_LICENSE_FILE_SIZE).unwrap();
        assert_eq!(content, "Apache License");
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_regular_file(temp_dir.path(), "license file", MAX_LICENSE_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("LICENSE");
        fs::write(&file_path, "0123456789").unwrap();

        let result = read_regular_file(&file_path, "license file", 4);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/LICENSE");
        assert!(validate_file_size(1000, &path, MAX_LICENSE_FILE_SIZE).is_ok());
    }
}
