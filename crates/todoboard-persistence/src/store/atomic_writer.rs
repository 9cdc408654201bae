use std::io::Write;
use std::path::Path;
use todoboard_core::{BoardError, BoardResult};

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating the parent directory if needed
    ///
    /// A crash mid-write leaves the previous file untouched.
    pub fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| storage_error(path, e))?;

        // Temp file in the same directory keeps the rename on one filesystem
        let mut temp_file =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| storage_error(path, e))?;
        temp_file
            .write_all(data)
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| storage_error(path, e))?;
        temp_file
            .persist(path)
            .map_err(|e| storage_error(path, e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub fn read_all(path: &Path) -> BoardResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> BoardError {
    BoardError::Storage {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");
        let data = b"Hello, World!";

        AtomicWriter::write_atomic(&file_path, data).unwrap();

        let read_data = AtomicWriter::read_all(&file_path).unwrap();
        assert_eq!(read_data, data);
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        let read_data = AtomicWriter::read_all(&file_path).unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("deeper").join("state.json");

        AtomicWriter::write_atomic(&file_path, b"{}").unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("state.json");
        AtomicWriter::write_atomic(&file_path, b"{}").unwrap();

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
