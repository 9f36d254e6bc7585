use crate::domain::model::TextFile;
use crate::domain::ports::Storage;
use crate::utils::error::{CompareError, Result};
use std::fs;
use std::path::Path;

/// Reads run output from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_text_file(&self, path: &Path) -> Result<TextFile> {
        let text = fs::read_to_string(path).map_err(|e| CompareError::io(path, e))?;
        Ok(TextFile::from_text(path.display().to_string(), &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.tagInfo");
        fs::write(&path, "H1\nL1\n").unwrap();

        let file = LocalStorage::new().read_text_file(&path).unwrap();

        assert_eq!(file.lines, vec!["H1", "L1"]);
        assert!(file.source.ends_with("run.tagInfo"));
    }

    #[test]
    fn test_read_text_file_with_carriage_returns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.tagInfo");
        fs::write(&path, "H1\rL1\r\nL2\r").unwrap();

        let file = LocalStorage::new().read_text_file(&path).unwrap();

        assert_eq!(file.lines, vec!["H1", "L1", "L2"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new();
        let missing = dir.path().join("missing.summaryCounts");

        match storage.read_text_file(&missing) {
            Err(CompareError::IoError { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
