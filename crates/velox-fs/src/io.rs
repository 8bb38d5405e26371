//! Blocking reads of parameter documents

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_returns_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.yaml");
        fs::write(&path, "m: 1000\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "m: 1000\n");
    }

    #[test]
    fn read_text_tags_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn read_text_reports_invalid_utf8_as_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.yaml");
        fs::write(&path, b"name: caf\xe9\n").unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { .. }), "got {err:?}");
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
