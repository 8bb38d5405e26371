//! YAML parameter document loading
//!
//! Documents are parsed into an untyped [`serde_yaml::Value`] tree; mapping
//! the tree onto typed parameters is the caller's job.

use std::path::Path;

use serde_yaml::Value;

use crate::{DocumentKind, Error, Result, io};

/// Loads parameter documents from disk.
///
/// Existence is checked separately from parsing so a missing file is always
/// reported as [`Error::DocumentNotFound`], never as a parse failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Fail with [`Error::DocumentNotFound`] unless `path` exists.
    pub fn ensure_exists(&self, kind: DocumentKind, path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            tracing::debug!(%kind, path = %path.display(), "Parameter document missing");
            Err(Error::DocumentNotFound {
                kind,
                path: path.to_path_buf(),
            })
        }
    }

    /// Read and parse the document at `path`.
    ///
    /// A document without content parses to [`Value::Null`].
    pub fn parse(&self, path: &Path) -> Result<Value> {
        let content = io::read_text(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Parsing parameter document");
        parse_str(path, &content)
    }

    /// Existence check followed by [`DocumentStore::parse`].
    pub fn load(&self, kind: DocumentKind, path: &Path) -> Result<Value> {
        self.ensure_exists(kind, path)?;
        self.parse(path)
    }
}

fn parse_str(path: &Path, content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(content).map_err(|source| Error::DocumentParse {
        path: path.to_path_buf(),
        source,
    })
}
