//! Loading documentation JSON from disk.
//!
//! The loader is the only place malformed nodes are rejected; everything
//! downstream assumes a well-formed [`Document`].

use std::path::Path;

use crate::document::Document;
use crate::error::{ModelError, Result};

impl Document {
    /// Parse a document from a JSON string.
    ///
    /// Groups must carry `name` and `commands`, commands must carry `command`.
    /// `description` and `parameters` default to empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a documentation file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_document(path.as_ref())
    }
}

/// Read and parse a documentation file.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Document::from_json_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        groups = document.groups().len(),
        commands = document.command_count(),
        "loaded documentation"
    );
    Ok(document)
}

/// Load a document, reporting failure as an absent document.
///
/// Hosts render the "documentation not found" view for `None`, so a failed
/// load is logged here and not propagated.
pub fn load_optional(path: &Path) -> Option<Document> {
    match load_document(path) {
        Ok(document) => Some(document),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "documentation unavailable");
            None
        }
    }
}
