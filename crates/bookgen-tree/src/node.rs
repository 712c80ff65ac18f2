//! Node model for the structure document.
//!
//! The structure document is a single JSON object describing the root node.
//! Nodes are parsed once per run and never mutated afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Node kind tag, from the JSON `type` field.
///
/// Unrecognized values are preserved verbatim in [`NodeKind::Unknown`] so the
/// materializer can warn about them (naming the offending type) without
/// failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    /// Maps to a directory; optional content becomes its `README.md`.
    Folder,
    /// Maps to a single Markdown file.
    Page,
    /// Anything else. Skipped with a warning, children not traversed.
    Unknown(String),
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "folder" => Self::Folder,
            "page" => Self::Page,
            _ => Self::Unknown(value),
        }
    }
}

/// One entry in the structure document, either a folder or a page.
///
/// `children` order is significant: it determines write order during
/// materialization (the filesystem itself has no ordering).
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Node kind (`folder`, `page`, or anything else).
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Slash-separated logical path. Empty or `/` means the document root.
    #[serde(default)]
    pub path: Option<String>,
    /// Display name, used as fallback heading when content is absent.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional Markdown body.
    #[serde(default)]
    pub content: Option<String>,
    /// Ordered child nodes.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Error loading the structure document.
///
/// Both variants are fatal and occur before any filesystem write.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Structure document does not exist.
    #[error("structure document not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the structure document.
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Structure document is not valid JSON.
    #[error("failed to parse structure document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Node {
    /// Load and parse the structure document.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the file is missing, unreadable, or not
    /// valid JSON. No filesystem writes have happened at this point.
    pub fn from_file(path: &Path) -> Result<Self, TreeError> {
        if !path.exists() {
            return Err(TreeError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
