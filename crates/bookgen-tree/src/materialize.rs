//! Recursive materialization of a node tree into directories and files.
//!
//! The traversal is pre-order and depth-first: a folder's directory (and its
//! optional `README.md`) is created before its children, and a page's file is
//! written before any nested nodes below it. Existing Markdown files are
//! never overwritten unless force mode is enabled, so the generator is safe
//! to re-run against an incrementally edited structure document.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::node::{Node, NodeKind};
use crate::path::{PageLocation, normalize_path};

/// Result of a single file write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written (created or overwritten in force mode).
    Written,
    /// File already existed and force mode was off.
    Skipped,
}

/// Per-run summary of materialization decisions.
///
/// Collected alongside log output so callers can summarize a run and tests
/// can assert behavior without capturing logs.
#[derive(Debug, Default)]
pub struct Report {
    /// Files written this run.
    pub written: Vec<PathBuf>,
    /// Pre-existing files left untouched.
    pub skipped: Vec<PathBuf>,
    /// Recoverable warnings (unknown node kinds).
    pub warnings: Vec<String>,
}

/// Materialization error. All variants are fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    /// Filesystem operation failed.
    #[error("I/O error at {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Two distinct nodes resolved to the same output file within one run.
    #[error("two nodes resolve to the same output file: {}", .0.display())]
    Collision(PathBuf),
}

/// Write Markdown content, creating parent directories as needed.
///
/// If the file already exists and `force` is false, nothing is written and
/// [`WriteOutcome::Skipped`] is returned.
pub fn write_markdown(
    path: &Path,
    content: &str,
    force: bool,
) -> Result<WriteOutcome, MaterializeError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    if !force && path.exists() {
        return Ok(WriteOutcome::Skipped);
    }

    fs::write(path, content).map_err(|source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WriteOutcome::Written)
}

/// Materializes a [`Node`] tree under a fixed output root.
///
/// The output root and force flag are explicit state here rather than
/// globals so runs against alternate roots (tests, previews) need no
/// process-wide setup.
pub struct Materializer {
    output_root: PathBuf,
    force: bool,
}

/// Mutable per-run state: the report plus the set of claimed output files
/// used for collision detection.
#[derive(Default)]
struct Run {
    report: Report,
    claimed: HashSet<PathBuf>,
}

impl Materializer {
    /// Create a materializer writing under `output_root`.
    ///
    /// With `force` enabled, pre-existing Markdown files are overwritten.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            output_root: output_root.into(),
            force,
        }
    }

    /// Materialize the tree rooted at `root`.
    ///
    /// Output artifacts are created or left untouched, never deleted.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializeError`] on filesystem failure or when two nodes
    /// resolve to the same output file.
    pub fn materialize(&self, root: &Node) -> Result<Report, MaterializeError> {
        create_dir_all(&self.output_root)?;

        let mut run = Run::default();
        self.process_node(root, true, &mut run)?;
        Ok(run.report)
    }

    fn process_node(
        &self,
        node: &Node,
        is_root: bool,
        run: &mut Run,
    ) -> Result<(), MaterializeError> {
        match &node.kind {
            NodeKind::Folder => {
                let dir = self.folder_dir(node, is_root);
                create_dir_all(&dir)?;

                // A folder carrying content gets it as the directory's README,
                // verbatim; only an absent or empty string suppresses the file
                if let Some(content) = node.content.as_deref().filter(|c| !c.is_empty()) {
                    self.write_file(&dir.join("README.md"), content, run)?;
                }

                for child in &node.children {
                    self.process_node(child, false, run)?;
                }
            }
            NodeKind::Page => {
                let location =
                    PageLocation::resolve(node.path.as_deref(), is_root, &self.output_root);
                let content = page_content(node, &location);
                self.write_file(&location.file_path(), &content, run)?;

                // Non-standard but supported: pages may nest further nodes
                for child in &node.children {
                    self.process_node(child, false, run)?;
                }
            }
            NodeKind::Unknown(kind) => {
                let title = node.title.as_deref().unwrap_or("untitled");
                tracing::warn!(kind, title, "unknown node type, skipping");
                run.report
                    .warnings
                    .push(format!("unknown node type `{kind}`, skipped: {title}"));
            }
        }
        Ok(())
    }

    /// Directory a folder node maps to. The root folder maps to the output
    /// root itself regardless of its own path.
    fn folder_dir(&self, node: &Node, is_root: bool) -> PathBuf {
        let rel = normalize_path(node.path.as_deref());
        if is_root || rel.is_empty() {
            self.output_root.clone()
        } else {
            self.output_root.join(rel)
        }
    }

    /// Write one output file, recording the outcome and enforcing that no
    /// two nodes claim the same file within a run.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
        run: &mut Run,
    ) -> Result<(), MaterializeError> {
        if !run.claimed.insert(path.to_path_buf()) {
            return Err(MaterializeError::Collision(path.to_path_buf()));
        }

        match write_markdown(path, content, self.force)? {
            WriteOutcome::Written => {
                tracing::info!(path = %path.display(), "wrote file");
                run.report.written.push(path.to_path_buf());
            }
            WriteOutcome::Skipped => {
                tracing::info!(path = %path.display(), "exists, not overwritten");
                run.report.skipped.push(path.to_path_buf());
            }
        }
        Ok(())
    }
}

/// Content for a page node: its trimmed body when non-empty, otherwise a
/// single heading line derived from the title or the file slug.
fn page_content(node: &Node, location: &PageLocation) -> String {
    match node.content.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => body.to_owned(),
        _ => {
            let heading = node
                .title
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| location.file_name.trim_end_matches(".md"));
            format!("# {heading}\n")
        }
    }
}

fn create_dir_all(path: &Path) -> Result<(), MaterializeError> {
    fs::create_dir_all(path).map_err(|source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
