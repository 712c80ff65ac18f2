//! Tree materializer for the bookgen documentation generator.
//!
//! This crate turns a JSON structure document (a recursive tree of folder and
//! page nodes) into a Markdown file/folder hierarchy on disk. It handles:
//!
//! - Parsing the structure document into a [`Node`] tree
//! - Logical path normalization and page file placement
//! - Recursive, pre-order materialization with a skip-unless-forced write
//!   policy (hand-edited Markdown survives regeneration by default)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bookgen_tree::{Materializer, Node};
//!
//! let root = Node::from_file(Path::new("docs-structure.json"))?;
//! let materializer = Materializer::new("docs", false);
//! let report = materializer.materialize(&root)?;
//! println!("wrote {} files", report.written.len());
//! ```

mod materialize;
mod node;
mod path;

pub use materialize::{MaterializeError, Materializer, Report, WriteOutcome, write_markdown};
pub use node::{Node, NodeKind, TreeError};
pub use path::{PageLocation, normalize_path};
