//! Logical path normalization and page file placement.
//!
//! Node paths are slash-separated logical paths, not filesystem paths. The
//! mapping to the output tree is:
//!
//! - `""` / `"/"` / absent → the output root
//! - `"a/b"` for a page → `<output root>/a/b.md`
//! - `"a/b"` for a folder → `<output root>/a/b/`

use std::path::{Path, PathBuf};

/// Strip leading and trailing slash characters from a logical node path.
///
/// `None`, `""` and `"/"` all normalize to the empty string, which maps to
/// the output root.
pub fn normalize_path(path: Option<&str>) -> &str {
    path.unwrap_or("").trim_matches('/')
}

/// Resolved output location for a page node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Directory the file lives in.
    pub dir: PathBuf,
    /// File name, `<slug>.md` or `README.md` for the root page.
    pub file_name: String,
}

impl PageLocation {
    /// Resolve where a page node's Markdown file goes.
    ///
    /// The root page (or any page whose normalized path is empty) becomes
    /// `README.md` at the output root. Otherwise the last path segment is
    /// the file slug and the remaining segments form the directory under
    /// the output root. A degenerate empty slug falls back to `index`.
    #[must_use]
    pub fn resolve(path: Option<&str>, is_root: bool, output_root: &Path) -> Self {
        let normalized = normalize_path(path);
        if is_root || normalized.is_empty() {
            return Self {
                dir: output_root.to_path_buf(),
                file_name: "README.md".to_owned(),
            };
        }

        let mut segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        let slug = segments.pop().unwrap_or("index");
        let dir = segments
            .iter()
            .fold(output_root.to_path_buf(), |dir, segment| dir.join(segment));

        Self {
            dir,
            file_name: format!("{slug}.md"),
        }
    }

    /// Full path of the Markdown file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_strips_slashes() {
        assert_eq!(normalize_path(Some("/a/b/")), "a/b");
        assert_eq!(normalize_path(Some("///a///")), "a");
        assert_eq!(normalize_path(Some("a/b")), "a/b");
    }

    #[test]
    fn test_normalize_root_like_inputs() {
        assert_eq!(normalize_path(None), "");
        assert_eq!(normalize_path(Some("")), "");
        assert_eq!(normalize_path(Some("/")), "");
    }

    #[test]
    fn test_resolve_root_page() {
        let loc = PageLocation::resolve(Some("/"), true, Path::new("docs"));

        assert_eq!(loc.dir, PathBuf::from("docs"));
        assert_eq!(loc.file_name, "README.md");
        assert_eq!(loc.file_path(), PathBuf::from("docs/README.md"));
    }

    #[test]
    fn test_resolve_empty_path_maps_to_root_readme() {
        // Not the root node, but an empty logical path still lands at the root
        let loc = PageLocation::resolve(None, false, Path::new("docs"));

        assert_eq!(loc.dir, PathBuf::from("docs"));
        assert_eq!(loc.file_name, "README.md");
    }

    #[test]
    fn test_resolve_top_level_page() {
        let loc = PageLocation::resolve(Some("/intro"), false, Path::new("docs"));

        assert_eq!(loc.dir, PathBuf::from("docs"));
        assert_eq!(loc.file_name, "intro.md");
    }

    #[test]
    fn test_resolve_nested_page_depth() {
        // k segments → file at depth k-1 named after the last segment
        let loc = PageLocation::resolve(Some("/a/b/c"), false, Path::new("docs"));

        assert_eq!(loc.dir, PathBuf::from("docs/a/b"));
        assert_eq!(loc.file_name, "c.md");
    }

    #[test]
    fn test_resolve_ignores_redundant_slashes() {
        let loc = PageLocation::resolve(Some("//a//b//"), false, Path::new("docs"));

        assert_eq!(loc.dir, PathBuf::from("docs/a"));
        assert_eq!(loc.file_name, "b.md");
    }
}
