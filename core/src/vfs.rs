use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FsError, FsResult};
use crate::path::format_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// A node of the in-memory tree. Directories only know their children;
/// there are no parent links, every walk starts at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    File {
        name: String,
        content: String,
    },
    Directory {
        name: String,
        children: BTreeMap<String, FsNode>,
    },
}

impl FsNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Build a directory. Children are keyed by their own name, so a later
    /// child with a duplicate name replaces the earlier one.
    pub fn dir(name: impl Into<String>, children: impl IntoIterator<Item = FsNode>) -> Self {
        let children = children
            .into_iter()
            .map(|child| (child.name().to_string(), child))
            .collect();
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::File { .. } => NodeKind::File,
            Self::Directory { .. } => NodeKind::Directory,
        }
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Directory { .. } => None,
        }
    }

    /// Children in name order. Files have none.
    pub fn children(&self) -> impl Iterator<Item = &FsNode> {
        let children = match self {
            Self::Directory { children, .. } => Some(children.values()),
            Self::File { .. } => None,
        };
        children.into_iter().flatten()
    }

    #[must_use]
    pub fn lookup_child(&self, name: &str) -> Option<&FsNode> {
        match self {
            Self::Directory { children, .. } => children.get(name),
            Self::File { .. } => None,
        }
    }
}

/// The immutable tree. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filesystem {
    root: FsNode,
}

impl Filesystem {
    pub fn new(children: impl IntoIterator<Item = FsNode>) -> Self {
        Self {
            root: FsNode::dir("", children),
        }
    }

    #[must_use]
    pub const fn root(&self) -> &FsNode {
        &self.root
    }

    /// Look up `name` directly under `directory`. Absent for files and for
    /// missing names.
    #[must_use]
    pub fn lookup_child<'a>(&self, directory: &'a FsNode, name: &str) -> Option<&'a FsNode> {
        directory.lookup_child(name)
    }

    /// Walk already-normalized segments from the root.
    pub fn walk(&self, segments: &[String]) -> FsResult<&FsNode> {
        let mut node = &self.root;
        for (depth, segment) in segments.iter().enumerate() {
            if !node.is_dir() {
                return Err(FsError::not_a_directory(format_path(&segments[..depth])));
            }
            node = node
                .lookup_child(segment)
                .ok_or_else(|| FsError::not_found(format_path(&segments[..=depth])))?;
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Filesystem {
        Filesystem::new([
            FsNode::file("readme.txt", "hello"),
            FsNode::dir(
                "docs",
                [FsNode::file("a.txt", "A"), FsNode::dir("nested", [])],
            ),
        ])
    }

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn root_is_unnamed_directory() {
        let fs = sample();
        assert!(fs.root().is_dir());
        assert_eq!(fs.root().name(), "");
    }

    #[test]
    fn lookup_child_finds_direct_children_only() {
        let fs = sample();
        let docs = fs.lookup_child(fs.root(), "docs").unwrap();
        assert_eq!(docs.kind(), NodeKind::Directory);
        assert!(fs.lookup_child(fs.root(), "a.txt").is_none());
        assert!(fs.lookup_child(docs, "a.txt").is_some());

        let readme = fs.lookup_child(fs.root(), "readme.txt").unwrap();
        assert!(fs.lookup_child(readme, "anything").is_none());
    }

    #[test]
    fn children_are_name_sorted() {
        let fs = sample();
        let names: Vec<_> = fs.root().children().map(FsNode::name).collect();
        assert_eq!(names, ["docs", "readme.txt"]);
        let readme = fs.lookup_child(fs.root(), "readme.txt").unwrap();
        assert_eq!(readme.children().count(), 0);
    }

    #[test]
    fn duplicate_child_names_keep_the_last() {
        let dir = FsNode::dir("d", [FsNode::file("x", "1"), FsNode::file("x", "2")]);
        assert_eq!(dir.children().count(), 1);
        assert_eq!(dir.lookup_child("x").and_then(FsNode::content), Some("2"));
    }

    #[test]
    fn walk_empty_is_root() {
        let fs = sample();
        assert_eq!(fs.walk(&[]).unwrap(), fs.root());
    }

    #[test]
    fn walk_reports_missing_segment() {
        let fs = sample();
        let err = fs.walk(&segs(&["docs", "missing", "deeper"])).unwrap_err();
        assert_eq!(err, FsError::not_found("/docs/missing"));
    }

    #[test]
    fn walk_through_file_is_not_a_directory() {
        let fs = sample();
        let err = fs.walk(&segs(&["readme.txt", "x"])).unwrap_err();
        assert_eq!(err, FsError::not_a_directory("/readme.txt"));
    }

    #[test]
    fn walk_may_end_on_a_file() {
        let fs = sample();
        let node = fs.walk(&segs(&["docs", "a.txt"])).unwrap();
        assert_eq!(node.content(), Some("A"));
    }
}
