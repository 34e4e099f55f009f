//! Path normalization and resolution against the portfolio tree.
//!
//! Paths are resolved purely: the caller hands in its current directory as a
//! segment list and gets back the node plus the normalized segments, which
//! `cd` stores as the new current directory.

use crate::error::FsResult;
use crate::vfs::{Filesystem, FsNode};

pub const SEPARATOR: char = '/';
pub const CURRENT_DIR: &str = ".";
pub const PARENT_DIR: &str = "..";

/// A successful walk: the node reached and the segments that name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub node: &'a FsNode,
    pub segments: Vec<String>,
}

/// Fold `path` onto `cwd`, applying `.` and `..`.
///
/// Absolute paths ignore `cwd`. Empty segments from repeated separators are
/// dropped and `..` at the root stays at the root.
#[must_use]
pub fn normalize(path: &str, cwd: &[String]) -> Vec<String> {
    let mut stack: Vec<String> = if path.starts_with(SEPARATOR) {
        Vec::new()
    } else {
        cwd.to_vec()
    };

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => {
                stack.pop();
            }
            name => stack.push(name.to_string()),
        }
    }

    stack
}

pub fn resolve<'a>(fs: &'a Filesystem, path: &str, cwd: &[String]) -> FsResult<Resolution<'a>> {
    let segments = normalize(path, cwd);
    match fs.walk(&segments) {
        Ok(node) => Ok(Resolution { node, segments }),
        Err(e) => {
            tracing::debug!(path, error = %e, at = e.path(), "path resolution failed");
            Err(e)
        }
    }
}

/// `/` for the root, `/a/b` otherwise.
#[must_use]
pub fn format_path(segments: &[String]) -> String {
    if segments.is_empty() {
        SEPARATOR.to_string()
    } else {
        format!("{SEPARATOR}{}", segments.join("/"))
    }
}

impl Filesystem {
    pub fn resolve<'a>(&'a self, path: &str, cwd: &[String]) -> FsResult<Resolution<'a>> {
        resolve(self, path, cwd)
    }
}
