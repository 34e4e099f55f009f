//! Folio Core
//!
//! The read-only filesystem behind the portfolio terminal and the resolver
//! that walks it. Nothing here mutates after construction, so a single
//! [`Filesystem`] can be shared by any number of sessions.

#![allow(missing_docs)]

pub mod error;
pub mod path;
pub mod portfolio;
pub mod vfs;

pub use error::{FsError, FsResult};
pub use path::{format_path, normalize, resolve, Resolution};
pub use vfs::{Filesystem, FsNode, NodeKind};
