//! Error types for tree and path operations.

use thiserror::Error;

/// Errors from writing into the tree.
///
/// A missing path on read is not an error; lookups return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A write was addressed at zero segments.
    #[error("cannot write to an empty path")]
    EmptyPath,

    /// A write tried to descend through a stored value as if it were a node.
    #[error("segment {segment:?} holds a value and cannot have children")]
    BlockedByValue { segment: String },
}

/// Errors from parsing a path string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not start with the segment delimiter.
    #[error("path {path:?} is not absolute")]
    NotAbsolute { path: String },

    /// The path contains an empty segment, e.g. `/a//b` or `/a/`.
    #[error("path {path:?} has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
}

/// Convenience type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
