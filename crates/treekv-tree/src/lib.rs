//! In-memory hierarchical key/value tree for treekv.
//!
//! Values are addressed by slash-delimited absolute paths such as `/a/b/c`.
//! Each segment selects a child [`Node`]; the last segment of a fully
//! resolved path holds an opaque text value.
//!
//! # Components
//!
//! - [`Node`] -- one level of the hierarchy with concurrent-safe children
//! - [`Entry`] -- what a segment maps to: a child node or a text value
//! - [`TreePath`] -- a parsed absolute path
//! - [`PathTree`] -- the root node plus root-path handling
//!
//! # Rules
//!
//! 1. Reads never mutate; a missing path is `None`, not an error.
//! 2. Writes create missing intermediate nodes lazily and never remove any.
//! 3. The last segment of a write is overwritten unconditionally, even when it
//!    held a subtree.
//! 4. Writing through an existing value fails with
//!    [`TreeError::BlockedByValue`]; the value is kept.
//! 5. Concurrent writers creating the same missing node converge on one node.
//! 6. A multi-level write is not atomic as a whole: readers may observe the
//!    intermediate nodes before the value lands.

pub mod error;
mod map;
pub mod node;
pub mod path;
pub mod tree;

pub use error::{PathError, Result, TreeError};
pub use node::{Entry, Node};
pub use path::{TreePath, DELIMITER};
pub use tree::{PathTree, ROOT_NAME};
