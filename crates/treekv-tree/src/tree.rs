//! The process-wide tree rooted at a single [`Node`].

use std::sync::Arc;

use crate::error::{Result, TreeError};
use crate::node::{Entry, Node};
use crate::path::TreePath;

/// Name given to the root node in diagnostics.
pub const ROOT_NAME: &str = "root";

/// A path-addressed tree of text values.
///
/// Construct one at startup and share it through an `Arc`; all operations
/// take `&self`.
#[derive(Debug)]
pub struct PathTree {
    root: Arc<Node>,
}

impl PathTree {
    pub fn new() -> Self {
        Self {
            root: Arc::new(Node::new(ROOT_NAME)),
        }
    }

    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    /// Read the entry at `path`. The root path yields the root node itself.
    pub fn get(&self, path: &TreePath) -> Option<Entry> {
        if path.is_root() {
            return Some(Entry::Node(Arc::clone(&self.root)));
        }
        self.root.get(path.segments())
    }

    /// Write `value` at `path`. Writing to the root path is rejected.
    pub fn put(&self, path: &TreePath, value: impl Into<String>) -> Result<()> {
        if path.is_root() {
            return Err(TreeError::EmptyPath);
        }
        self.root.put(value, path.segments())
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}
