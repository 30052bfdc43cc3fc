//! Tree nodes and the entries they hold.
//!
//! A [`Node`] maps segment names to [`Entry`] values. An entry is either a
//! terminal text value or a child node owned by exactly one parent entry, so
//! the structure is always a tree.
//!
//! Descent walks one segment at a time. Reads never mutate. Writes create
//! missing intermediate nodes through a single get-or-create critical
//! section, so concurrent writers racing on the same missing segment
//! converge on one shared child.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::map::SegmentMap;

/// What a segment name maps to inside a node.
#[derive(Clone, Debug)]
pub enum Entry {
    /// An intermediate node with children of its own.
    Node(Arc<Node>),
    /// A terminal text payload.
    Value(String),
}

impl Entry {
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The stored text, if this entry is a value.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// The child node, if this entry is a node.
    pub fn as_node(&self) -> Option<&Arc<Node>> {
        match self {
            Self::Node(node) => Some(node),
            Self::Value(_) => None,
        }
    }
}

/// One addressable level of the hierarchy.
pub struct Node {
    name: String,
    children: SegmentMap,
}

impl Node {
    /// Create an empty node. `name` is the segment it is stored under and is
    /// only used for diagnostics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: SegmentMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sorted names of the immediate children.
    pub fn children(&self) -> Vec<String> {
        self.children.keys()
    }

    /// Number of immediate children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up the entry addressed by `path`, relative to this node.
    ///
    /// Returns `None` when a segment is missing, when the path tries to pass
    /// through a value as if it had children, or when `path` is empty. The
    /// last segment may resolve to either a value or a node.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<Entry> {
        let (last, parents) = path.split_last()?;
        let mut current: Option<Arc<Node>> = None;

        for segment in parents {
            let node = current.as_deref().unwrap_or(self);
            let segment: &str = segment.as_ref();
            trace!(node = %node.name, segment, "descending");
            match node.children.get(segment)? {
                Entry::Node(child) => current = Some(child),
                Entry::Value(_) => {
                    debug!(node = %node.name, segment, "value blocks descent");
                    return None;
                }
            }
        }

        let node = current.as_deref().unwrap_or(self);
        let last: &str = last.as_ref();
        let found = node.children.get(last);
        trace!(node = %node.name, segment = last, found = found.is_some(), "lookup");
        found
    }

    /// Store `value` at `path`, relative to this node, creating every missing
    /// intermediate node along the way.
    ///
    /// The final segment is overwritten unconditionally, even if it held a
    /// whole subtree. Passing through an existing value is rejected with
    /// [`TreeError::BlockedByValue`] and leaves the value untouched; nodes
    /// created earlier in the same call remain.
    pub fn put<S: AsRef<str>>(&self, value: impl Into<String>, path: &[S]) -> Result<()> {
        let (last, parents) = path.split_last().ok_or(TreeError::EmptyPath)?;
        let mut current: Option<Arc<Node>> = None;

        for segment in parents {
            let node = current.as_deref().unwrap_or(self);
            current = Some(node.child_node(segment.as_ref())?);
        }

        current
            .as_deref()
            .unwrap_or(self)
            .set_value(last.as_ref(), value.into());
        Ok(())
    }

    /// Resolve the child node at `segment`, creating it if absent.
    fn child_node(&self, segment: &str) -> Result<Arc<Node>> {
        let entry = match self.children.get(segment) {
            Some(entry) => entry,
            None => self.children.get_or_insert_with(segment, || {
                debug!(node = %self.name, segment, "creating node");
                Entry::Node(Arc::new(Node::new(segment)))
            }),
        };

        match entry {
            Entry::Node(child) => Ok(child),
            Entry::Value(_) => {
                debug!(node = %self.name, segment, "write blocked by value");
                Err(TreeError::BlockedByValue {
                    segment: segment.to_owned(),
                })
            }
        }
    }

    fn set_value(&self, segment: &str, value: String) {
        debug!(node = %self.name, segment, bytes = value.len(), "storing value");
        if let Some(Entry::Node(replaced)) = self.children.set(segment, Entry::Value(value)) {
            debug!(
                node = %self.name,
                segment,
                children = replaced.len(),
                "value replaced subtree"
            );
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_at(node: &Node, path: &[&str]) -> Option<String> {
        node.get(path).and_then(|e| e.as_value().map(str::to_owned))
    }

    #[test]
    fn put_then_get_single_segment() {
        let node = Node::new("root");
        node.put("hello", &["a"]).unwrap();
        assert_eq!(value_at(&node, &["a"]).as_deref(), Some("hello"));
    }

    #[test]
    fn put_creates_intermediate_nodes() {
        let node = Node::new("root");
        node.put("deep", &["a", "b", "c"]).unwrap();

        let a = node.get(&["a"]).unwrap();
        assert!(a.is_node());
        let b = node.get(&["a", "b"]).unwrap();
        assert_eq!(b.as_node().unwrap().children(), vec!["c"]);
        assert_eq!(value_at(&node, &["a", "b", "c"]).as_deref(), Some("deep"));
    }

    #[test]
    fn overwrite_wins() {
        let node = Node::new("root");
        node.put("v1", &["k"]).unwrap();
        node.put("v2", &["k"]).unwrap();
        assert_eq!(value_at(&node, &["k"]).as_deref(), Some("v2"));
    }

    #[test]
    fn siblings_share_parent() {
        let node = Node::new("root");
        node.put("V", &["a", "b"]).unwrap();
        node.put("W", &["a", "c"]).unwrap();

        assert_eq!(value_at(&node, &["a", "b"]).as_deref(), Some("V"));
        assert_eq!(value_at(&node, &["a", "c"]).as_deref(), Some("W"));
        let parent = node.get(&["a"]).unwrap();
        assert_eq!(parent.as_node().unwrap().children(), vec!["b", "c"]);
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn prefix_is_a_node_not_a_value() {
        let node = Node::new("root");
        node.put("V", &["a", "b"]).unwrap();
        let entry = node.get(&["a"]).unwrap();
        assert!(entry.is_node());
        assert!(entry.as_value().is_none());
    }

    #[test]
    fn get_through_value_is_not_found() {
        let node = Node::new("root");
        node.put("V", &["a"]).unwrap();
        assert!(node.get(&["a", "b"]).is_none());
    }

    #[test]
    fn missing_path_is_not_found() {
        let node = Node::new("root");
        assert!(node.get(&["x", "y"]).is_none());
        assert!(node.get(&["x"]).is_none());
    }

    #[test]
    fn get_with_no_segments_is_not_found() {
        let node = Node::new("root");
        node.put("V", &["a"]).unwrap();
        let empty: [&str; 0] = [];
        assert!(node.get(&empty).is_none());
    }

    #[test]
    fn put_with_no_segments_is_rejected() {
        let node = Node::new("root");
        let empty: [&str; 0] = [];
        assert_eq!(node.put("V", &empty), Err(TreeError::EmptyPath));
        assert!(node.is_empty());
    }

    #[test]
    fn put_through_value_is_rejected_and_keeps_value() {
        let node = Node::new("root");
        node.put("leaf", &["a"]).unwrap();

        let err = node.put("V", &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            TreeError::BlockedByValue {
                segment: "a".into()
            }
        );
        assert_eq!(value_at(&node, &["a"]).as_deref(), Some("leaf"));
    }

    #[test]
    fn blocked_write_deep_in_path_names_blocking_segment() {
        let node = Node::new("root");
        node.put("leaf", &["a", "b"]).unwrap();
        let err = node.put("V", &["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(
            err,
            TreeError::BlockedByValue {
                segment: "b".into()
            }
        );
    }

    #[test]
    fn value_overwrites_subtree() {
        let node = Node::new("root");
        node.put("V", &["a", "b"]).unwrap();
        node.put("flat", &["a"]).unwrap();

        assert_eq!(value_at(&node, &["a"]).as_deref(), Some("flat"));
        assert!(node.get(&["a", "b"]).is_none());
    }

    #[test]
    fn existing_node_is_reused() {
        let node = Node::new("root");
        node.put("V", &["a", "b"]).unwrap();
        let before = node.get(&["a"]).unwrap().as_node().unwrap().clone();
        node.put("W", &["a", "c"]).unwrap();
        let after = node.get(&["a"]).unwrap().as_node().unwrap().clone();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn created_nodes_carry_segment_names() {
        let node = Node::new("root");
        node.put("V", &["outer", "inner", "leaf"]).unwrap();
        let inner = node.get(&["outer", "inner"]).unwrap();
        assert_eq!(inner.as_node().unwrap().name(), "inner");
    }

    #[test]
    fn accepts_owned_segments() {
        let node = Node::new("root");
        let path = vec!["a".to_string(), "b".to_string()];
        node.put(String::from("V"), &path).unwrap();
        assert_eq!(value_at(&node, &["a", "b"]).as_deref(), Some("V"));
    }

    #[test]
    fn entry_accessors() {
        let value = Entry::Value("x".into());
        assert!(value.is_value());
        assert!(!value.is_node());
        assert!(value.as_node().is_none());

        let node = Entry::Node(Arc::new(Node::new("n")));
        assert!(node.is_node());
        assert_eq!(node.as_node().unwrap().name(), "n");
    }

    #[test]
    fn debug_shows_name_and_child_count() {
        let node = Node::new("root");
        node.put("V", &["a"]).unwrap();
        let debug = format!("{node:?}");
        assert!(debug.contains("root"));
        assert!(debug.contains("children: 1"));
    }
}
