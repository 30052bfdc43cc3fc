//! Plain-text response bodies.

use treekv_tree::Entry;

pub const LINE_END: &str = "\r\n";

/// First line of a node listing.
pub const LISTING_HEADER: &str = "Begin:";

/// Render a value as its text plus a line terminator, and a node as a
/// listing of its immediate children.
pub fn entry(entry: &Entry) -> String {
    match entry {
        Entry::Value(value) => format!("{value}{LINE_END}"),
        Entry::Node(node) => listing(&node.children()),
    }
}

/// `Begin:` followed by one name per line.
pub fn listing(names: &[String]) -> String {
    let capacity = LISTING_HEADER.len()
        + LINE_END.len()
        + names.iter().map(|n| n.len() + LINE_END.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    out.push_str(LISTING_HEADER);
    out.push_str(LINE_END);
    for name in names {
        out.push_str(name);
        out.push_str(LINE_END);
    }
    out
}
