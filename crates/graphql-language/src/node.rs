//! The reference-counted node wrapper shared by every AST type.

use crate::lexer::TokenId;
use crate::source::Source;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::hash;
use std::sync::Arc as StdArc;
use triomphe::Arc;

/// Smart pointer to an AST node.
///
/// Thread-safe and reference-counted, so subtrees can be shared between
/// documents (and between an original tree and its visitor-edited copy)
/// without cloning. Carries the node's optional source [`Location`];
/// equality and hashing ignore it.
pub struct Node<T>(Arc<NodeInner<T>>);

struct NodeInner<T> {
    loc: Option<Location>,
    node: T,
}

/// The source span of a parsed node.
///
/// `start_token` and `end_token` identify the first and last lexical tokens
/// of the node within the token stream the document was parsed from.
#[derive(Clone)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub start_token: TokenId,
    pub end_token: TokenId,
    pub source: StdArc<Source>,
}

impl<T> Node<T> {
    /// A node created programmatically, not parsed from a source.
    pub fn new(node: T) -> Self {
        Self(Arc::new(NodeInner { loc: None, node }))
    }

    /// A node parsed from the given span.
    pub fn with_loc(node: T, loc: Location) -> Self {
        Self(Arc::new(NodeInner {
            loc: Some(loc),
            node,
        }))
    }

    pub fn loc(&self) -> Option<&Location> {
        self.0.loc.as_ref()
    }

    /// Wrap `node` with this node's location (used when an edit replaces a
    /// node's contents but the span is still meaningful).
    pub fn same_location<U>(&self, node: U) -> Node<U> {
        Node(Arc::new(NodeInner {
            loc: self.0.loc.clone(),
            node,
        }))
    }

    /// Whether two handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> std::ops::Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0.node
    }
}

impl<T> AsRef<T> for Node<T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.node == other.0.node // location not included
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: hash::Hash> hash::Hash for Node<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.node.hash(state) // location not included
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = self.loc() {
            write!(f, "@{loc:?} ")?;
        }
        self.0.node.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.node.fmt(f)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("start", &self.start)?;
        map.serialize_entry("end", &self.end)?;
        map.end()
    }
}
