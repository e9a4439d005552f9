//! Graph element handles.
//!
//! Every element of a graph — node or edge — is identified by an [`Address`]:
//! an integer assigned monotonically by an [`crate::graph::Arena`] at creation
//! time and never reused. Equality and hashing of element handles go through
//! the address alone; two handles compare equal if and only if they denote the
//! same element, regardless of names, tags, or attributes.
//!
//! Handles are small `Copy` values. All per-element data lives in the arena;
//! the only structural fact a handle carries is an edge's endpoints, which are
//! fixed at creation and therefore safe to read without arena access.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A unique identifier for a graph element within an [`crate::graph::Arena`].
///
/// Addresses are assigned monotonically starting at zero and are never reused
/// or derived from element content. They serve as stable identity for nodes
/// and edges across every set and graph in the same arena.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Element};
///
/// let mut arena = Arena::new();
/// let first = arena.node();
/// let second = arena.node();
///
/// assert_ne!(first.address(), second.address());
/// assert_eq!(format!("{}", first.address()), "@0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub(crate) usize);

impl Address {
    /// Creates an address from a raw index.
    pub(crate) const fn new(index: usize) -> Self {
        Address(index)
    }

    /// Returns the underlying index of this address.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Common behavior of all graph element handles.
///
/// Implemented by [`Node`], [`Edge`], and [`GraphElement`]. The trait exists so
/// that identity-keyed collections like [`crate::graph::ElementSet`] and the
/// tagging and attribute operations on [`crate::graph::Arena`] can work over
/// any element kind uniformly.
pub trait Element: Copy + Eq + Hash {
    /// Returns the address identifying this element.
    fn address(self) -> Address;
}

/// A node handle.
///
/// Nodes carry no structure of their own; names, tags, and attributes are
/// stored in the [`crate::graph::Arena`] that created the node.
///
/// # Examples
///
/// ```rust
/// use propgraph::Arena;
///
/// let mut arena = Arena::new();
/// let n = arena.node_named("entry");
/// assert_eq!(arena.name(n), Some("entry"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(pub(crate) Address);

impl Node {
    /// Returns the address identifying this node.
    #[must_use]
    pub const fn address(self) -> Address {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0 .0)
    }
}

impl Element for Node {
    fn address(self) -> Address {
        self.0
    }
}

/// A directed edge handle.
///
/// An edge's endpoints are fixed when the edge is created by the arena and can
/// be read directly from the handle. Identity — and therefore equality and
/// hashing — is by address only: two distinct edges between the same pair of
/// nodes are different elements.
///
/// # Examples
///
/// ```rust
/// use propgraph::Arena;
///
/// let mut arena = Arena::new();
/// let a = arena.node();
/// let b = arena.node();
///
/// let first = arena.edge(a, b);
/// let second = arena.edge(a, b);
///
/// assert_eq!(first.from(), second.from());
/// assert_eq!(first.to(), second.to());
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub(crate) address: Address,
    pub(crate) from: Node,
    pub(crate) to: Node,
}

impl Edge {
    /// Returns the address identifying this edge.
    #[must_use]
    pub const fn address(self) -> Address {
        self.address
    }

    /// Returns the source node of this edge.
    #[must_use]
    pub const fn from(self) -> Node {
        self.from
    }

    /// Returns the target node of this edge.
    #[must_use]
    pub const fn to(self) -> Node {
        self.to
    }

    /// Returns `true` if this edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(self) -> bool {
        self.from == self.to
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{} ({} -> {})", self.address.0, self.from, self.to)
    }
}

impl Element for Edge {
    fn address(self) -> Address {
        self.address
    }
}

/// A handle over either element kind, for heterogeneous handling.
///
/// Used where nodes and edges flow through the same channel, for example
/// [`crate::graph::GraphOps::add`] and [`crate::graph::Arena::element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphElement {
    /// A node element.
    Node(Node),
    /// An edge element.
    Edge(Edge),
}

impl GraphElement {
    /// Returns the node handle if this element is a node.
    #[must_use]
    pub fn as_node(self) -> Option<Node> {
        match self {
            GraphElement::Node(node) => Some(node),
            GraphElement::Edge(_) => None,
        }
    }

    /// Returns the edge handle if this element is an edge.
    #[must_use]
    pub fn as_edge(self) -> Option<Edge> {
        match self {
            GraphElement::Node(_) => None,
            GraphElement::Edge(edge) => Some(edge),
        }
    }
}

impl Element for GraphElement {
    fn address(self) -> Address {
        match self {
            GraphElement::Node(node) => node.address(),
            GraphElement::Edge(edge) => edge.address(),
        }
    }
}

impl From<Node> for GraphElement {
    fn from(node: Node) -> Self {
        GraphElement::Node(node)
    }
}

impl From<Edge> for GraphElement {
    fn from(edge: Edge) -> Self {
        GraphElement::Edge(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Arena;

    #[test]
    fn address_index_roundtrip() {
        let address = Address::new(42);
        assert_eq!(address.index(), 42);
        assert_eq!(format!("{}", address), "@42");
        assert_eq!(format!("{:?}", address), "Address(42)");
    }

    #[test]
    fn address_ordering() {
        assert!(Address::new(1) < Address::new(2));
        assert_eq!(Address::new(5), Address::new(5));
    }

    #[test]
    fn node_identity_is_address() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        assert_ne!(a, b);
        assert_eq!(a, a);
        assert_eq!(format!("{}", a), "n0");
    }

    #[test]
    fn edge_identity_ignores_endpoints() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e1 = arena.edge(a, b);
        let e2 = arena.edge(a, b);
        // Parallel edges are distinct elements.
        assert_ne!(e1, e2);
        assert_eq!(e1.from(), a);
        assert_eq!(e1.to(), b);
    }

    #[test]
    fn edge_self_loop() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        assert!(arena.edge(a, a).is_self_loop());
        assert!(!arena.edge(a, b).is_self_loop());
    }

    #[test]
    fn graph_element_dispatch() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e = arena.edge(a, b);

        let ne: GraphElement = a.into();
        let ee: GraphElement = e.into();

        assert_eq!(ne.address(), a.address());
        assert_eq!(ee.address(), e.address());
        assert_eq!(ne.as_node(), Some(a));
        assert_eq!(ne.as_edge(), None);
        assert_eq!(ee.as_edge(), Some(e));
        assert_eq!(ee.as_node(), None);
    }

    #[test]
    fn edge_display_shows_endpoints() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e = arena.edge(a, b);
        assert_eq!(format!("{}", e), "e2 (n0 -> n1)");
    }
}
