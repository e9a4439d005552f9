//! Element storage and creation.
//!
//! The [`Arena`] is the single owner of all per-element data: optional display
//! names, tag sets, and attribute maps. Handles returned by the creation
//! methods ([`Arena::node`], [`Arena::edge`]) are plain indices into the
//! arena; all mutation of element data goes through the arena, so handles can
//! be copied freely into any number of sets and graphs without ownership
//! concerns.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{Address, Edge, Element, GraphElement, Node};

/// An attribute value attached to a graph element.
///
/// Attributes form a string-keyed map per element. The value space is a small
/// closed set of primitives; conversions from the corresponding Rust types are
/// provided so call sites can pass literals directly.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, AttrValue};
///
/// let mut arena = Arena::new();
/// let n = arena.node();
/// arena.put_attr(n, "line", 42_i64);
/// arena.put_attr(n, "label", "loop header");
///
/// assert_eq!(arena.get_attr(n, "line"), Some(&AttrValue::Int(42)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A string value.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// Distinguishes the element kinds inside the arena.
#[derive(Debug, Clone)]
enum ElementKind {
    Node,
    Edge { from: Node, to: Node },
}

/// Per-element data owned by the arena.
#[derive(Debug, Clone)]
struct ElementData {
    kind: ElementKind,
    name: Option<String>,
    tags: FxHashSet<String>,
    attrs: FxHashMap<String, AttrValue>,
}

impl ElementData {
    fn new(kind: ElementKind, name: Option<String>) -> Self {
        ElementData {
            kind,
            name,
            tags: FxHashSet::default(),
            attrs: FxHashMap::default(),
        }
    }
}

/// Creates graph elements and owns their data.
///
/// Addresses are assigned monotonically in creation order and never reused.
/// Every handle in a program is backed by exactly one arena; mixing handles
/// across arenas is a logic error (see the panic notes on the accessors).
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Graph, GraphOps};
///
/// let mut arena = Arena::new();
/// let a = arena.node_named("a");
/// let b = arena.node_named("b");
/// let ab = arena.edge(a, b);
/// arena.tag(ab, "calls");
///
/// let mut graph = Graph::new();
/// graph.add_edge(ab);
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert!(arena.has_tag(ab, "calls"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Arena {
    elements: Vec<ElementData>,
}

impl Arena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Arena::default()
    }

    /// Returns the number of elements created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Creates a new, unnamed node.
    pub fn node(&mut self) -> Node {
        let address = Address::new(self.elements.len());
        self.elements.push(ElementData::new(ElementKind::Node, None));
        Node(address)
    }

    /// Creates a new node with a display name.
    pub fn node_named(&mut self, name: impl Into<String>) -> Node {
        let node = self.node();
        self.elements[node.address().index()].name = Some(name.into());
        node
    }

    /// Creates a new directed edge between two nodes of this arena.
    ///
    /// The endpoints are fixed for the lifetime of the edge. Creating an edge
    /// does not place it in any graph; see [`crate::graph::GraphOps::add_edge`].
    pub fn edge(&mut self, from: Node, to: Node) -> Edge {
        let address = Address::new(self.elements.len());
        self.elements
            .push(ElementData::new(ElementKind::Edge { from, to }, None));
        Edge { address, from, to }
    }

    /// Resolves a raw address back to an element handle.
    ///
    /// Returns `None` if no element with this address has been created.
    #[must_use]
    pub fn element(&self, address: Address) -> Option<GraphElement> {
        let data = self.elements.get(address.index())?;
        Some(match data.kind {
            ElementKind::Node => GraphElement::Node(Node(address)),
            ElementKind::Edge { from, to } => GraphElement::Edge(Edge { address, from, to }),
        })
    }

    fn data<E: Element>(&self, element: E) -> &ElementData {
        &self.elements[element.address().index()]
    }

    fn data_mut<E: Element>(&mut self, element: E) -> &mut ElementData {
        &mut self.elements[element.address().index()]
    }

    /// Returns the display name of an element, if it has one.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    #[must_use]
    pub fn name<E: Element>(&self, element: E) -> Option<&str> {
        self.data(element).name.as_deref()
    }

    /// Sets or replaces the display name of an element.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn set_name<E: Element>(&mut self, element: E, name: impl Into<String>) {
        self.data_mut(element).name = Some(name.into());
    }

    /// Returns `true` if the element has a display name.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    #[must_use]
    pub fn has_name<E: Element>(&self, element: E) -> bool {
        self.data(element).name.is_some()
    }

    /// Adds a tag to an element. Adding a tag twice has no further effect.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn tag<E: Element>(&mut self, element: E, tag: impl Into<String>) {
        self.data_mut(element).tags.insert(tag.into());
    }

    /// Removes a tag from an element. Returns `true` if the tag was present.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn untag<E: Element>(&mut self, element: E, tag: &str) -> bool {
        self.data_mut(element).tags.remove(tag)
    }

    /// Returns `true` if the element carries the given tag.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    #[must_use]
    pub fn has_tag<E: Element>(&self, element: E, tag: &str) -> bool {
        self.data(element).tags.contains(tag)
    }

    /// Iterates over the tags of an element, in no particular order.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn tags<E: Element>(&self, element: E) -> impl Iterator<Item = &str> {
        self.data(element).tags.iter().map(String::as_str)
    }

    /// Sets an attribute on an element, returning the previous value if any.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn put_attr<E: Element>(
        &mut self,
        element: E,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.data_mut(element).attrs.insert(key.into(), value.into())
    }

    /// Returns the attribute value stored under a key, if any.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    #[must_use]
    pub fn get_attr<E: Element>(&self, element: E, key: &str) -> Option<&AttrValue> {
        self.data(element).attrs.get(key)
    }

    /// Returns `true` if the element has an attribute under the given key.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    #[must_use]
    pub fn has_attr<E: Element>(&self, element: E, key: &str) -> bool {
        self.data(element).attrs.contains_key(key)
    }

    /// Removes an attribute from an element, returning its value if present.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn remove_attr<E: Element>(&mut self, element: E, key: &str) -> Option<AttrValue> {
        self.data_mut(element).attrs.remove(key)
    }

    /// Iterates over the attributes of an element, in no particular order.
    ///
    /// # Panics
    ///
    /// Panics if the element was not created by this arena.
    pub fn attrs<E: Element>(&self, element: E) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.data(element)
            .attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_monotonic() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e = arena.edge(a, b);
        assert_eq!(a.address().index(), 0);
        assert_eq!(b.address().index(), 1);
        assert_eq!(e.address().index(), 2);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn element_resolves_by_kind() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e = arena.edge(a, b);

        assert_eq!(arena.element(a.address()), Some(GraphElement::Node(a)));
        assert_eq!(arena.element(e.address()), Some(GraphElement::Edge(e)));
        assert_eq!(arena.element(Address::new(99)), None);
    }

    #[test]
    fn names() {
        let mut arena = Arena::new();
        let anon = arena.node();
        let named = arena.node_named("entry");

        assert!(!arena.has_name(anon));
        assert_eq!(arena.name(anon), None);
        assert_eq!(arena.name(named), Some("entry"));

        arena.set_name(anon, "exit");
        assert_eq!(arena.name(anon), Some("exit"));
    }

    #[test]
    fn tags() {
        let mut arena = Arena::new();
        let n = arena.node();

        arena.tag(n, "function");
        arena.tag(n, "function");
        arena.tag(n, "public");

        assert!(arena.has_tag(n, "function"));
        assert!(!arena.has_tag(n, "private"));
        assert_eq!(arena.tags(n).count(), 2);

        assert!(arena.untag(n, "function"));
        assert!(!arena.untag(n, "function"));
        assert_eq!(arena.tags(n).count(), 1);
    }

    #[test]
    fn attributes() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let e = arena.edge(a, b);

        assert_eq!(arena.put_attr(e, "weight", 1.5), None);
        assert_eq!(
            arena.put_attr(e, "weight", 2.5),
            Some(AttrValue::Float(1.5))
        );
        arena.put_attr(e, "kind", "call");
        arena.put_attr(e, "verified", true);

        assert!(arena.has_attr(e, "weight"));
        assert_eq!(arena.get_attr(e, "kind"), Some(&AttrValue::Str("call".to_string())));
        assert_eq!(arena.attrs(e).count(), 3);

        assert_eq!(
            arena.remove_attr(e, "verified"),
            Some(AttrValue::Bool(true))
        );
        assert!(!arena.has_attr(e, "verified"));
    }

    #[test]
    fn attr_value_conversions() {
        assert_eq!(AttrValue::from("x"), AttrValue::Str("x".to_string()));
        assert_eq!(AttrValue::from(7_i64), AttrValue::Int(7));
        assert_eq!(AttrValue::from(0.5), AttrValue::Float(0.5));
        assert_eq!(AttrValue::from(false), AttrValue::Bool(false));
    }
}
