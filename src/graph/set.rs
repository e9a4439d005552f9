//! Identity-keyed element sets.
//!
//! [`ElementSet`] is the collection type underlying every graph in this crate.
//! Membership is keyed on element [`Address`], never on structure or content,
//! and iteration follows insertion order so query results, rendering, and test
//! assertions are deterministic.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::graph::{Address, Arena, AttrValue, Edge, Element, Node};

/// A set of graph element handles, keyed by address.
///
/// Offers the usual set operations plus arena-assisted filters over names,
/// tags, and attributes. `one()` replaces the "first element or null" access
/// pattern with an `Option`.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, NodeSet};
///
/// let mut arena = Arena::new();
/// let a = arena.node_named("a");
/// let b = arena.node_named("b");
///
/// let mut set = NodeSet::new();
/// set.add(a);
/// set.add(b);
/// set.add(a);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.one(), Some(a));
/// assert_eq!(set.named(&arena, "b").one(), Some(b));
/// ```
#[derive(Debug, Clone)]
pub struct ElementSet<E: Element> {
    members: IndexMap<Address, E, FxBuildHasher>,
}

/// A set of node handles.
pub type NodeSet = ElementSet<Node>;

/// A set of edge handles.
pub type EdgeSet = ElementSet<Edge>;

impl<E: Element> ElementSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        ElementSet {
            members: IndexMap::default(),
        }
    }

    /// Creates an empty set with room for `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ElementSet {
            members: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds an element. Returns `true` if it was not already a member.
    pub fn add(&mut self, element: E) -> bool {
        self.members.insert(element.address(), element).is_none()
    }

    /// Removes an element. Returns `true` if it was a member.
    ///
    /// Removal preserves the insertion order of the remaining members.
    pub fn remove(&mut self, element: E) -> bool {
        self.members.shift_remove(&element.address()).is_some()
    }

    /// Returns `true` if the element is a member.
    #[must_use]
    pub fn contains(&self, element: E) -> bool {
        self.members.contains_key(&element.address())
    }

    /// Returns `true` if a member has the given address.
    #[must_use]
    pub fn contains_address(&self, address: Address) -> bool {
        self.members.contains_key(&address)
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns an arbitrary member (the first inserted), or `None` when empty.
    #[must_use]
    pub fn one(&self) -> Option<E> {
        self.members.values().next().copied()
    }

    /// Iterates over the members in insertion order, yielding copies.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        self.members.values().copied()
    }

    /// Keeps only the members also present in `other`.
    pub fn retain_all(&mut self, other: &Self) {
        self.members
            .retain(|address, _| other.members.contains_key(address));
    }

    /// Removes every member present in `other`.
    pub fn remove_all(&mut self, other: &Self) {
        self.members
            .retain(|address, _| !other.members.contains_key(address));
    }

    /// Returns the members carrying at least one of the given tags.
    #[must_use]
    pub fn tagged_with_any(&self, arena: &Arena, tags: &[&str]) -> Self {
        self.iter()
            .filter(|&element| tags.iter().any(|tag| arena.has_tag(element, tag)))
            .collect()
    }

    /// Returns the members carrying every one of the given tags.
    #[must_use]
    pub fn tagged_with_all(&self, arena: &Arena, tags: &[&str]) -> Self {
        self.iter()
            .filter(|&element| tags.iter().all(|tag| arena.has_tag(element, tag)))
            .collect()
    }

    /// Returns the members that have an attribute under the given key.
    #[must_use]
    pub fn with_attr(&self, arena: &Arena, key: &str) -> Self {
        self.iter()
            .filter(|&element| arena.has_attr(element, key))
            .collect()
    }

    /// Returns the members whose attribute under `key` equals `value`.
    #[must_use]
    pub fn with_attr_value(&self, arena: &Arena, key: &str, value: &AttrValue) -> Self {
        self.iter()
            .filter(|&element| arena.get_attr(element, key) == Some(value))
            .collect()
    }

    /// Returns the members whose display name equals `name`.
    #[must_use]
    pub fn named(&self, arena: &Arena, name: &str) -> Self {
        self.iter()
            .filter(|&element| arena.name(element) == Some(name))
            .collect()
    }
}

impl<E: Element> Default for ElementSet<E> {
    fn default() -> Self {
        ElementSet::new()
    }
}

impl<E: Element> PartialEq for ElementSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .members
                .keys()
                .all(|address| other.members.contains_key(address))
    }
}

impl<E: Element> Eq for ElementSet<E> {}

impl<E: Element> Extend<E> for ElementSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E: Element> FromIterator<E> for ElementSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = ElementSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, E: Element> IntoIterator for &'a ElementSet<E> {
    type Item = E;
    type IntoIter = std::iter::Copied<indexmap::map::Values<'a, Address, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.values().copied()
    }
}
