//! Tag-hierarchy schema graphs.
//!
//! A [`SchemaGraph`] records the inheritance relation between tags as a forest
//! of trees. Each schema node stands for one tag name; a schema edge
//! `parent -> child` states that `child` is a sub-tag of `parent`. Tree roots
//! attach under a distinguished *Contains* node seeded at construction, so the
//! whole forest is reachable by one forward traversal.
//!
//! [`crate::graph::PropertyGraph`] consults the schema when answering tag
//! queries: asking for tag `T` matches elements tagged with any descendant of
//! `T` (see [`SchemaGraph::descendant_tags`]).

use rustc_hash::FxHashSet;

use crate::graph::{Arena, EdgeSet, Graph, GraphOps, Node, NodeSet};
use crate::{Error, Result};

/// Tag marking the distinguished root node of every schema graph.
pub const CONTAINS_TAG: &str = "schema-contains";

/// A tag-inheritance forest over a distinguished Contains root.
///
/// Well-formedness requires a forest shape: no schema node may have more than
/// one incoming edge and no edge may be a self-loop. [`SchemaGraph::validate`]
/// checks this and reports the offending tag.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, SchemaGraph};
///
/// let mut arena = Arena::new();
/// let mut schema = SchemaGraph::new(&mut arena);
///
/// schema.tag_edge(&mut arena, "callable", "function");
/// schema.tag_edge(&mut arena, "function", "constructor");
///
/// let tags = schema.descendant_tags(&arena, "callable");
/// assert!(tags.contains("constructor"));
/// assert!(schema.is_well_formed());
/// ```
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    graph: Graph,
    contains: Node,
}

impl SchemaGraph {
    /// Creates a schema holding only the Contains root.
    pub fn new(arena: &mut Arena) -> Self {
        let contains = arena.node_named("Contains");
        arena.tag(contains, CONTAINS_TAG);
        let mut graph = Graph::new();
        graph.add_node(contains);
        SchemaGraph { graph, contains }
    }

    /// The distinguished root node of this schema.
    #[must_use]
    pub fn contains_node(&self) -> Node {
        self.contains
    }

    /// Looks up the schema node for a tag name.
    ///
    /// The Contains root itself is found under its name, so querying the
    /// containment tag expands to the entire forest.
    #[must_use]
    pub fn node_for(&self, arena: &Arena, tag: &str) -> Option<Node> {
        self.graph
            .nodes()
            .iter()
            .find(|&node| arena.name(node) == Some(tag))
    }

    /// Returns the schema node for a tag, creating it under Contains if absent.
    pub fn tag_node(&mut self, arena: &mut Arena, tag: &str) -> Node {
        if let Some(node) = self.node_for(arena, tag) {
            return node;
        }
        let node = arena.node_named(tag);
        let attachment = arena.edge(self.contains, node);
        self.graph.add_edge(attachment);
        node
    }

    /// Declares `child` a sub-tag of `parent`, creating either as needed.
    ///
    /// If `child` was previously a forest root attached directly under
    /// Contains, that attachment is replaced by the new parent edge so the
    /// forest shape is preserved.
    pub fn tag_edge(&mut self, arena: &mut Arena, parent: &str, child: &str) {
        let parent_node = self.tag_node(arena, parent);
        let child_node = self.tag_node(arena, child);
        if parent_node == child_node {
            return;
        }
        let detach: Vec<_> = self
            .graph
            .edges()
            .iter()
            .filter(|edge| edge.from() == self.contains && edge.to() == child_node)
            .collect();
        for edge in detach {
            self.graph.remove_edge(edge);
        }
        let already_linked = self
            .graph
            .edges()
            .iter()
            .any(|edge| edge.from() == parent_node && edge.to() == child_node);
        if !already_linked {
            let link = arena.edge(parent_node, child_node);
            self.graph.add_edge(link);
        }
    }

    /// Returns `true` if the schema is a forest: no node with more than one
    /// incoming edge, and no self-loops.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.offending_node().is_none()
    }

    /// Checks well-formedness, naming the offending tag on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSchema`] if a schema node has multiple
    /// parents or a schema edge is a self-loop.
    pub fn validate(&self, arena: &Arena) -> Result<()> {
        match self.offending_node() {
            None => Ok(()),
            Some(node) => {
                let tag = arena.name(node).unwrap_or("<unnamed>").to_string();
                let parents = self.graph.in_edges(node).len();
                if parents > 1 {
                    Err(Error::MalformedSchema(format!(
                        "tag '{tag}' has {parents} parents"
                    )))
                } else {
                    Err(Error::MalformedSchema(format!(
                        "tag '{tag}' inherits from itself"
                    )))
                }
            }
        }
    }

    fn offending_node(&self) -> Option<Node> {
        if let Some(edge) = self.graph.edges().iter().find(|edge| edge.is_self_loop()) {
            return Some(edge.from());
        }
        self.graph
            .nodes()
            .iter()
            .find(|&node| self.graph.in_edges(node).len() > 1)
    }

    /// The given tag plus every transitive sub-tag declared in this schema.
    ///
    /// A tag unknown to the schema expands to just itself.
    #[must_use]
    pub fn descendant_tags(&self, arena: &Arena, tag: &str) -> FxHashSet<String> {
        let mut tags = FxHashSet::default();
        tags.insert(tag.to_string());
        if let Some(node) = self.node_for(arena, tag) {
            let origin: NodeSet = [node].into_iter().collect();
            for descendant in self.graph.forward(&origin).nodes().iter() {
                if let Some(name) = arena.name(descendant) {
                    tags.insert(name.to_string());
                }
            }
        }
        tags
    }
}

impl GraphOps for SchemaGraph {
    fn nodes(&self) -> &NodeSet {
        self.graph.nodes()
    }

    fn edges(&self) -> &EdgeSet {
        self.graph.edges()
    }

    fn nodes_mut(&mut self) -> &mut NodeSet {
        self.graph.nodes_mut()
    }

    fn edges_mut(&mut self) -> &mut EdgeSet {
        self.graph.edges_mut()
    }

    fn empty(&self) -> Self {
        // A schema is never without its root, so operator results built from
        // the empty graph keep the Contains node.
        let mut graph = Graph::new();
        graph.add_node(self.contains);
        SchemaGraph {
            graph,
            contains: self.contains,
        }
    }
}
