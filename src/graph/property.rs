//! Property graphs with schema-driven tag inheritance.

use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::graph::{
    Arena, EdgeSet, Element, ElementSet, Graph, GraphOps, NodeSet, SchemaGraph,
};

/// A graph coupled with a tag-inheritance schema.
///
/// `PropertyGraph` is the only graph flavor with a tag-query surface. Queries
/// honor inheritance: asking for tag `T` matches elements carrying any
/// schema-descendant of `T`. All set-algebraic operators preserve the schema,
/// so derived graphs answer tag queries the same way their sources do.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use propgraph::{Arena, GraphOps, PropertyGraph, SchemaGraph};
///
/// let mut arena = Arena::new();
/// let mut schema = SchemaGraph::new(&mut arena);
/// schema.tag_edge(&mut arena, "callable", "function");
///
/// let mut graph = PropertyGraph::with_schema(Rc::new(schema));
/// let f = arena.node_named("main");
/// arena.tag(f, "function");
/// graph.add_node(f);
///
/// // "function" inherits from "callable", so the query matches.
/// let callables = graph.nodes_tagged_with_any(&arena, &["callable"]);
/// assert_eq!(callables.one(), Some(f));
/// ```
#[derive(Debug, Clone)]
pub struct PropertyGraph {
    graph: Graph,
    schema: Rc<SchemaGraph>,
}

impl PropertyGraph {
    /// Creates an empty property graph with a fresh, empty schema.
    pub fn new(arena: &mut Arena) -> Self {
        PropertyGraph {
            graph: Graph::new(),
            schema: Rc::new(SchemaGraph::new(arena)),
        }
    }

    /// Creates an empty property graph over an existing schema.
    #[must_use]
    pub fn with_schema(schema: Rc<SchemaGraph>) -> Self {
        PropertyGraph {
            graph: Graph::new(),
            schema,
        }
    }

    /// The schema consulted by tag queries.
    #[must_use]
    pub fn schema(&self) -> &SchemaGraph {
        &self.schema
    }

    /// Expands each query tag to the set of tags it matches under inheritance.
    fn expand_tags(&self, arena: &Arena, tags: &[&str]) -> Vec<FxHashSet<String>> {
        tags.iter()
            .map(|tag| self.schema.descendant_tags(arena, tag))
            .collect()
    }

    fn tagged_with_any<E: Element>(
        &self,
        arena: &Arena,
        members: &ElementSet<E>,
        tags: &[&str],
    ) -> ElementSet<E> {
        let expanded = self.expand_tags(arena, tags);
        members
            .iter()
            .filter(|&element| {
                arena
                    .tags(element)
                    .any(|tag| expanded.iter().any(|family| family.contains(tag)))
            })
            .collect()
    }

    fn tagged_with_all<E: Element>(
        &self,
        arena: &Arena,
        members: &ElementSet<E>,
        tags: &[&str],
    ) -> ElementSet<E> {
        let expanded = self.expand_tags(arena, tags);
        members
            .iter()
            .filter(|&element| {
                expanded.iter().all(|family| {
                    arena.tags(element).any(|tag| family.contains(tag))
                })
            })
            .collect()
    }

    /// The nodes carrying at least one of the given tags or their sub-tags.
    #[must_use]
    pub fn nodes_tagged_with_any(&self, arena: &Arena, tags: &[&str]) -> NodeSet {
        self.tagged_with_any(arena, self.graph.nodes(), tags)
    }

    /// The nodes carrying, for every given tag, that tag or one of its
    /// sub-tags.
    #[must_use]
    pub fn nodes_tagged_with_all(&self, arena: &Arena, tags: &[&str]) -> NodeSet {
        self.tagged_with_all(arena, self.graph.nodes(), tags)
    }

    /// The edges carrying at least one of the given tags or their sub-tags.
    #[must_use]
    pub fn edges_tagged_with_any(&self, arena: &Arena, tags: &[&str]) -> EdgeSet {
        self.tagged_with_any(arena, self.graph.edges(), tags)
    }

    /// The edges carrying, for every given tag, that tag or one of its
    /// sub-tags.
    #[must_use]
    pub fn edges_tagged_with_all(&self, arena: &Arena, tags: &[&str]) -> EdgeSet {
        self.tagged_with_all(arena, self.graph.edges(), tags)
    }
}

impl GraphOps for PropertyGraph {
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
        PropertyGraph {
            graph: Graph::new(),
            schema: Rc::clone(&self.schema),
        }
    }
}
