//! Graphs and the shared set-algebraic operator suite.
//!
//! A graph is a pair of identity-keyed sets — nodes and edges — with one
//! structural invariant: the edge set is always *closed* over the node set,
//! meaning both endpoints of every member edge are member nodes. Insertion
//! maintains closure by pulling endpoints in; node removal maintains it by
//! cascading to incident edges.
//!
//! All operators live on the [`GraphOps`] trait so that every graph flavor
//! ([`Graph`], [`crate::graph::SchemaGraph`], [`crate::graph::PropertyGraph`])
//! shares one implementation and each operator preserves the receiver's kind.

use crate::graph::{Arena, AttrValue, Edge, EdgeSet, GraphElement, Node, NodeSet};

/// The shared operator suite over any graph type.
///
/// Implementors only provide access to their node and edge sets plus an
/// [`empty`](GraphOps::empty) constructor that preserves the concrete kind;
/// everything else — insertion, removal, step and closure traversal, and the
/// set algebra — is defined here once.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Graph, GraphOps, NodeSet};
///
/// let mut arena = Arena::new();
/// let a = arena.node();
/// let b = arena.node();
/// let c = arena.node();
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(a, b));
/// graph.add_edge(arena.edge(b, c));
///
/// let origin: NodeSet = [a].into_iter().collect();
/// let reachable = graph.forward(&origin);
/// assert_eq!(reachable.nodes().len(), 3);
/// ```
pub trait GraphOps: Clone {
    /// The node set of this graph.
    fn nodes(&self) -> &NodeSet;

    /// The edge set of this graph.
    fn edges(&self) -> &EdgeSet;

    /// Mutable access to the node set. Callers must preserve closure.
    fn nodes_mut(&mut self) -> &mut NodeSet;

    /// Mutable access to the edge set. Callers must preserve closure.
    fn edges_mut(&mut self) -> &mut EdgeSet;

    /// An empty graph of the same kind as the receiver.
    ///
    /// Operator results are built from this, so a schema graph's algebra
    /// yields schema graphs and a property graph's algebra yields property
    /// graphs sharing the same schema.
    fn empty(&self) -> Self;

    /// Adds a node. Returns `true` if it was not already present.
    fn add_node(&mut self, node: Node) -> bool {
        self.nodes_mut().add(node)
    }

    /// Adds an edge along with both of its endpoints.
    ///
    /// Inserting the endpoints keeps the edge set closed over the node set.
    /// Returns `true` if the edge was not already present.
    fn add_edge(&mut self, edge: Edge) -> bool {
        self.nodes_mut().add(edge.from());
        self.nodes_mut().add(edge.to());
        self.edges_mut().add(edge)
    }

    /// Adds a node or an edge.
    fn add(&mut self, element: GraphElement) -> bool {
        match element {
            GraphElement::Node(node) => self.add_node(node),
            GraphElement::Edge(edge) => self.add_edge(edge),
        }
    }

    /// Adds every element from an iterator.
    fn add_all<I: IntoIterator<Item = GraphElement>>(&mut self, elements: I) {
        for element in elements {
            self.add(element);
        }
    }

    /// Removes a node and every edge incident to it.
    ///
    /// The cascade keeps the edge set closed over the node set. Returns `true`
    /// if the node was present.
    fn remove_node(&mut self, node: Node) -> bool {
        if !self.nodes_mut().remove(node) {
            return false;
        }
        let incident: Vec<Edge> = self
            .edges()
            .iter()
            .filter(|edge| edge.from() == node || edge.to() == node)
            .collect();
        for edge in incident {
            self.edges_mut().remove(edge);
        }
        true
    }

    /// Removes an edge, leaving its endpoints in place.
    fn remove_edge(&mut self, edge: Edge) -> bool {
        self.edges_mut().remove(edge)
    }

    /// Removes a node or an edge.
    fn remove(&mut self, element: GraphElement) -> bool {
        match element {
            GraphElement::Node(node) => self.remove_node(node),
            GraphElement::Edge(edge) => self.remove_edge(edge),
        }
    }

    /// The edges of this graph whose target is `node`.
    fn in_edges(&self, node: Node) -> EdgeSet {
        self.edges().iter().filter(|edge| edge.to() == node).collect()
    }

    /// The edges of this graph whose source is `node`.
    fn out_edges(&self, node: Node) -> EdgeSet {
        self.edges()
            .iter()
            .filter(|edge| edge.from() == node)
            .collect()
    }

    /// The sources of edges targeting any of the given nodes.
    fn predecessors(&self, nodes: &NodeSet) -> NodeSet {
        self.edges()
            .iter()
            .filter(|edge| nodes.contains(edge.to()))
            .map(Edge::from)
            .collect()
    }

    /// The targets of edges sourced at any of the given nodes.
    fn successors(&self, nodes: &NodeSet) -> NodeSet {
        self.edges()
            .iter()
            .filter(|edge| nodes.contains(edge.from()))
            .map(Edge::to)
            .collect()
    }

    /// The nodes with no incoming edge in this graph.
    fn roots(&self) -> NodeSet {
        let targets: NodeSet = self.edges().iter().map(Edge::to).collect();
        self.nodes()
            .iter()
            .filter(|&node| !targets.contains(node))
            .collect()
    }

    /// The nodes with no outgoing edge in this graph.
    fn leaves(&self) -> NodeSet {
        let sources: NodeSet = self.edges().iter().map(Edge::from).collect();
        self.nodes()
            .iter()
            .filter(|&node| !sources.contains(node))
            .collect()
    }

    /// One traversal step forward from the origin nodes.
    ///
    /// The result contains every origin node, this graph's edges leaving
    /// them, and the targets of those edges. Origin nodes absent from this
    /// graph still appear in the result, with no incident edges.
    fn forward_step(&self, origin: &NodeSet) -> Self {
        let mut result = self.empty();
        for node in origin.iter() {
            result.add_node(node);
        }
        for edge in self.edges().iter().filter(|edge| origin.contains(edge.from())) {
            result.add_edge(edge);
        }
        result
    }

    /// One traversal step backward from the origin nodes.
    fn reverse_step(&self, origin: &NodeSet) -> Self {
        let mut result = self.empty();
        for node in origin.iter() {
            result.add_node(node);
        }
        for edge in self.edges().iter().filter(|edge| origin.contains(edge.to())) {
            result.add_edge(edge);
        }
        result
    }

    /// Everything reachable from the origin nodes along edge direction,
    /// including the traversed edges.
    fn forward(&self, origin: &NodeSet) -> Self {
        let mut result = self.empty();
        let mut worklist: Vec<Node> = Vec::new();
        for node in origin.iter().filter(|&node| self.nodes().contains(node)) {
            result.add_node(node);
            worklist.push(node);
        }
        while let Some(node) = worklist.pop() {
            for edge in self.out_edges(node).iter() {
                let seen = result.nodes().contains(edge.to());
                result.add_edge(edge);
                if !seen {
                    worklist.push(edge.to());
                }
            }
        }
        result
    }

    /// Everything that reaches the origin nodes along edge direction,
    /// including the traversed edges.
    fn reverse(&self, origin: &NodeSet) -> Self {
        let mut result = self.empty();
        let mut worklist: Vec<Node> = Vec::new();
        for node in origin.iter().filter(|&node| self.nodes().contains(node)) {
            result.add_node(node);
            worklist.push(node);
        }
        while let Some(node) = worklist.pop() {
            for edge in self.in_edges(node).iter() {
                let seen = result.nodes().contains(edge.from());
                result.add_edge(edge);
                if !seen {
                    worklist.push(edge.from());
                }
            }
        }
        result
    }

    /// The union of this graph with the given graphs.
    ///
    /// Operands are accumulated largest-first (by node count, then edge count)
    /// so the result starts from the biggest contribution.
    fn union(&self, others: &[&Self]) -> Self {
        let mut operands: Vec<&Self> = Vec::with_capacity(others.len() + 1);
        operands.push(self);
        operands.extend_from_slice(others);
        operands.sort_by(|a, b| {
            (b.nodes().len(), b.edges().len()).cmp(&(a.nodes().len(), a.edges().len()))
        });

        let mut result = operands[0].clone();
        for operand in &operands[1..] {
            for node in operand.nodes().iter() {
                result.add_node(node);
            }
            for edge in operand.edges().iter() {
                result.add_edge(edge);
            }
        }
        result
    }

    /// The intersection of this graph with the given graphs.
    ///
    /// Operands are processed smallest-first and the walk stops early once the
    /// accumulator is empty. Since each operand's edge set is closed over its
    /// node set, the intersection is closed as well.
    fn intersection(&self, others: &[&Self]) -> Self {
        let mut operands: Vec<&Self> = Vec::with_capacity(others.len() + 1);
        operands.push(self);
        operands.extend_from_slice(others);
        operands.sort_by(|a, b| {
            (a.nodes().len(), a.edges().len()).cmp(&(b.nodes().len(), b.edges().len()))
        });

        let mut result = operands[0].clone();
        for operand in &operands[1..] {
            if result.nodes().is_empty() {
                break;
            }
            result.nodes_mut().retain_all(operand.nodes());
            result.edges_mut().retain_all(operand.edges());
        }
        result
    }

    /// This graph minus the nodes and edges of the given graphs.
    ///
    /// Node removal cascades to incident edges, so the result stays closed:
    /// an edge survives only if it is absent from every operand *and* both of
    /// its endpoints survive. Stops early once the accumulator is empty.
    fn difference(&self, others: &[&Self]) -> Self {
        let mut result = self.clone();
        for operand in others {
            if result.nodes().is_empty() {
                break;
            }
            for node in operand.nodes().iter() {
                result.remove_node(node);
            }
            for edge in operand.edges().iter() {
                result.remove_edge(edge);
            }
        }
        result
    }

    /// This graph minus only the edges of the given graphs; all nodes remain.
    fn difference_edges(&self, others: &[&Self]) -> Self {
        let mut result = self.clone();
        for operand in others {
            for edge in operand.edges().iter() {
                result.remove_edge(edge);
            }
        }
        result
    }

    /// The subgraph on paths from `from` to `to`.
    ///
    /// Equivalent to `forward({from}) ∩ reverse({to})`, with short-circuits to
    /// the empty graph when either closure misses the opposite terminus.
    fn between(&self, from: Node, to: Node) -> Self {
        let to_set: NodeSet = [to].into_iter().collect();
        self.between_any(from, &to_set)
    }

    /// The subgraph on paths from `from` to any member of `to`.
    fn between_any(&self, from: Node, to: &NodeSet) -> Self {
        let origin: NodeSet = [from].into_iter().collect();
        let fwd = self.forward(&origin);
        if !to.iter().any(|node| fwd.nodes().contains(node)) {
            return self.empty();
        }
        let rev = self.reverse(to);
        if !rev.nodes().contains(from) {
            return self.empty();
        }
        fwd.intersection(&[&rev])
    }

    /// The single-step analogue of [`between`](GraphOps::between):
    /// `forward_step({from}) ∩ reverse_step({to})`.
    fn between_step(&self, from: Node, to: Node) -> Self {
        let origin: NodeSet = [from].into_iter().collect();
        let target: NodeSet = [to].into_iter().collect();
        self.forward_step(&origin)
            .intersection(&[&self.reverse_step(&target)])
    }

    /// The subgraph induced by a node set.
    ///
    /// Contains the given nodes that are present in this graph, plus every
    /// edge of this graph whose endpoints both lie in the given set.
    fn induce(&self, nodes: &NodeSet) -> Self {
        let mut result = self.empty();
        for node in nodes.iter().filter(|&node| self.nodes().contains(node)) {
            result.add_node(node);
        }
        for edge in self.edges().iter() {
            if nodes.contains(edge.from()) && nodes.contains(edge.to()) {
                result.add_edge(edge);
            }
        }
        result
    }

    /// The nodes of this graph that have an attribute under `key`.
    fn nodes_with_attr(&self, arena: &Arena, key: &str) -> NodeSet {
        self.nodes().with_attr(arena, key)
    }

    /// The nodes of this graph whose attribute under `key` equals `value`.
    fn nodes_with_attr_value(&self, arena: &Arena, key: &str, value: &AttrValue) -> NodeSet {
        self.nodes().with_attr_value(arena, key, value)
    }

    /// The edges of this graph that have an attribute under `key`.
    fn edges_with_attr(&self, arena: &Arena, key: &str) -> EdgeSet {
        self.edges().with_attr(arena, key)
    }

    /// The edges of this graph whose attribute under `key` equals `value`.
    fn edges_with_attr_value(&self, arena: &Arena, key: &str, value: &AttrValue) -> EdgeSet {
        self.edges().with_attr_value(arena, key, value)
    }

    /// The nodes of this graph whose display name equals `name`.
    fn nodes_named(&self, arena: &Arena, name: &str) -> NodeSet {
        self.nodes().named(arena, name)
    }

    /// The edges of this graph whose display name equals `name`.
    fn edges_named(&self, arena: &Arena, name: &str) -> EdgeSet {
        self.edges().named(arena, name)
    }
}

/// A plain directed graph: a node set and a closed edge set, nothing more.
///
/// `Graph` carries no tag awareness; tag-inheritance queries are a capability
/// of [`crate::graph::PropertyGraph`], which couples a graph with a schema.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Graph, GraphOps};
///
/// let mut arena = Arena::new();
/// let a = arena.node();
/// let b = arena.node();
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(a, b));
///
/// assert_eq!(graph.roots().one(), Some(a));
/// assert_eq!(graph.leaves().one(), Some(b));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: NodeSet,
    edges: EdgeSet,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates a graph from an iterator of elements.
    #[must_use]
    pub fn from_elements<I: IntoIterator<Item = GraphElement>>(elements: I) -> Self {
        let mut graph = Graph::new();
        graph.add_all(elements);
        graph
    }
}

impl GraphOps for Graph {
    fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    fn nodes_mut(&mut self) -> &mut NodeSet {
        &mut self.nodes
    }

    fn edges_mut(&mut self) -> &mut EdgeSet {
        &mut self.edges
    }

    fn empty(&self) -> Self {
        Graph::new()
    }
}
