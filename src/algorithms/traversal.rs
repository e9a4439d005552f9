//! Depth-first preorder traversal.

use rustc_hash::FxHashSet;

use crate::graph::{Address, GraphOps, Node};

/// An iterator yielding nodes in depth-first preorder.
///
/// The walk uses an explicit stack and marks visited edges by their
/// `(source, target)` address pair, so parallel edges between the same nodes
/// are walked only once. Each node is yielded at most once, the first seed
/// first. Multiple seeds produce one traversal forest.
///
/// The inverted mode walks incoming edges instead of outgoing ones, which is
/// how post-dominance analysis explores a graph from its exit.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, DepthFirstPreorder, Graph, GraphOps};
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
/// let order: Vec<_> = DepthFirstPreorder::new(&graph, [a]).collect();
/// assert_eq!(order, vec![a, b, c]);
/// ```
pub struct DepthFirstPreorder<'g, G: GraphOps> {
    graph: &'g G,
    stack: Vec<Node>,
    visited_nodes: FxHashSet<Address>,
    visited_edges: FxHashSet<(Address, Address)>,
    invert: bool,
}

impl<'g, G: GraphOps> DepthFirstPreorder<'g, G> {
    /// Creates a forward traversal seeded at the given roots.
    pub fn new(graph: &'g G, roots: impl IntoIterator<Item = Node>) -> Self {
        Self::with_direction(graph, roots, false)
    }

    /// Creates a traversal that follows incoming edges, seeded at the given
    /// roots.
    pub fn inverted(graph: &'g G, roots: impl IntoIterator<Item = Node>) -> Self {
        Self::with_direction(graph, roots, true)
    }

    fn with_direction(
        graph: &'g G,
        roots: impl IntoIterator<Item = Node>,
        invert: bool,
    ) -> Self {
        let mut stack: Vec<Node> = roots
            .into_iter()
            .filter(|&root| graph.nodes().contains(root))
            .collect();
        // Last pushed pops first; reverse so the first seed leads the order.
        stack.reverse();
        DepthFirstPreorder {
            graph,
            stack,
            visited_nodes: FxHashSet::default(),
            visited_edges: FxHashSet::default(),
            invert,
        }
    }
}

impl<G: GraphOps> Iterator for DepthFirstPreorder<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        while let Some(node) = self.stack.pop() {
            if !self.visited_nodes.insert(node.address()) {
                continue;
            }
            let edges = if self.invert {
                self.graph.in_edges(node)
            } else {
                self.graph.out_edges(node)
            };
            for edge in edges.iter() {
                let key = (edge.from().address(), edge.to().address());
                if !self.visited_edges.insert(key) {
                    continue;
                }
                let neighbor = if self.invert { edge.from() } else { edge.to() };
                if !self.visited_nodes.contains(&neighbor.address()) {
                    self.stack.push(neighbor);
                }
            }
            return Some(node);
        }
        None
    }
}
