//! Dominance and post-dominance analysis.
//!
//! Implements the Lengauer-Tarjan algorithm with path-compressed eval/link,
//! running in O(E log V). The same machinery serves both directions: dominance
//! walks forward from the entry, post-dominance walks backward from the exit
//! over the same graph with the edge sense inverted.
//!
//! Results are materialized as a graph of freshly created analysis edges —
//! immediate-(post-)dominator edges and (post-)dominance-frontier edges —
//! each carrying a tag naming its relation, alongside plain map-based query
//! accessors.

use rustc_hash::FxHashMap;

use crate::algorithms::UniqueEntryExitGraph;
use crate::graph::{Arena, EdgeSet, Graph, GraphOps, Node, NodeSet};

/// Tag on immediate-dominator edges.
pub const IDOM_TAG: &str = "idom";

/// Tag on immediate-post-dominator edges.
pub const IPDOM_TAG: &str = "ipdom";

/// Tag on dominance-frontier edges.
pub const DOM_FRONTIER_TAG: &str = "dom-frontier";

/// Tag on post-dominance-frontier edges.
pub const PDOM_FRONTIER_TAG: &str = "pdom-frontier";

/// Dominator tree and dominance frontiers of a unique-entry/exit graph.
///
/// Construction is eager: the full analysis runs once and the results are
/// plain owned data. Nodes unreachable from every traversal seed are absent
/// from all result maps.
///
/// The materialized [`graph`](DominanceGraph::graph) contains every analyzed
/// node, one edge *dominator → dominated* per immediate-dominator fact
/// (tagged [`IDOM_TAG`] or [`IPDOM_TAG`]), and one edge `d → f` per frontier
/// fact `f ∈ DF(d)` (tagged [`DOM_FRONTIER_TAG`] or [`PDOM_FRONTIER_TAG`]).
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, DominanceGraph, Graph, GraphOps, UniqueEntryExitGraph};
///
/// let mut arena = Arena::new();
/// let entry = arena.node();
/// let left = arena.node();
/// let right = arena.node();
/// let exit = arena.node();
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(entry, left));
/// graph.add_edge(arena.edge(entry, right));
/// graph.add_edge(arena.edge(left, exit));
/// graph.add_edge(arena.edge(right, exit));
///
/// let view = UniqueEntryExitGraph::new(&graph, entry, exit)?;
/// let dom = DominanceGraph::new(&mut arena, &view, false);
///
/// assert_eq!(dom.immediate_dominator(exit), Some(entry));
/// assert!(dom.dominates(entry, left));
/// # Ok::<(), propgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DominanceGraph {
    graph: Graph,
    idoms: FxHashMap<Node, Node>,
    frontiers: FxHashMap<Node, NodeSet>,
    order: Vec<Node>,
    tree_edges: EdgeSet,
    frontier_edges: EdgeSet,
    inverted: bool,
}

impl DominanceGraph {
    /// Computes dominance (`invert = false`) or post-dominance
    /// (`invert = true`) over the given view.
    pub fn new<G: GraphOps>(
        arena: &mut Arena,
        source: &UniqueEntryExitGraph<'_, G>,
        invert: bool,
    ) -> Self {
        Self::with_roots(arena, source, invert, &NodeSet::new())
    }

    /// Like [`new`](DominanceGraph::new), but additionally seeds the
    /// traversal at the given roots.
    ///
    /// Extra roots let detached regions of the graph receive their own
    /// dominator trees; each extra seed that starts a new tree becomes a root
    /// with no immediate dominator.
    pub fn with_roots<G: GraphOps>(
        arena: &mut Arena,
        source: &UniqueEntryExitGraph<'_, G>,
        invert: bool,
        extra_roots: &NodeSet,
    ) -> Self {
        let primary = if invert { source.exit() } else { source.entry() };
        let mut seeds: Vec<Node> = vec![primary];
        seeds.extend(extra_roots.iter().filter(|&root| root != primary));

        let state = LengauerTarjan::run(source.graph(), &seeds, invert);
        let frontiers = state.frontiers(source.graph(), invert);

        let mut graph = Graph::new();
        let mut tree_edges = EdgeSet::new();
        let mut frontier_edges = EdgeSet::new();
        let tree_tag = if invert { IPDOM_TAG } else { IDOM_TAG };
        let frontier_tag = if invert {
            PDOM_FRONTIER_TAG
        } else {
            DOM_FRONTIER_TAG
        };

        for &node in &state.order {
            graph.add_node(node);
        }
        for &node in &state.order {
            if let Some(&dominator) = state.idom.get(&node) {
                let edge = arena.edge(dominator, node);
                arena.tag(edge, tree_tag);
                graph.add_edge(edge);
                tree_edges.add(edge);
            }
        }
        for &node in &state.order {
            if let Some(frontier) = frontiers.get(&node) {
                for member in frontier.iter() {
                    let edge = arena.edge(node, member);
                    arena.tag(edge, frontier_tag);
                    graph.add_edge(edge);
                    frontier_edges.add(edge);
                }
            }
        }

        DominanceGraph {
            graph,
            idoms: state.idom,
            frontiers,
            order: state.order,
            tree_edges,
            frontier_edges,
            inverted: invert,
        }
    }

    /// The materialized analysis graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// `true` if this analysis computed post-dominance.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The immediate (post-)dominator of a node.
    ///
    /// Returns `None` for traversal roots and for nodes absent from the
    /// analysis.
    #[must_use]
    pub fn immediate_dominator(&self, node: Node) -> Option<Node> {
        self.idoms.get(&node).copied()
    }

    /// All immediate-(post-)dominator facts, keyed by the dominated node.
    #[must_use]
    pub fn idoms(&self) -> &FxHashMap<Node, Node> {
        &self.idoms
    }

    /// Returns `true` if `a` (post-)dominates `b`. Reflexive.
    #[must_use]
    pub fn dominates(&self, a: Node, b: Node) -> bool {
        if a == b {
            return self.order.contains(&b);
        }
        let mut current = b;
        while let Some(&dominator) = self.idoms.get(&current) {
            if dominator == a {
                return true;
            }
            current = dominator;
        }
        false
    }

    /// The (post-)dominance frontier of a node. Empty for nodes with no
    /// frontier facts.
    #[must_use]
    pub fn frontier(&self, node: Node) -> NodeSet {
        self.frontiers.get(&node).cloned().unwrap_or_default()
    }

    /// All frontier facts, keyed by the frontier owner.
    #[must_use]
    pub fn dominance_frontiers(&self) -> &FxHashMap<Node, NodeSet> {
        &self.frontiers
    }

    /// The nodes in depth-first preorder of the analysis traversal.
    ///
    /// Every node's immediate dominator precedes it in this order, so the
    /// sequence doubles as a topological order of the dominator tree.
    #[must_use]
    pub fn dfs_order(&self) -> &[Node] {
        &self.order
    }

    /// The materialized immediate-(post-)dominator edges.
    #[must_use]
    pub fn tree_edges(&self) -> &EdgeSet {
        &self.tree_edges
    }

    /// The materialized frontier edges.
    #[must_use]
    pub fn frontier_edges(&self) -> &EdgeSet {
        &self.frontier_edges
    }
}

/// Working state of the Lengauer-Tarjan computation.
struct LengauerTarjan {
    order: Vec<Node>,
    dfnum: FxHashMap<Node, usize>,
    parent: FxHashMap<Node, Node>,
    semi: FxHashMap<Node, usize>,
    idom: FxHashMap<Node, Node>,
    ancestor: FxHashMap<Node, Node>,
    label: FxHashMap<Node, Node>,
    bucket: FxHashMap<Node, Vec<Node>>,
}

impl LengauerTarjan {
    fn run<G: GraphOps>(graph: &G, seeds: &[Node], invert: bool) -> Self {
        let mut state = LengauerTarjan {
            order: Vec::new(),
            dfnum: FxHashMap::default(),
            parent: FxHashMap::default(),
            semi: FxHashMap::default(),
            idom: FxHashMap::default(),
            ancestor: FxHashMap::default(),
            label: FxHashMap::default(),
            bucket: FxHashMap::default(),
        };
        state.number(graph, seeds, invert);
        state.compute_idoms(graph, invert);
        state
    }

    /// Depth-first numbering from the seeds, recording spanning-tree parents.
    fn number<G: GraphOps>(&mut self, graph: &G, seeds: &[Node], invert: bool) {
        let mut stack: Vec<(Node, Option<Node>)> = seeds
            .iter()
            .rev()
            .filter(|&&seed| graph.nodes().contains(seed))
            .map(|&seed| (seed, None))
            .collect();
        while let Some((node, tree_parent)) = stack.pop() {
            if self.dfnum.contains_key(&node) {
                continue;
            }
            self.dfnum.insert(node, self.order.len());
            self.semi.insert(node, self.order.len());
            self.label.insert(node, node);
            self.order.push(node);
            if let Some(parent) = tree_parent {
                self.parent.insert(node, parent);
            }
            for neighbor in walk_targets(graph, node, invert) {
                if !self.dfnum.contains_key(&neighbor) {
                    stack.push((neighbor, Some(node)));
                }
            }
        }
    }

    fn compute_idoms<G: GraphOps>(&mut self, graph: &G, invert: bool) {
        // Semidominators and buckets, in decreasing preorder.
        for index in (1..self.order.len()).rev() {
            let node = self.order[index];
            let Some(&parent) = self.parent.get(&node) else {
                // An extra seed rooting its own tree.
                continue;
            };
            for pred in walk_sources(graph, node, invert) {
                if !self.dfnum.contains_key(&pred) {
                    continue;
                }
                let candidate = self.eval(pred);
                let candidate_semi = self.semi[&candidate];
                if candidate_semi < self.semi[&node] {
                    self.semi.insert(node, candidate_semi);
                }
            }
            let semi_vertex = self.order[self.semi[&node]];
            self.bucket.entry(semi_vertex).or_default().push(node);
            self.ancestor.insert(node, parent);

            for waiting in self.bucket.remove(&parent).unwrap_or_default() {
                let candidate = self.eval(waiting);
                let dominator = if self.semi[&candidate] < self.semi[&waiting] {
                    candidate
                } else {
                    parent
                };
                self.idom.insert(waiting, dominator);
            }
        }

        // Explicit immediate dominators, in increasing preorder.
        for index in 1..self.order.len() {
            let node = self.order[index];
            let Some(&dominator) = self.idom.get(&node) else {
                continue;
            };
            let semi_vertex = self.order[self.semi[&node]];
            if dominator != semi_vertex {
                if let Some(&fixed) = self.idom.get(&dominator) {
                    self.idom.insert(node, fixed);
                }
            }
        }
    }

    /// The ancestor of `node` with minimal semidominator, with path
    /// compression.
    fn eval(&mut self, node: Node) -> Node {
        if !self.ancestor.contains_key(&node) {
            return node;
        }
        self.compress(node);
        self.label[&node]
    }

    fn compress(&mut self, node: Node) {
        let mut path = vec![node];
        loop {
            let top = *path.last().unwrap_or(&node);
            let ancestor = self.ancestor[&top];
            if self.ancestor.contains_key(&ancestor) {
                path.push(ancestor);
            } else {
                break;
            }
        }
        while let Some(current) = path.pop() {
            let ancestor = self.ancestor[&current];
            if let Some(&grandparent) = self.ancestor.get(&ancestor) {
                let ancestor_label = self.label[&ancestor];
                if self.semi[&ancestor_label] < self.semi[&self.label[&current]] {
                    self.label.insert(current, ancestor_label);
                }
                self.ancestor.insert(current, grandparent);
            }
        }
    }

    /// Dominance frontiers via the local/up combination: a node's frontier
    /// collects the walk-successors it does not immediately dominate, plus
    /// the frontier members of its dominator-tree children it does not
    /// immediately dominate. A frontier member may be a traversal root with
    /// no immediate dominator of its own, e.g. the target of a back edge to
    /// the entry.
    ///
    /// Children follow their idom in preorder, so one pass over the reversed
    /// order sees every child before its parent.
    fn frontiers<G: GraphOps>(&self, graph: &G, invert: bool) -> FxHashMap<Node, NodeSet> {
        let mut children: FxHashMap<Node, Vec<Node>> = FxHashMap::default();
        for &node in &self.order {
            if let Some(&dominator) = self.idom.get(&node) {
                children.entry(dominator).or_default().push(node);
            }
        }

        let mut frontiers: FxHashMap<Node, NodeSet> = FxHashMap::default();
        for &node in self.order.iter().rev() {
            let mut frontier = NodeSet::new();
            for succ in walk_targets(graph, node, invert) {
                if self.dfnum.contains_key(&succ) && self.idom.get(&succ) != Some(&node) {
                    frontier.add(succ);
                }
            }
            for child in children.get(&node).into_iter().flatten() {
                if let Some(inherited) = frontiers.get(child) {
                    for member in inherited.iter() {
                        if self.idom.get(&member) != Some(&node) {
                            frontier.add(member);
                        }
                    }
                }
            }
            if !frontier.is_empty() {
                frontiers.insert(node, frontier);
            }
        }
        frontiers
    }
}

/// The neighbors reached by one step along the walk direction.
fn walk_targets<G: GraphOps>(graph: &G, node: Node, invert: bool) -> Vec<Node> {
    if invert {
        graph.in_edges(node).iter().map(|edge| edge.from()).collect()
    } else {
        graph.out_edges(node).iter().map(|edge| edge.to()).collect()
    }
}

/// The neighbors that reach `node` by one step along the walk direction.
fn walk_sources<G: GraphOps>(graph: &G, node: Node, invert: bool) -> Vec<Node> {
    if invert {
        graph.out_edges(node).iter().map(|edge| edge.to()).collect()
    } else {
        graph.in_edges(node).iter().map(|edge| edge.from()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Arena;

    fn view<'a>(
        graph: &'a Graph,
        entry: Node,
        exit: Node,
    ) -> UniqueEntryExitGraph<'a, Graph> {
        UniqueEntryExitGraph::new(graph, entry, exit).unwrap()
    }

    #[test]
    fn linear_chain() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(a, b));
        graph.add_edge(arena.edge(b, c));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, a, c), false);
        assert_eq!(dom.immediate_dominator(a), None);
        assert_eq!(dom.immediate_dominator(b), Some(a));
        assert_eq!(dom.immediate_dominator(c), Some(b));
        assert!(dom.dominates(a, c));
        assert!(dom.dominates(b, b));
        assert!(!dom.dominates(c, a));
        assert!(dom.frontier(b).is_empty());
    }

    #[test]
    fn diamond_dominance() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let left = arena.node();
        let right = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, left));
        graph.add_edge(arena.edge(entry, right));
        graph.add_edge(arena.edge(left, exit));
        graph.add_edge(arena.edge(right, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        assert_eq!(dom.immediate_dominator(left), Some(entry));
        assert_eq!(dom.immediate_dominator(right), Some(entry));
        // Neither branch arm dominates the join.
        assert_eq!(dom.immediate_dominator(exit), Some(entry));

        let expected: NodeSet = [exit].into_iter().collect();
        assert_eq!(dom.frontier(left), expected);
        assert_eq!(dom.frontier(right), expected);
        assert!(dom.frontier(entry).is_empty());
    }

    #[test]
    fn diamond_post_dominance() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let left = arena.node();
        let right = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, left));
        graph.add_edge(arena.edge(entry, right));
        graph.add_edge(arena.edge(left, exit));
        graph.add_edge(arena.edge(right, exit));

        let pdom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), true);
        assert!(pdom.is_inverted());
        assert_eq!(pdom.immediate_dominator(left), Some(exit));
        assert_eq!(pdom.immediate_dominator(right), Some(exit));
        assert_eq!(pdom.immediate_dominator(entry), Some(exit));

        let expected: NodeSet = [entry].into_iter().collect();
        assert_eq!(pdom.frontier(left), expected);
        assert_eq!(pdom.frontier(right), expected);
    }

    #[test]
    fn loop_back_edge() {
        // entry -> header -> body -> header, header -> exit.
        let mut arena = Arena::new();
        let entry = arena.node();
        let header = arena.node();
        let body = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, header));
        graph.add_edge(arena.edge(header, body));
        graph.add_edge(arena.edge(body, header));
        graph.add_edge(arena.edge(header, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        assert_eq!(dom.immediate_dominator(header), Some(entry));
        assert_eq!(dom.immediate_dominator(body), Some(header));
        assert_eq!(dom.immediate_dominator(exit), Some(header));
        // The loop puts the header in its own frontier via the back edge.
        assert!(dom.frontier(body).contains(header));
    }

    #[test]
    fn back_edge_to_entry_joins_the_frontier() {
        // entry -> a, a -> entry, a -> exit.
        let mut arena = Arena::new();
        let entry = arena.node();
        let a = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, a));
        graph.add_edge(arena.edge(a, entry));
        graph.add_edge(arena.edge(a, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        // The back edge makes the entry a join point even though the entry
        // itself has no immediate dominator.
        let expected: NodeSet = [entry].into_iter().collect();
        assert_eq!(dom.frontier(a), expected);
        assert_eq!(dom.frontier(entry), expected);
    }

    #[test]
    fn nested_branches() {
        // entry -> a -> b, entry -> c, a -> c, b -> c, c -> exit.
        let mut arena = Arena::new();
        let entry = arena.node();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, a));
        graph.add_edge(arena.edge(entry, c));
        graph.add_edge(arena.edge(a, b));
        graph.add_edge(arena.edge(a, c));
        graph.add_edge(arena.edge(b, c));
        graph.add_edge(arena.edge(c, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        assert_eq!(dom.immediate_dominator(a), Some(entry));
        assert_eq!(dom.immediate_dominator(b), Some(a));
        assert_eq!(dom.immediate_dominator(c), Some(entry));
        assert!(dom.frontier(a).contains(c));
        assert!(dom.frontier(b).contains(c));
    }

    #[test]
    fn materialized_edges_carry_tags() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let left = arena.node();
        let right = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, left));
        graph.add_edge(arena.edge(entry, right));
        graph.add_edge(arena.edge(left, exit));
        graph.add_edge(arena.edge(right, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);

        assert_eq!(dom.tree_edges().len(), 3);
        for edge in dom.tree_edges().iter() {
            assert!(arena.has_tag(edge, IDOM_TAG));
            // Edge direction is dominator -> dominated.
            assert_eq!(dom.immediate_dominator(edge.to()), Some(edge.from()));
        }
        assert_eq!(dom.frontier_edges().len(), 2);
        for edge in dom.frontier_edges().iter() {
            assert!(arena.has_tag(edge, DOM_FRONTIER_TAG));
            assert!(dom.frontier(edge.from()).contains(edge.to()));
        }
        assert_eq!(dom.graph().nodes().len(), 4);
    }

    #[test]
    fn dfs_order_starts_at_seed_and_respects_tree() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let mid = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, mid));
        graph.add_edge(arena.edge(mid, exit));

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        let order = dom.dfs_order();
        assert_eq!(order[0], entry);
        for (index, &node) in order.iter().enumerate() {
            if let Some(idom) = dom.immediate_dominator(node) {
                let idom_index = order.iter().position(|&n| n == idom).unwrap();
                assert!(idom_index < index);
            }
        }
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let exit = arena.node();
        let island = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, exit));
        graph.add_node(island);

        let dom = DominanceGraph::new(&mut arena, &view(&graph, entry, exit), false);
        assert_eq!(dom.immediate_dominator(island), None);
        assert!(!dom.dominates(island, island));
        assert!(!dom.graph().nodes().contains(island));
    }

    #[test]
    fn extra_roots_cover_detached_regions() {
        let mut arena = Arena::new();
        let entry = arena.node();
        let exit = arena.node();
        let island_root = arena.node();
        let island_leaf = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, exit));
        graph.add_edge(arena.edge(island_root, island_leaf));

        let view = UniqueEntryExitGraph::new(&graph, entry, exit).unwrap();
        let roots: NodeSet = [island_root].into_iter().collect();
        let dom = DominanceGraph::with_roots(&mut arena, &view, false, &roots);

        assert_eq!(dom.immediate_dominator(island_root), None);
        assert_eq!(dom.immediate_dominator(island_leaf), Some(island_root));
        assert!(dom.dominates(island_root, island_leaf));
        assert!(!dom.dominates(entry, island_leaf));
    }
}
