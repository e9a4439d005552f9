//! Control dependence analysis.

use crate::algorithms::{DominanceGraph, UniqueEntryExitGraph};
use crate::graph::{Arena, EdgeSet, Graph, GraphOps, Node};

/// Tag on control-dependence edges.
pub const CONTROL_DEPENDENCE_TAG: &str = "control-dependence";

/// The control-dependence graph of a unique-entry/exit graph.
///
/// A node `x` is control-dependent on `y` when `y` decides whether `x`
/// executes — precisely, when `y` lies in the post-dominance frontier of `x`.
/// The materialized graph contains every source node and one freshly created
/// edge `y → x` per such fact, tagged [`CONTROL_DEPENDENCE_TAG`].
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, ControlDependenceGraph, Graph, GraphOps, UniqueEntryExitGraph};
///
/// let mut arena = Arena::new();
/// let branch = arena.node();
/// let arm = arena.node();
/// let join = arena.node();
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(branch, arm));
/// graph.add_edge(arena.edge(branch, join));
/// graph.add_edge(arena.edge(arm, join));
///
/// let view = UniqueEntryExitGraph::new(&graph, branch, join)?;
/// let cdg = ControlDependenceGraph::new(&mut arena, &view);
///
/// // The arm executes only if the branch decides so.
/// let dependence = cdg.dependence_edges().one().unwrap();
/// assert_eq!(dependence.from(), branch);
/// assert_eq!(dependence.to(), arm);
/// # Ok::<(), propgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ControlDependenceGraph {
    graph: Graph,
    dependence_edges: EdgeSet,
}

impl ControlDependenceGraph {
    /// Computes control dependence over the given view.
    pub fn new<G: GraphOps>(arena: &mut Arena, source: &UniqueEntryExitGraph<'_, G>) -> Self {
        let pdom = DominanceGraph::new(arena, source, true);

        let mut graph = Graph::new();
        for node in source.graph().nodes().iter() {
            graph.add_node(node);
        }

        let mut dependence_edges = EdgeSet::new();
        let order: Vec<Node> = pdom.dfs_order().to_vec();
        for dependent in order {
            for controller in pdom.frontier(dependent).iter() {
                let edge = arena.edge(controller, dependent);
                arena.tag(edge, CONTROL_DEPENDENCE_TAG);
                graph.add_edge(edge);
                dependence_edges.add(edge);
            }
        }

        ControlDependenceGraph {
            graph,
            dependence_edges,
        }
    }

    /// The materialized control-dependence graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The control-dependence edges, from controller to dependent.
    #[must_use]
    pub fn dependence_edges(&self) -> &EdgeSet {
        &self.dependence_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Arena;

    #[test]
    fn diamond_arms_depend_on_branch() {
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

        let view = UniqueEntryExitGraph::new(&graph, entry, exit).unwrap();
        let cdg = ControlDependenceGraph::new(&mut arena, &view);

        assert_eq!(cdg.dependence_edges().len(), 2);
        let mut dependents = Vec::new();
        for edge in cdg.dependence_edges().iter() {
            assert_eq!(edge.from(), entry);
            assert!(arena.has_tag(edge, CONTROL_DEPENDENCE_TAG));
            dependents.push(edge.to());
        }
        assert!(dependents.contains(&left));
        assert!(dependents.contains(&right));
    }

    #[test]
    fn linear_chain_has_no_dependence() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(a, b));
        graph.add_edge(arena.edge(b, c));

        let view = UniqueEntryExitGraph::new(&graph, a, c).unwrap();
        let cdg = ControlDependenceGraph::new(&mut arena, &view);

        assert!(cdg.dependence_edges().is_empty());
        assert_eq!(cdg.graph().nodes().len(), 3);
    }

    #[test]
    fn loop_body_depends_on_header() {
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

        let view = UniqueEntryExitGraph::new(&graph, entry, exit).unwrap();
        let cdg = ControlDependenceGraph::new(&mut arena, &view);

        let body_controllers: Vec<Node> = cdg
            .dependence_edges()
            .iter()
            .filter(|edge| edge.to() == body)
            .map(|edge| edge.from())
            .collect();
        assert_eq!(body_controllers, vec![header]);
    }

    #[test]
    fn back_edge_makes_the_entry_dependent() {
        // entry -> a, a -> entry, a -> exit: whether the entry runs again is
        // decided at a.
        let mut arena = Arena::new();
        let entry = arena.node();
        let a = arena.node();
        let exit = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(entry, a));
        graph.add_edge(arena.edge(a, entry));
        graph.add_edge(arena.edge(a, exit));

        let view = UniqueEntryExitGraph::new(&graph, entry, exit).unwrap();
        let cdg = ControlDependenceGraph::new(&mut arena, &view);

        let entry_controllers: Vec<Node> = cdg
            .dependence_edges()
            .iter()
            .filter(|edge| edge.to() == entry)
            .map(|edge| edge.from())
            .collect();
        assert_eq!(entry_controllers, vec![a]);
        // a also decides its own re-execution.
        assert!(cdg
            .dependence_edges()
            .iter()
            .any(|edge| edge.from() == a && edge.to() == a));
    }

    #[test]
    fn result_contains_all_source_nodes() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let isolated = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(a, b));
        graph.add_node(isolated);

        let view = UniqueEntryExitGraph::new(&graph, a, b).unwrap();
        let cdg = ControlDependenceGraph::new(&mut arena, &view);
        assert!(cdg.graph().nodes().contains(isolated));
    }
}
