//! Path enumeration.

use rustc_hash::FxHashSet;

use crate::graph::{Edge, GraphOps, Node, NodeSet};

/// Enumerates paths from `from` to the members of `to`.
///
/// Each path is a sequence of edges in traversal order. The search space is
/// first pruned to the subgraph on paths between the terminals, then explored
/// with an explicit stack; a shared history buffer trimmed to each entry's
/// depth reconstructs path prefixes without recomputation. A path ends at the
/// first target it reaches; exploration does not continue past a target.
///
/// With `allow_revisits = false`, an edge is expanded at most once across the
/// whole search, which guarantees termination on cyclic graphs at the cost of
/// missing paths that share a suffix with an already-reported path. With
/// `allow_revisits = true`, every path is reported — on cyclic graphs this
/// can be unbounded, a trade-off the caller opts into.
///
/// Paths have at least one edge: if `from` itself belongs to `to`, the empty
/// path is not reported.
///
/// # Examples
///
/// ```rust
/// use propgraph::{algorithms::enumerate_paths, Arena, Graph, GraphOps, NodeSet};
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
/// let targets: NodeSet = [c].into_iter().collect();
/// let paths = enumerate_paths(&graph, a, &targets, false);
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].len(), 2);
/// ```
#[must_use]
pub fn enumerate_paths<G: GraphOps>(
    graph: &G,
    from: Node,
    to: &NodeSet,
    allow_revisits: bool,
) -> Vec<Vec<Edge>> {
    let pruned = graph.between_any(from, to);
    if pruned.nodes().is_empty() {
        return Vec::new();
    }

    let mut paths: Vec<Vec<Edge>> = Vec::new();
    let mut history: Vec<Edge> = Vec::new();
    let mut visited: FxHashSet<Edge> = FxHashSet::default();
    let mut stack: Vec<(Edge, usize)> = pruned
        .out_edges(from)
        .iter()
        .map(|edge| (edge, 0))
        .collect();

    while let Some((edge, depth)) = stack.pop() {
        visited.insert(edge);
        history.truncate(depth);
        history.push(edge);
        if to.contains(edge.to()) {
            paths.push(history.clone());
        } else {
            for next in pruned.out_edges(edge.to()).iter() {
                if allow_revisits || !visited.contains(&next) {
                    stack.push((next, depth + 1));
                }
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Arena, Element, Graph};

    fn targets(nodes: &[Node]) -> NodeSet {
        nodes.iter().copied().collect()
    }

    #[test]
    fn single_path_through_a_chain() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        let bc = arena.edge(b, c);
        graph.add_edge(ab);
        graph.add_edge(bc);

        let paths = enumerate_paths(&graph, a, &targets(&[c]), false);
        assert_eq!(paths, vec![vec![ab, bc]]);
    }

    #[test]
    fn diamond_yields_two_paths() {
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

        let paths = enumerate_paths(&graph, entry, &targets(&[exit]), false);
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.len(), 2);
            assert_eq!(path[0].from(), entry);
            assert_eq!(path[1].to(), exit);
        }
    }

    #[test]
    fn cycle_is_cut_without_revisits() {
        // a -> b -> c -> b, c -> d, d -> g: single path a..g.
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let d = arena.node();
        let g = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        let bc = arena.edge(b, c);
        let cb = arena.edge(c, b);
        let cd = arena.edge(c, d);
        let dg = arena.edge(d, g);
        graph.add_edge(ab);
        graph.add_edge(bc);
        graph.add_edge(cb);
        graph.add_edge(cd);
        graph.add_edge(dg);

        let paths = enumerate_paths(&graph, a, &targets(&[g]), false);
        assert_eq!(paths, vec![vec![ab, bc, cd, dg]]);
    }

    #[test]
    fn revisits_recover_shared_suffixes() {
        // Two diamonds in sequence share the suffix d -> e.
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let d = arena.node();
        let e = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        let ac = arena.edge(a, c);
        let bd = arena.edge(b, d);
        let cd = arena.edge(c, d);
        let de = arena.edge(d, e);
        graph.add_edge(ab);
        graph.add_edge(ac);
        graph.add_edge(bd);
        graph.add_edge(cd);
        graph.add_edge(de);

        // Without revisits the shared suffix is expanded only once, so one of
        // the two branches loses its path.
        let cut = enumerate_paths(&graph, a, &targets(&[e]), false);
        assert_eq!(cut.len(), 1);

        let mut full = enumerate_paths(&graph, a, &targets(&[e]), true);
        full.sort_by_key(|path| path[0].address());
        assert_eq!(full, vec![vec![ab, bd, de], vec![ac, cd, de]]);
    }

    #[test]
    fn search_stops_at_the_first_target() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        graph.add_edge(ab);
        graph.add_edge(arena.edge(b, c));

        // b is already a target, so the walk never reaches c.
        let paths = enumerate_paths(&graph, a, &targets(&[b, c]), false);
        assert_eq!(paths, vec![vec![ab]]);
    }

    #[test]
    fn unreachable_target_yields_nothing() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let island = arena.node();
        let mut graph = Graph::new();
        graph.add_edge(arena.edge(a, b));
        graph.add_node(island);

        assert!(enumerate_paths(&graph, a, &targets(&[island]), false).is_empty());
    }

    #[test]
    fn origin_in_targets_yields_no_empty_path() {
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        graph.add_edge(ab);

        let paths = enumerate_paths(&graph, a, &targets(&[a, b]), false);
        assert_eq!(paths, vec![vec![ab]]);
    }

    #[test]
    fn side_branches_are_pruned() {
        // a -> b -> c, b -> d (dead end relative to c).
        let mut arena = Arena::new();
        let a = arena.node();
        let b = arena.node();
        let c = arena.node();
        let d = arena.node();
        let mut graph = Graph::new();
        let ab = arena.edge(a, b);
        let bc = arena.edge(b, c);
        graph.add_edge(ab);
        graph.add_edge(bc);
        graph.add_edge(arena.edge(b, d));

        let paths = enumerate_paths(&graph, a, &targets(&[c]), false);
        assert_eq!(paths, vec![vec![ab, bc]]);
    }
}
