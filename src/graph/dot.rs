//! DOT rendering for visualization.

use std::fmt::Write;

use crate::graph::{Arena, GraphOps};

/// Renders a graph in Graphviz DOT format.
///
/// Node labels come from display names, falling back to `n{address}` for
/// unnamed nodes. Edge labels show the edge's display name if present, else
/// its tags joined with commas; unlabeled edges are rendered bare. Output
/// follows the insertion order of the underlying sets, so rendering is
/// deterministic.
///
/// # Examples
///
/// ```rust
/// use propgraph::{graph::to_dot, Arena, Graph, GraphOps};
///
/// let mut arena = Arena::new();
/// let a = arena.node_named("entry");
/// let b = arena.node_named("exit");
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(a, b));
///
/// let dot = to_dot(&graph, &arena);
/// assert!(dot.contains("\"n0\" [label=\"entry\"]"));
/// assert!(dot.contains("\"n0\" -> \"n1\""));
/// ```
#[must_use]
pub fn to_dot<G: GraphOps>(graph: &G, arena: &Arena) -> String {
    let mut out = String::from("digraph {\n");
    for node in graph.nodes().iter() {
        let label = match arena.name(node) {
            Some(name) => escape_dot(name),
            None => format!("n{}", node.address().index()),
        };
        let _ = writeln!(
            out,
            "    \"n{}\" [label=\"{}\"];",
            node.address().index(),
            label
        );
    }
    for edge in graph.edges().iter() {
        let label = edge_label(edge, arena);
        let source = edge.from().address().index();
        let target = edge.to().address().index();
        if label.is_empty() {
            let _ = writeln!(out, "    \"n{}\" -> \"n{}\";", source, target);
        } else {
            let _ = writeln!(
                out,
                "    \"n{}\" -> \"n{}\" [label=\"{}\"];",
                source, target, label
            );
        }
    }
    out.push_str("}\n");
    out
}

fn edge_label(edge: crate::graph::Edge, arena: &Arena) -> String {
    if let Some(name) = arena.name(edge) {
        return escape_dot(name);
    }
    let mut tags: Vec<&str> = arena.tags(edge).collect();
    tags.sort_unstable();
    escape_dot(&tags.join(", "))
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
