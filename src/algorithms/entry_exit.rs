//! Unique-entry/exit graph views.

use crate::graph::{GraphOps, Node};
use crate::{Error, Result};

/// A graph view with a verified entry-to-exit path.
///
/// Dominance and control-dependence analysis require a single entry and a
/// single exit connected by at least one directed path. This wrapper checks
/// that precondition once at construction, so the analyses can assume it.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Graph, GraphOps, UniqueEntryExitGraph};
///
/// let mut arena = Arena::new();
/// let entry = arena.node();
/// let exit = arena.node();
///
/// let mut graph = Graph::new();
/// graph.add_edge(arena.edge(entry, exit));
///
/// let view = UniqueEntryExitGraph::new(&graph, entry, exit)?;
/// assert_eq!(view.entry(), entry);
/// assert_eq!(view.exit(), exit);
/// # Ok::<(), propgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UniqueEntryExitGraph<'a, G: GraphOps> {
    graph: &'a G,
    entry: Node,
    exit: Node,
}

impl<'a, G: GraphOps> UniqueEntryExitGraph<'a, G> {
    /// Wraps a graph after verifying a path from `entry` to `exit` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEntryExitPath`] if either node is absent from the
    /// graph or no directed path connects them.
    pub fn new(graph: &'a G, entry: Node, exit: Node) -> Result<Self> {
        // A path exists exactly when the between-subgraph holds both ends;
        // an emptiness test would be fooled by graph kinds whose empty
        // result carries seed nodes.
        let span = graph.between(entry, exit);
        if !span.nodes().contains(entry) || !span.nodes().contains(exit) {
            return Err(Error::NoEntryExitPath {
                entry: entry.address(),
                exit: exit.address(),
            });
        }
        Ok(UniqueEntryExitGraph { graph, entry, exit })
    }

    /// The wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// The entry node.
    #[must_use]
    pub fn entry(&self) -> Node {
        self.entry
    }

    /// The exit node.
    #[must_use]
    pub fn exit(&self) -> Node {
        self.exit
    }
}
