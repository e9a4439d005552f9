use thiserror::Error;

use crate::graph::Address;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph construction and mutation are infallible by design: handles can only be obtained
/// from an [`crate::graph::Arena`], and all set-algebraic operators are total. Errors arise
/// only at the two validation boundaries — wrapping a graph in a unique-entry/exit view,
/// and checking a schema graph for well-formedness.
///
/// # Examples
///
/// ```rust
/// use propgraph::{Arena, Error, Graph, GraphOps, UniqueEntryExitGraph};
///
/// let mut arena = Arena::new();
/// let a = arena.node();
/// let b = arena.node();
///
/// // Two disconnected nodes have no entry-to-exit path.
/// let mut graph = Graph::new();
/// graph.add_node(a);
/// graph.add_node(b);
///
/// match UniqueEntryExitGraph::new(&graph, a, b) {
///     Err(Error::NoEntryExitPath { .. }) => {}
///     _ => panic!("expected a missing-path error"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// No path connects the chosen entry node to the chosen exit node.
    ///
    /// Returned by [`crate::algorithms::UniqueEntryExitGraph::new`] when the
    /// graph contains no directed path from entry to exit, which makes
    /// dominance and control-dependence analysis meaningless.
    #[error("no path connects entry {entry} to exit {exit}")]
    NoEntryExitPath {
        /// Address of the requested entry node.
        entry: Address,
        /// Address of the requested exit node.
        exit: Address,
    },

    /// A schema graph violates the tag-hierarchy forest shape.
    ///
    /// Returned by [`crate::graph::SchemaGraph::validate`] when a schema node
    /// has more than one parent or a schema edge forms a self-loop. The message
    /// names the offending tag.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),
}

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
