//! Graph analysis algorithms.
//!
//! Everything here builds on the algebra in [`crate::graph`]:
//!
//! - [`UniqueEntryExitGraph`] validates the single-entry/single-exit shape
//!   the dominance analyses require.
//! - [`DepthFirstPreorder`] is the cycle-safe traversal primitive.
//! - [`DominanceGraph`] computes Lengauer-Tarjan dominator trees and
//!   dominance frontiers, forward or inverted (post-dominance).
//! - [`ControlDependenceGraph`] derives control dependence from
//!   post-dominance frontiers.
//! - [`enumerate_paths`] enumerates edge paths between node sets.
//!
//! Analyses that synthesize new edges ([`DominanceGraph`],
//! [`ControlDependenceGraph`]) take the arena mutably and tag each created
//! edge with the relation it represents.

mod control_dependence;
mod dominance;
mod entry_exit;
mod paths;
mod traversal;

pub use control_dependence::{ControlDependenceGraph, CONTROL_DEPENDENCE_TAG};
pub use dominance::{
    DominanceGraph, DOM_FRONTIER_TAG, IDOM_TAG, IPDOM_TAG, PDOM_FRONTIER_TAG,
};
pub use entry_exit::UniqueEntryExitGraph;
pub use paths::enumerate_paths;
pub use traversal::DepthFirstPreorder;
