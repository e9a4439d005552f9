//! # propgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits from the propgraph library. Import this module to get quick
//! access to the essential types for building and analyzing property graphs.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all propgraph operations
pub use crate::Error;

/// The result type used throughout propgraph
pub use crate::Result;

// ================================================================================================
// Element Model
// ================================================================================================

/// Element creation and data storage
pub use crate::graph::Arena;

/// Element identity and handles
pub use crate::graph::{Address, Edge, Element, GraphElement, Node};

/// Attribute values attachable to elements
pub use crate::graph::AttrValue;

// ================================================================================================
// Sets and Graphs
// ================================================================================================

/// Identity-keyed element sets
pub use crate::graph::{EdgeSet, ElementSet, NodeSet};

/// Graph flavors and the shared operator suite
pub use crate::graph::{Graph, GraphOps, PropertyGraph, SchemaGraph};

/// DOT rendering for visualization
pub use crate::graph::to_dot;

// ================================================================================================
// Analysis Algorithms
// ================================================================================================

/// Validated single-entry/single-exit views
pub use crate::algorithms::UniqueEntryExitGraph;

/// Cycle-safe depth-first traversal
pub use crate::algorithms::DepthFirstPreorder;

/// Dominance and post-dominance analysis
pub use crate::algorithms::DominanceGraph;

/// Control-dependence analysis
pub use crate::algorithms::ControlDependenceGraph;

/// Path enumeration between node sets
pub use crate::algorithms::enumerate_paths;
