// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # propgraph
//!
//! An in-memory property-graph engine: a mutable node/edge store with
//! set-algebraic query operators, a schema-driven tag-inheritance model, and
//! graph-analysis algorithms (dominator trees, control dependence, path
//! enumeration) for reasoning about directed graphs such as control-flow
//! graphs.
//!
//! ## Features
//!
//! - **Identity-based elements** - Nodes and edges are cheap `Copy` handles
//!   identified by arena-assigned addresses, freely shared across graphs
//! - **Set-algebraic operators** - Union, intersection, closure-preserving
//!   difference, `between`, `induce`, and step/transitive traversal on every
//!   graph flavor
//! - **Tag inheritance** - Schema graphs declare tag hierarchies; property
//!   graph queries for a tag match all of its schema descendants
//! - **Dominance analysis** - Lengauer-Tarjan dominator trees and dominance
//!   frontiers, forward and inverted (post-dominance)
//! - **Control dependence** - Derived from post-dominance frontiers as a
//!   tagged edge graph
//! - **Deterministic iteration** - All sets iterate in insertion order, so
//!   results and DOT renderings are stable
//!
//! ## Quick Start
//!
//! ```rust
//! use propgraph::prelude::*;
//!
//! // Elements are created by an arena and carry names, tags, attributes.
//! let mut arena = Arena::new();
//! let a = arena.node_named("a");
//! let b = arena.node_named("b");
//! let c = arena.node_named("c");
//!
//! let mut graph = Graph::new();
//! graph.add_edge(arena.edge(a, b));
//! graph.add_edge(arena.edge(b, c));
//!
//! // Set-algebraic traversal.
//! let origin: NodeSet = [a].into_iter().collect();
//! let reachable = graph.forward(&origin);
//! assert_eq!(reachable.nodes().len(), 3);
//!
//! // Dominance analysis over a validated entry/exit view.
//! let view = UniqueEntryExitGraph::new(&graph, a, c)?;
//! let dom = DominanceGraph::new(&mut arena, &view, false);
//! assert_eq!(dom.immediate_dominator(c), Some(b));
//! # Ok::<(), propgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized in two layers:
//!
//! - [`graph`] - the element model ([`graph::Arena`], address-identified
//!   handles), identity-keyed sets, the [`graph::GraphOps`] operator suite,
//!   and the three graph flavors ([`graph::Graph`], [`graph::SchemaGraph`],
//!   [`graph::PropertyGraph`])
//! - [`algorithms`] - analyses built on the algebra: entry/exit validation,
//!   depth-first traversal, dominance, control dependence, and path
//!   enumeration
//!
//! Analysis results are themselves graphs whose synthesized edges carry tags
//! naming their relation (`idom`, `dom-frontier`, `control-dependence`, ...),
//! so they compose with the same algebra as any other graph.

pub mod algorithms;
pub mod graph;
pub mod prelude;

mod error;

pub use error::{Error, Result};

pub use crate::algorithms::{
    enumerate_paths, ControlDependenceGraph, DepthFirstPreorder, DominanceGraph,
    UniqueEntryExitGraph,
};
pub use crate::graph::{
    Address, Arena, AttrValue, Edge, EdgeSet, Element, ElementSet, Graph, GraphElement, GraphOps,
    Node, NodeSet, PropertyGraph, SchemaGraph,
};
