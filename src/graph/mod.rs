//! Graph element model, identity-keyed sets, and the set-algebraic core.
//!
//! # Architecture
//!
//! The model separates identity from data:
//!
//! - [`Arena`] creates elements and owns their names, tags, and attributes.
//! - [`Node`], [`Edge`], and [`GraphElement`] are `Copy` handles identified by
//!   [`Address`]; they can be shared between any number of sets and graphs.
//! - [`ElementSet`] keys membership on addresses and iterates in insertion
//!   order, making every derived result deterministic.
//! - [`GraphOps`] defines the operator suite — step and closure traversal,
//!   union, intersection, difference, `between`, `induce` — once, for every
//!   graph flavor.
//!
//! Three graph flavors build on this core: the plain [`Graph`], the
//! tag-hierarchy [`SchemaGraph`], and the schema-coupled [`PropertyGraph`]
//! whose tag queries honor inheritance.

mod arena;
mod base;
mod dot;
mod element;
mod property;
mod schema;
mod set;

pub use arena::{Arena, AttrValue};
pub use base::{Graph, GraphOps};
pub use dot::to_dot;
pub use element::{Address, Edge, Element, GraphElement, Node};
pub use property::PropertyGraph;
pub use schema::{SchemaGraph, CONTAINS_TAG};
pub use set::{EdgeSet, ElementSet, NodeSet};
