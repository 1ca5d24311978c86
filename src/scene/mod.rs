//! Scene-graph data model.
//!
//! This module is the in-process stand-in for the host rendering library:
//! the node tree the synchronizer writes into, with no drawing attached.
//!
//! Submodules overview:
//! - [`color`] – RGB color value type with hex/string constructors
//! - [`graph`] – slotmap arena of nodes with parent/child links and an owned root
//! - [`node`] – node data and the [`NodeKind`](node::NodeKind) subtype enumeration
//! - [`prefab`] – node specifications (prebuilt node or kind + property map)
//! - [`props`] – lenient dotted-path property application

pub mod color;
pub mod graph;
pub mod node;
pub mod prefab;
pub mod props;
