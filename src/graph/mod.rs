//! Traits and implementations for directed and undirected graphs.
//!
//! # Dense vertices
//!
//! Vertices are lightweight [VertexId]'s numbered `0..V`, fixed when a
//! graph is created. Edges are appended afterwards and never removed.
//! Every operation taking a vertex validates it and fails with
//! [GraphError::InvalidVertex](crate::GraphError::InvalidVertex) when it is
//! out of range.
//!
//! # Graph kinds
//!
//! |                       | unweighted                       | weighted                                 |
//! | --------------------- | -------------------------------- | ---------------------------------------- |
//! | undirected            | [undirected::AdjacentListGraph]  | [undirected::WeightedAdjacentListGraph]  |
//! | directed              | [directed::AdjacentListGraph]    | [directed::WeightedAdjacentListGraph]    |
//!
//! They are also known by their short names [Graph], [Digraph],
//! [EdgeWeightedGraph] and [EdgeWeightedDigraph].
//!
//! Algorithms depend on capabilities rather than kinds: [AdjacentGraph] for
//! anything that walks neighbors, [DirectedGraph] for orientation-aware
//! analyses, and [WeightedGraph] for spanning trees and shortest paths.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod symbol_graph;
pub use self::symbol_graph::*;
pub mod input;

pub mod directed;
pub mod undirected;

pub type Graph = undirected::AdjacentListGraph;
pub type Digraph = directed::AdjacentListGraph;
pub type EdgeWeightedGraph = undirected::WeightedAdjacentListGraph;
pub type EdgeWeightedDigraph = directed::WeightedAdjacentListGraph;
