//! Graph algorithms over dense-indexed graphs.
//!
//! Vertices are lightweight [`VertexId`](graph::VertexId)'s numbered `0..V`.
//! Graphs are built once by appending edges and are then handed, read-only,
//! to algorithms. Every algorithm runs to completion inside its constructor
//! and keeps its own scratch arrays, so the same graph can back any number of
//! analyses at once.
//!
//! ```rust
//! use graphwalk::{algorithm::*, graph::*};
//!
//! let mut g = EdgeWeightedDigraph::new(3);
//! g.add_edge(DirectedEdge::new(VertexId(0), VertexId(1), 0.5)).unwrap();
//! g.add_edge(DirectedEdge::new(VertexId(1), VertexId(2), 0.25)).unwrap();
//! g.add_edge(DirectedEdge::new(VertexId(0), VertexId(2), 1.0)).unwrap();
//!
//! let sp = DijkstraSp::new(&g, VertexId(0)).unwrap();
//! assert_eq!(sp.dist_to(&VertexId(2)).unwrap(), 0.75);
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;

#[cfg(test)]
pub(crate) mod testing;
