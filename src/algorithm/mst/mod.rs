//! Minimum spanning forests of edge-weighted graphs.
//!
//! On a disconnected graph every algorithm here grows one tree per
//! component, so the result is a minimum spanning forest with
//! `V - components` edges.
use crate::graph::*;
use ordered_float::OrderedFloat;
use std::{cmp::Reverse, collections::BinaryHeap};

mod kruskal;
pub use self::kruskal::*;
mod lazy_prim;
pub use self::lazy_prim::*;
mod prim;
pub use self::prim::*;

/// Common queries on a computed spanning forest.
pub trait MinimumSpanningForest {
    /// Edges of the forest, in the order they were accepted.
    fn edges(&self) -> &[Edge];

    /// Sum of the accepted edge weights.
    fn weight(&self) -> f64 {
        self.edges().iter().map(|e| e.weight()).sum()
    }
}

/// Min-queue of edges by weight. Equal weights pop in insertion order.
pub(crate) struct EdgeQueue {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
    edges: Vec<Edge>,
}

impl EdgeQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            edges: vec![],
        }
    }

    pub fn push(&mut self, edge: Edge) {
        self.heap
            .push(Reverse((OrderedFloat(edge.weight()), self.edges.len())));
        self.edges.push(edge);
    }

    pub fn pop(&mut self) -> Option<Edge> {
        let Reverse((_, seq)) = self.heap.pop()?;
        Some(self.edges[seq])
    }
}

impl FromIterator<Edge> for EdgeQueue {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut res = Self::new();
        for e in iter {
            res.push(e);
        }
        res
    }
}

/// The endpoint of `edge` which is not `v`. `v` must be an endpoint.
pub(crate) fn far_end(edge: &Edge, v: VertexId) -> VertexId {
    let (a, b) = edge.endpoints();
    if a == v {
        b
    } else {
        a
    }
}
