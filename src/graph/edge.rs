use super::VertexId;
use crate::{GraphError, Result};

/// ID for edges, which are essentially `usize`.
///
/// An edge's ID is the order in which it was added to its graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// Common view of weighted edges, directed or not.
pub trait WeightedEdge: Copy + std::fmt::Debug {
    /// Both endpoints; `(from, to)` for directed edges.
    fn endpoints(&self) -> (VertexId, VertexId);
    fn weight(&self) -> f64;
}

/// A weighted undirected edge `{v, w}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    v: VertexId,
    w: VertexId,
    weight: f64,
}

impl Edge {
    pub fn new(v: VertexId, w: VertexId, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// Either endpoint of this edge.
    pub fn either(&self) -> VertexId {
        self.v
    }

    /// The endpoint which is not `vertex`.
    pub fn other(&self, vertex: &VertexId) -> Result<VertexId> {
        if *vertex == self.v {
            Ok(self.w)
        } else if *vertex == self.w {
            Ok(self.v)
        } else {
            Err(GraphError::IllegalEndpoint {
                vertex: *vertex,
                edge: *self,
            })
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl WeightedEdge for Edge {
    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.v, self.w)
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// A weighted directed edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    from: VertexId,
    to: VertexId,
    weight: f64,
}

impl DirectedEdge {
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl WeightedEdge for DirectedEdge {
    fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl std::fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, self.weight)
    }
}
