use crate::graph::{DirectedEdge, Edge, VertexId};
use thiserror::Error;

/// Errors raised by graph construction and by algorithm queries.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {} is not in 0..{vertex_size}", vertex.to_raw())]
    InvalidVertex {
        vertex: VertexId,
        vertex_size: usize,
    },

    #[error("edge {edge} has a negative weight")]
    NegativeWeight { edge: DirectedEdge },

    #[error("digraph is not acyclic")]
    NotADag,

    #[error("a negative cycle is reachable from the source")]
    NegativeCycle,

    #[error("vertex {} is not an endpoint of edge {edge}", vertex.to_raw())]
    IllegalEndpoint { vertex: VertexId, edge: Edge },

    #[error("edge weight is NaN")]
    NanWeight,

    #[error("malformed edge list: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
