use crate::{graph::*, Result};

/// Basic queries shared by every graph kind.
///
/// Vertices are dense: a graph with `vertex_size() == V` owns exactly the
/// vertices `VertexId(0)..VertexId(V)`.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn edge_size(&self) -> usize;

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn validate_vertex(&self, v: &VertexId) -> Result<()> {
        v.validate(self.vertex_size())
    }
}

/// Graphs which can enumerate the neighbors of a vertex.
///
/// This is the capability traversal algorithms depend on. It is implemented
/// by weighted graphs as well, by projecting edges onto their far endpoints.
pub trait AdjacentGraph: QueryableGraph {
    /// Neighbors of `v` in insertion order.
    ///
    /// `v` is not validated: an out-of-range vertex panics.
    /// Algorithms call this only after validating their inputs.
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Iterates over all edges, each exactly once, as `(source, sink)` pairs.
    fn iter_arcs(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_>;

    /// Neighbors of `v`, after validating `v`.
    fn adjacent(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.validate_vertex(v)?;
        Ok(self.neighbors(v))
    }

    /// Number of adjacency entries of `v`.
    ///
    /// A self-loop contributes 2 in undirected graphs and 1 in directed ones.
    fn degree(&self, v: &VertexId) -> Result<usize> {
        Ok(self.adjacent(v)?.count())
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Graphs whose edges are oriented.
pub trait DirectedGraph: AdjacentGraph + Sized {
    fn indegree(&self, v: &VertexId) -> Result<usize>;

    fn outdegree(&self, v: &VertexId) -> Result<usize> {
        self.degree(v)
    }

    /// A new graph with every edge flipped.
    fn reverse(&self) -> Self;
}

/// Graphs whose edges are not oriented.
pub trait UndirectedGraph: AdjacentGraph {}

/// Graphs which store weighted edge objects in their adjacency lists.
pub trait WeightedGraph: QueryableGraph {
    type Edge: WeightedEdge;

    /// Edges incident to (or leaving, for directed graphs) `v`, unchecked.
    fn edges_of(&self, v: &VertexId) -> Box<dyn Iterator<Item = &Self::Edge> + '_>;

    /// Iterates over all edges, each exactly once, in insertion order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Self::Edge> + '_>;

    fn adjacent_edges(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = &Self::Edge> + '_>> {
        self.validate_vertex(v)?;
        Ok(self.edges_of(v))
    }
}

/// Unweighted graphs under construction.
pub trait GrowableGraph: QueryableGraph + Sized {
    /// A graph with `vertex_size` vertices and no edges.
    fn new(vertex_size: usize) -> Self;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId>;

    /// Adds edges in the given order.
    fn from_edges<I>(vertex_size: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut res = Self::new(vertex_size);
        for (v, w) in edges {
            res.add_edge(v, w)?;
        }
        Ok(res)
    }
}

/// Weighted graphs under construction.
pub trait GrowableWeightedGraph: WeightedGraph + Sized {
    fn new(vertex_size: usize) -> Self;
    fn add_edge(&mut self, edge: Self::Edge) -> Result<EdgeId>;

    fn from_edges<I>(vertex_size: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self::Edge>,
    {
        let mut res = Self::new(vertex_size);
        for e in edges {
            res.add_edge(e)?;
        }
        Ok(res)
    }
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
