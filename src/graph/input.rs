//! Reading graphs from whitespace-separated edge lists.
//!
//! The format is the vertex count, the edge count, and then one
//! `v w` pair (or `v w weight` triple for weighted graphs) per edge.
//! Line breaks carry no meaning.
//!
//! ```text
//! 3
//! 2
//! 0 1 0.5
//! 1 2 0.25
//! ```
use crate::{graph::*, GraphError, Result};
use std::io::{BufRead, Read};

/// Weighted edges which can be built from a parsed triple.
pub trait FromTriple: WeightedEdge {
    fn from_triple(v: VertexId, w: VertexId, weight: f64) -> Self;
}

impl FromTriple for Edge {
    fn from_triple(v: VertexId, w: VertexId, weight: f64) -> Self {
        Edge::new(v, w, weight)
    }
}

impl FromTriple for DirectedEdge {
    fn from_triple(v: VertexId, w: VertexId, weight: f64) -> Self {
        DirectedEdge::new(v, w, weight)
    }
}

/// Reads an unweighted graph, adding edges in input order.
pub fn read_graph<G, R>(reader: R) -> Result<G>
where
    G: GrowableGraph,
    R: BufRead,
{
    let text = read_all(reader)?;
    let mut tokens = Tokens::new(&text);
    let vertex_size = tokens.next_vertex_count()?;
    let edge_size = tokens.next_usize("edge count")?;
    let mut res = G::new(vertex_size);
    for _ in 0..edge_size {
        let v = tokens.next_usize("edge endpoint")?;
        let w = tokens.next_usize("edge endpoint")?;
        res.add_edge(VertexId::new(v), VertexId::new(w))?;
    }
    Ok(res)
}

/// Reads a weighted graph, adding edges in input order.
pub fn read_weighted_graph<G, R>(reader: R) -> Result<G>
where
    G: GrowableWeightedGraph,
    G::Edge: FromTriple,
    R: BufRead,
{
    let text = read_all(reader)?;
    let mut tokens = Tokens::new(&text);
    let vertex_size = tokens.next_vertex_count()?;
    let edge_size = tokens.next_usize("edge count")?;
    let mut res = G::new(vertex_size);
    for _ in 0..edge_size {
        let v = tokens.next_usize("edge endpoint")?;
        let w = tokens.next_usize("edge endpoint")?;
        let weight = tokens.next_f64("edge weight")?;
        res.add_edge(G::Edge::from_triple(
            VertexId::new(v),
            VertexId::new(w),
            weight,
        ))?;
    }
    Ok(res)
}

fn read_all<R: BufRead>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| GraphError::Parse(format!("missing {}", what)))
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let tok = self.next_token(what)?;
        tok.parse()
            .map_err(|_| GraphError::Parse(format!("bad {}: {:?}", what, tok)))
    }

    /// The vertex count, refused up front when its adjacency lists could
    /// never be allocated.
    fn next_vertex_count(&mut self) -> Result<usize> {
        let vertex_size = self.next_usize("vertex count")?;
        let mut lists: Vec<Vec<VertexId>> = Vec::new();
        lists.try_reserve_exact(vertex_size).map_err(|_| {
            GraphError::Parse(format!("vertex count too large: {}", vertex_size))
        })?;
        Ok(vertex_size)
    }

    fn next_f64(&mut self, what: &str) -> Result<f64> {
        let tok = self.next_token(what)?;
        tok.parse()
            .map_err(|_| GraphError::Parse(format!("bad {}: {:?}", what, tok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn reads_tiny_ewd() {
        let g: EdgeWeightedDigraph = read_weighted_graph(TINY_EWD.as_bytes()).unwrap();
        assert_eq!(g.vertex_size(), 8);
        assert_eq!(g.edge_size(), 15);
        let first = g.iter_edges().next().unwrap();
        assert_eq!(*first, DirectedEdge::new(VertexId(4), VertexId(5), 0.35));
    }

    #[test]
    fn reads_tiny_g() {
        let g: Graph = read_graph(TINY_G.as_bytes()).unwrap();
        assert_eq!(g.vertex_size(), 13);
        assert_eq!(g.edge_size(), 13);
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(
            read_graph::<Digraph, _>("3\n2\n0 1\n".as_bytes()),
            Err(GraphError::Parse(_))
        ));
        assert!(matches!(
            read_graph::<Digraph, _>("3\nx\n".as_bytes()),
            Err(GraphError::Parse(_))
        ));
        assert!(matches!(
            read_graph::<Digraph, _>("3\n1\n0 3\n".as_bytes()),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            read_weighted_graph::<EdgeWeightedGraph, _>("2\n1\n0 1 heavy\n".as_bytes()),
            Err(GraphError::Parse(_))
        ));
    }

    #[test]
    fn unallocatable_vertex_count() {
        let text = "18446744073709551615\n0\n";
        assert!(matches!(
            read_graph::<Graph, _>(text.as_bytes()),
            Err(GraphError::Parse(_))
        ));
        assert!(matches!(
            read_weighted_graph::<EdgeWeightedDigraph, _>(text.as_bytes()),
            Err(GraphError::Parse(_))
        ));
    }
}
