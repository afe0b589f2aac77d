use super::{ShortestPathTree, ShortestPaths};
use crate::{algorithm::Topological, graph::*, GraphError, Result};

/// Shortest paths in an edge-weighted DAG, negative weights allowed.
///
/// Vertices are relaxed once each, in topological order.
#[derive(Debug, Clone)]
pub struct AcyclicSp {
    tree: ShortestPathTree,
}

impl AcyclicSp {
    /// Fails with `NotADag` if `graph` has a directed cycle.
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: DirectedGraph + WeightedGraph<Edge = DirectedEdge>,
    {
        let tree = relax_in_order(graph, source, f64::INFINITY, ShortestPathTree::relax)?;
        log::debug!("acyclic shortest paths from {}", source);
        Ok(Self { tree })
    }
}

impl ShortestPaths for AcyclicSp {
    fn tree(&self) -> Result<&ShortestPathTree> {
        Ok(&self.tree)
    }
}

/// Longest paths in an edge-weighted DAG.
///
/// Unreached vertices are at `NEG_INFINITY`.
#[derive(Debug, Clone)]
pub struct AcyclicLp {
    tree: ShortestPathTree,
}

impl AcyclicLp {
    /// Fails with `NotADag` if `graph` has a directed cycle.
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: DirectedGraph + WeightedGraph<Edge = DirectedEdge>,
    {
        let tree = relax_in_order(
            graph,
            source,
            f64::NEG_INFINITY,
            ShortestPathTree::relax_longer,
        )?;
        log::debug!("acyclic longest paths from {}", source);
        Ok(Self { tree })
    }
}

impl ShortestPaths for AcyclicLp {
    fn tree(&self) -> Result<&ShortestPathTree> {
        Ok(&self.tree)
    }
}

fn relax_in_order<G>(
    graph: &G,
    source: VertexId,
    unreached: f64,
    relax: fn(&mut ShortestPathTree, &DirectedEdge) -> bool,
) -> Result<ShortestPathTree>
where
    G: DirectedGraph + WeightedGraph<Edge = DirectedEdge>,
{
    graph.validate_vertex(&source)?;
    let topological = Topological::new(graph);
    let order = topological.order().ok_or(GraphError::NotADag)?;
    let mut tree = ShortestPathTree::new(graph.vertex_size(), source, unreached);
    for v in order {
        if tree.raw_dist(v) == unreached {
            continue;
        }
        for e in graph.edges_of(v) {
            relax(&mut tree, e);
        }
    }
    Ok(tree)
}
