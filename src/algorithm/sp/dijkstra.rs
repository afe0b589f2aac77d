use super::{check_nonnegative, ShortestPathTree, ShortestPaths};
use crate::{graph::*, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Dijkstra's algorithm over non-negative edge weights.
///
/// Vertices wait in an indexed min-queue keyed by their tentative distance,
/// which is decreased in place whenever a relaxation improves it.
#[derive(Debug, Clone)]
pub struct DijkstraSp {
    tree: ShortestPathTree,
}

impl DijkstraSp {
    /// Fails with `NegativeWeight` if any edge of `graph` is negative, and
    /// with `InvalidVertex` if `source` is out of range.
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: WeightedGraph<Edge = DirectedEdge>,
    {
        check_nonnegative(graph)?;
        graph.validate_vertex(&source)?;
        let n = graph.vertex_size();
        let mut tree = ShortestPathTree::new(n, source, f64::INFINITY);
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<OrderedFloat<f64>>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        queue.push(source, Reverse(OrderedFloat(0.0)));
        while let Some((v, _)) = queue.pop() {
            for e in graph.edges_of(&v) {
                if !tree.relax(e) {
                    continue;
                }
                let w = e.to();
                let priority = Reverse(OrderedFloat(tree.raw_dist(&w)));
                if queue.set_priority(&w, priority).is_err() {
                    queue.push(w, priority);
                }
            }
        }
        log::debug!(
            "dijkstra from {}: {} vertices reached",
            source,
            tree.parent_edges().count() + 1
        );
        Ok(Self { tree })
    }
}

impl ShortestPaths for DijkstraSp {
    fn tree(&self) -> Result<&ShortestPathTree> {
        Ok(&self.tree)
    }
}

/// Shortest paths between every pair of vertices, one Dijkstra run per
/// source.
pub struct DijkstraAllPairs {
    all: Vec<DijkstraSp>,
}

impl DijkstraAllPairs {
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: WeightedGraph<Edge = DirectedEdge>,
    {
        let all = graph
            .iter_vertices()
            .map(|s| DijkstraSp::new(graph, s))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { all })
    }

    fn from_source(&self, s: &VertexId) -> Result<&DijkstraSp> {
        s.validate(self.all.len())?;
        Ok(&self.all[s.to_raw()])
    }

    pub fn dist(&self, s: &VertexId, t: &VertexId) -> Result<f64> {
        self.from_source(s)?.dist_to(t)
    }

    pub fn path(&self, s: &VertexId, t: &VertexId) -> Result<Option<Vec<DirectedEdge>>> {
        self.from_source(s)?.path_to(t)
    }
}
