use super::{EdgeQueue, MinimumSpanningForest};
use crate::graph::*;
use petgraph::unionfind::UnionFind;

/// Kruskal's algorithm: accept edges in ascending weight order unless they
/// would close a cycle, tracked with a union-find.
pub struct KruskalMst {
    mst: Vec<Edge>,
}

impl KruskalMst {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph + WeightedGraph<Edge = Edge>,
    {
        let n = graph.vertex_size();
        let mut queue: EdgeQueue = graph.iter_edges().copied().collect();
        let mut uf = UnionFind::<usize>::new(n);
        let mut mst = vec![];
        while mst.len() < n.saturating_sub(1) {
            let Some(e) = queue.pop() else {
                break;
            };
            let (v, w) = e.endpoints();
            if uf.union(v.to_raw(), w.to_raw()) {
                mst.push(e);
            }
        }
        let res = Self { mst };
        log::debug!(
            "kruskal: {} edges, weight {:.5}",
            res.mst.len(),
            res.weight()
        );
        res
    }
}

impl MinimumSpanningForest for KruskalMst {
    /// Edges in ascending weight order.
    fn edges(&self) -> &[Edge] {
        &self.mst
    }
}
