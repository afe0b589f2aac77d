use super::{far_end, MinimumSpanningForest};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Prim's algorithm keeping only the best known edge per non-tree vertex.
///
/// Non-tree vertices sit in an indexed queue keyed by the weight of their
/// cheapest edge into the tree, and are decreased in place as better edges
/// turn up.
pub struct PrimMst {
    mst: Vec<Edge>,
}

impl PrimMst {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph + WeightedGraph<Edge = Edge>,
    {
        let n = graph.vertex_size();
        let mut edge_to: Vec<Option<Edge>> = vec![None; n];
        let mut marked = vec![false; n];
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<OrderedFloat<f64>>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for root in graph.iter_vertices() {
            if marked[root.to_raw()] {
                continue;
            }
            queue.push(root, Reverse(OrderedFloat(0.0)));
            while let Some((v, _)) = queue.pop() {
                marked[v.to_raw()] = true;
                for e in graph.edges_of(&v) {
                    let w = far_end(e, v);
                    let best = edge_to[w.to_raw()];
                    if marked[w.to_raw()] || best.is_some_and(|b| e.weight() >= b.weight()) {
                        continue;
                    }
                    edge_to[w.to_raw()] = Some(*e);
                    let priority = Reverse(OrderedFloat(e.weight()));
                    if queue.set_priority(&w, priority).is_err() {
                        queue.push(w, priority);
                    }
                }
            }
        }
        let res = Self {
            mst: edge_to.into_iter().flatten().collect(),
        };
        log::debug!(
            "eager prim: {} edges, weight {:.5}",
            res.mst.len(),
            res.weight()
        );
        res
    }
}

impl MinimumSpanningForest for PrimMst {
    /// Edges by the vertex they connect to the tree, in vertex order.
    fn edges(&self) -> &[Edge] {
        &self.mst
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, KruskalMst, LazyPrimMst},
        *,
    };
    use crate::testing::*;

    #[test]
    fn tiny_ewg_tree_edges() {
        let mst = PrimMst::new(&tiny_ewg());
        let trial: Vec<_> = mst.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            trial,
            vec![
                "1-7 0.19000",
                "0-2 0.26000",
                "2-3 0.17000",
                "4-5 0.35000",
                "5-7 0.28000",
                "6-2 0.40000",
                "0-7 0.16000",
            ]
        );
        assert_eq!(sorted_pairs(mst.edges()), TINY_EWG_MST.to_vec());
    }

    #[test]
    fn infinite_bridge_joins_the_tree() {
        let g = EdgeWeightedGraph::from_edges(
            3,
            [
                Edge::new(VertexId(0), VertexId(1), 1.0),
                Edge::new(VertexId(1), VertexId(2), f64::INFINITY),
            ],
        )
        .unwrap();
        let eager = PrimMst::new(&g);
        assert_eq!(eager.edges().len(), 2);
        assert_eq!(eager.weight(), f64::INFINITY);
        assert_eq!(eager.weight(), LazyPrimMst::new(&g).weight());
        assert_eq!(eager.weight(), KruskalMst::new(&g).weight());
    }

    #[test]
    fn parallel_edges_keep_the_cheaper() {
        let g = EdgeWeightedGraph::from_edges(
            2,
            [
                Edge::new(VertexId(0), VertexId(1), 3.0),
                Edge::new(VertexId(1), VertexId(0), 1.0),
            ],
        )
        .unwrap();
        let mst = PrimMst::new(&g);
        assert_eq!(mst.edges().len(), 1);
        assert_eq!(mst.weight(), 1.0);
    }
}
