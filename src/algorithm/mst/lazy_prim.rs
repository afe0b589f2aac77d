use super::{far_end, EdgeQueue, MinimumSpanningForest};
use crate::graph::*;

/// Prim's algorithm with lazy deletion.
///
/// The queue holds every edge leaving the tree found so far, including stale
/// ones whose both endpoints have since joined the tree. Those are skipped
/// when popped.
pub struct LazyPrimMst {
    mst: Vec<Edge>,
}

impl LazyPrimMst {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph + WeightedGraph<Edge = Edge>,
    {
        let mut marked = vec![false; graph.vertex_size()];
        let mut queue = EdgeQueue::new();
        let mut mst = vec![];
        for root in graph.iter_vertices() {
            if marked[root.to_raw()] {
                continue;
            }
            visit(graph, &mut marked, &mut queue, root);
            while let Some(e) = queue.pop() {
                let (v, w) = e.endpoints();
                if marked[v.to_raw()] && marked[w.to_raw()] {
                    continue;
                }
                mst.push(e);
                for x in [v, w] {
                    if !marked[x.to_raw()] {
                        visit(graph, &mut marked, &mut queue, x);
                    }
                }
            }
        }
        let res = Self { mst };
        log::debug!(
            "lazy prim: {} edges, weight {:.5}",
            res.mst.len(),
            res.weight()
        );
        res
    }
}

fn visit<G>(graph: &G, marked: &mut [bool], queue: &mut EdgeQueue, v: VertexId)
where
    G: WeightedGraph<Edge = Edge>,
{
    marked[v.to_raw()] = true;
    for e in graph.edges_of(&v) {
        if !marked[far_end(e, v).to_raw()] {
            queue.push(*e);
        }
    }
}

impl MinimumSpanningForest for LazyPrimMst {
    fn edges(&self) -> &[Edge] {
        &self.mst
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::testing::*;

    #[test]
    fn tiny_ewg_acceptance_order() {
        let mst = LazyPrimMst::new(&tiny_ewg());
        let trial: Vec<_> = mst.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            trial,
            vec![
                "0-7 0.16000",
                "1-7 0.19000",
                "0-2 0.26000",
                "2-3 0.17000",
                "5-7 0.28000",
                "4-5 0.35000",
                "6-2 0.40000",
            ]
        );
        assert_eq!(sorted_pairs(mst.edges()), TINY_EWG_MST.to_vec());
    }

    #[test]
    fn forest_over_components() {
        let g = EdgeWeightedGraph::from_edges(
            5,
            [
                Edge::new(VertexId(0), VertexId(1), 1.0),
                Edge::new(VertexId(3), VertexId(4), 2.0),
                Edge::new(VertexId(4), VertexId(4), 0.5),
            ],
        )
        .unwrap();
        let mst = LazyPrimMst::new(&g);
        assert_eq!(mst.edges().len(), 2);
        assert_eq!(mst.weight(), 3.0);
    }
}
