use super::{walk::*, DepthFirstOrder};
use crate::{graph::*, Result};

/// Strongly connected components by the Kosaraju-Sharir algorithm.
///
/// A depth-first search over the original digraph, restarted at unmarked
/// vertices in reverse postorder of the reversed digraph, spans exactly one
/// strong component per restart.
pub struct KosarajuSharirScc {
    id: Vec<usize>,
    count: usize,
}

impl KosarajuSharirScc {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedGraph,
    {
        let order = DepthFirstOrder::new(&graph.reverse());
        let mut id = vec![0; graph.vertex_size()];
        let mut count = 0;
        let mut walk = DepthFirstWalk::new(graph);
        for root in order.reverse_postorder() {
            if !walk.start(root) {
                continue;
            }
            for event in walk.by_ref() {
                if let DfsEvent::Discover { vertex, .. } = event {
                    id[vertex.to_raw()] = count;
                }
            }
            count += 1;
        }
        log::debug!("{} strong components over {} vertices", count, id.len());
        Self { id, count }
    }

    /// Number of strong components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component of `v`, in `0..count()`.
    pub fn id(&self, v: &VertexId) -> Result<usize> {
        v.validate(self.id.len())?;
        Ok(self.id[v.to_raw()])
    }

    pub fn strongly_connected(&self, v: &VertexId, w: &VertexId) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Vertices grouped by component id.
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut res = vec![vec![]; self.count];
        for (v, id) in self.id.iter().enumerate() {
            res[*id].push(VertexId::new(v));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::TransitiveClosure, testing::*};
    use quickcheck_macros::quickcheck;

    #[test]
    fn tiny_dg_components() {
        let g = tiny_dg();
        let scc = KosarajuSharirScc::new(&g);
        assert_eq!(scc.count(), 5);
        let mut trial: Vec<Vec<usize>> = scc
            .components()
            .into_iter()
            .map(|c| c.into_iter().map(|v| v.to_raw()).collect())
            .collect();
        trial.sort();
        assert_eq!(
            trial,
            vec![
                vec![0, 2, 3, 4, 5],
                vec![1],
                vec![6, 8],
                vec![7],
                vec![9, 10, 11, 12],
            ]
        );
        assert!(scc.strongly_connected(&VertexId(9), &VertexId(12)).unwrap());
        assert!(!scc.strongly_connected(&VertexId(6), &VertexId(7)).unwrap());
        assert!(scc.id(&VertexId(13)).is_err());
        assert!(scc
            .strongly_connected(&VertexId(0), &VertexId(13))
            .is_err());
    }

    #[test]
    fn sink_components_come_first() {
        let g = tiny_dg();
        let scc = KosarajuSharirScc::new(&g);
        assert_eq!(scc.id(&VertexId(1)).unwrap(), 0);
    }

    #[quickcheck]
    fn mutual_reachability(edges: ArbitraryEdges) {
        let g = edges.digraph();
        let scc = KosarajuSharirScc::new(&g);
        let closure = TransitiveClosure::new(&g);
        for v in g.iter_vertices() {
            for w in g.iter_vertices() {
                let oracle =
                    closure.reachable(&v, &w).unwrap() && closure.reachable(&w, &v).unwrap();
                assert_eq!(scc.strongly_connected(&v, &w).unwrap(), oracle);
            }
        }
    }

    #[quickcheck]
    fn count_matches_petgraph(edges: ArbitraryEdges) {
        let scc = KosarajuSharirScc::new(&edges.digraph());
        let oracle = petgraph::algo::kosaraju_scc(&edges.petgraph_digraph());
        assert_eq!(scc.count(), oracle.len());
    }
}
