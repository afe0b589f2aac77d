use super::{DepthFirstOrder, DirectedCycle};
use crate::{graph::*, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Topological order of a digraph, if it is acyclic.
///
/// The order is the reverse postorder of a full depth-first search, so for
/// every edge `v -> w`, `rank(v) < rank(w)`.
pub struct Topological {
    order: Option<Vec<VertexId>>,
    rank: Vec<Option<usize>>,
}

impl Topological {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedGraph,
    {
        let mut rank = vec![None; graph.vertex_size()];
        let order = if DirectedCycle::new(graph).has_cycle() {
            None
        } else {
            let order: Vec<_> = DepthFirstOrder::new(graph).reverse_postorder().collect();
            for (i, v) in order.iter().enumerate() {
                rank[v.to_raw()] = Some(i);
            }
            Some(order)
        };
        Self { order, rank }
    }

    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn is_dag(&self) -> bool {
        self.has_order()
    }

    pub fn order(&self) -> Option<&[VertexId]> {
        self.order.as_deref()
    }

    /// Position of `v` in the order, or `None` if the digraph is cyclic.
    pub fn rank(&self, v: &VertexId) -> Result<Option<usize>> {
        v.validate(self.rank.len())?;
        Ok(self.rank[v.to_raw()])
    }
}

pub trait TopologicalSort
where
    Self: DirectedGraph,
{
    fn topological(&self) -> Topological {
        Topological::new(self)
    }

    /// Vertices in a topological order computed by repeatedly removing a
    /// vertex without incoming edges.
    ///
    /// The iteration stops early if the remaining vertices all lie on or
    /// behind cycles.
    fn kahn_toposort(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(KahnIter::new(self))
    }

    /// A complete topological order, or `None` if the digraph is cyclic.
    fn kahn_order(&self) -> Option<Vec<VertexId>> {
        let order: Vec<_> = self.kahn_toposort().collect();
        if order.len() == self.vertex_size() {
            Some(order)
        } else {
            None
        }
    }
}

impl<G: DirectedGraph> TopologicalSort for G {}

struct KahnIter<'a, G>
where
    G: DirectedGraph,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<VertexId, Reverse<usize>, RandomState>,
}

impl<'a, G> Iterator for KahnIter<'a, G>
where
    G: DirectedGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let (vert, in_degree) = self.degree_queue.pop()?;
        if in_degree.0 > 0 {
            return None;
        }
        for w in self.graph.neighbors(&vert) {
            // w still waits on vert, so it has not been popped yet
            if let Some(&Reverse(in_degree)) = self.degree_queue.get_priority(&w) {
                let updated = self.degree_queue.set_priority(&w, Reverse(in_degree - 1));
                debug_assert!(updated.is_ok());
            }
        }
        Some(vert)
    }
}

impl<'a, G> KahnIter<'a, G>
where
    G: DirectedGraph,
{
    fn new(graph: &'a G) -> Self {
        let mut res = Self {
            graph,
            degree_queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
        };
        for v in graph.iter_vertices() {
            let in_degree = graph.indegree(&v).unwrap_or_default();
            res.degree_queue.push(v, Reverse(in_degree));
        }
        res
    }
}
