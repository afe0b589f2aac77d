use super::{ShortestPathTree, ShortestPaths};
use crate::{algorithm::EdgeWeightedDirectedCycle, graph::*, GraphError, Result};
use std::collections::VecDeque;

/// Queue-based Bellman-Ford, tolerating negative weights.
///
/// Only vertices whose distance changed in the previous pass are queued.
/// After every `V` edge relaxations the parent edges are checked for a cycle,
/// which can only be a negative one. Once found, the search stops and every
/// distance query fails with [GraphError::NegativeCycle].
#[derive(Debug, Clone)]
pub struct BellmanFordSp {
    tree: ShortestPathTree,
    cycle: Option<Vec<DirectedEdge>>,
}

impl BellmanFordSp {
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: WeightedGraph<Edge = DirectedEdge>,
    {
        graph.validate_vertex(&source)?;
        let n = graph.vertex_size();
        let mut tree = ShortestPathTree::new(n, source, f64::INFINITY);
        let mut on_queue = vec![false; n];
        let mut queue = VecDeque::from([source]);
        on_queue[source.to_raw()] = true;
        let mut cost = 0usize;
        let mut cycle = None;
        'search: while let Some(v) = queue.pop_front() {
            on_queue[v.to_raw()] = false;
            for e in graph.edges_of(&v) {
                let w = e.to();
                if tree.relax(e) && !on_queue[w.to_raw()] {
                    queue.push_back(w);
                    on_queue[w.to_raw()] = true;
                }
                cost += 1;
                if cost % n == 0 {
                    cycle = find_negative_cycle(&tree)?;
                    if cycle.is_some() {
                        break 'search;
                    }
                }
            }
        }
        match cycle.as_ref() {
            Some(cycle) => log::debug!(
                "bellman-ford from {}: negative cycle of {} edges",
                source,
                cycle.len()
            ),
            None => log::debug!("bellman-ford from {}: {} relaxations", source, cost),
        }
        Ok(Self { tree, cycle })
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Edges of a negative cycle reachable from the source, if one was found.
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }
}

impl ShortestPaths for BellmanFordSp {
    fn tree(&self) -> Result<&ShortestPathTree> {
        if self.has_negative_cycle() {
            Err(GraphError::NegativeCycle)
        } else {
            Ok(&self.tree)
        }
    }
}

fn find_negative_cycle(tree: &ShortestPathTree) -> Result<Option<Vec<DirectedEdge>>> {
    let spt = EdgeWeightedDigraph::from_edges(tree.vertex_size(), tree.parent_edges().copied())?;
    Ok(EdgeWeightedDirectedCycle::new(&spt)
        .cycle()
        .map(|cycle| cycle.to_vec()))
}
