use super::walk::*;
use crate::{graph::*, Result};

/// All-pairs reachability, one depth-first search per vertex.
///
/// Takes quadratic space; meant for small graphs.
pub struct TransitiveClosure {
    reachable: Vec<Vec<bool>>,
}

impl TransitiveClosure {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacentGraph,
    {
        let reachable = graph
            .iter_vertices()
            .map(|v| {
                let mut walk = DepthFirstWalk::new(graph);
                walk.start(v);
                for _ in walk.by_ref() {}
                walk.into_marked()
            })
            .collect();
        Self { reachable }
    }

    /// Whether a directed path runs from `v` to `w`. Every vertex reaches
    /// itself.
    pub fn reachable(&self, v: &VertexId, w: &VertexId) -> Result<bool> {
        let n = self.reachable.len();
        v.validate(n)?;
        w.validate(n)?;
        Ok(self.reachable[v.to_raw()][w.to_raw()])
    }
}
