use super::{cycle::trace_cycle, walk::*};
use crate::{graph::*, Result};

/// Connected components of an undirected graph.
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph,
    {
        let mut id = vec![0; graph.vertex_size()];
        let mut size = vec![];
        let mut walk = DepthFirstWalk::new(graph);
        for root in graph.iter_vertices() {
            if !walk.start(root) {
                continue;
            }
            let component = size.len();
            let mut members = 0;
            for event in walk.by_ref() {
                if let DfsEvent::Discover { vertex, .. } = event {
                    id[vertex.to_raw()] = component;
                    members += 1;
                }
            }
            size.push(members);
        }
        log::debug!("{} connected components", size.len());
        Self { id, size }
    }

    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component of `v`. Components are numbered by their lowest vertex.
    pub fn id(&self, v: &VertexId) -> Result<usize> {
        v.validate(self.id.len())?;
        Ok(self.id[v.to_raw()])
    }

    /// Number of vertices in the component of `v`.
    pub fn size(&self, v: &VertexId) -> Result<usize> {
        Ok(self.size[self.id(v)?])
    }

    pub fn connected(&self, v: &VertexId, w: &VertexId) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut res = vec![vec![]; self.count()];
        for (v, id) in self.id.iter().enumerate() {
            res[*id].push(VertexId::new(v));
        }
        res
    }
}

/// Two-coloring of an undirected graph, or an odd cycle proving none exists.
pub struct Bipartite {
    color: Vec<bool>,
    odd_cycle: Option<Vec<VertexId>>,
}

impl Bipartite {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph,
    {
        let n = graph.vertex_size();
        let mut color = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut odd_cycle = None;
        let mut walk = DepthFirstWalk::new(graph);
        'roots: for root in graph.iter_vertices() {
            if !walk.start(root) {
                continue;
            }
            for event in walk.by_ref() {
                match event {
                    DfsEvent::Discover { vertex, parent } => {
                        edge_to[vertex.to_raw()] = parent;
                        if let Some(p) = parent {
                            color[vertex.to_raw()] = !color[p.to_raw()];
                        }
                    }
                    // A descendant always scans a back edge before its
                    // ancestor does, so `to` is an ancestor of `from` here.
                    DfsEvent::Revisit { from, to }
                        if color[from.to_raw()] == color[to.to_raw()] =>
                    {
                        odd_cycle = Some(trace_cycle(&edge_to, from, to));
                        break 'roots;
                    }
                    _ => {}
                }
            }
        }
        Self { color, odd_cycle }
    }

    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Side of `v` in the two-coloring. Meaningless unless bipartite.
    pub fn color(&self, v: &VertexId) -> Result<bool> {
        v.validate(self.color.len())?;
        Ok(self.color[v.to_raw()])
    }

    /// A closed walk with an odd number of edges; the first vertex is
    /// repeated at the end.
    pub fn odd_cycle(&self) -> Option<&[VertexId]> {
        self.odd_cycle.as_deref()
    }
}
