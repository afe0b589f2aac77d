use crate::{graph::*, Result};

/// A directed graph backed by out-adjacency lists.
///
/// An edge `v->w` is recorded only in the list of `v`; in-degrees are
/// counted alongside.
///
/// |                    | Complexity          |
/// | ------------------ | ------------------- |
/// | `add_edge`         | amortized $O(1)$    |
/// | `neighbors`        | $O(1)$ per neighbor |
/// | `indegree`         | $O(1)$              |
/// | `reverse`          | $O(\|V\| + \|E\|)$  |
#[derive(Clone)]
pub struct AdjacentListGraph {
    edge_size: usize,
    adj: Vec<Vec<VertexId>>,
    indegree: Vec<usize>,
}

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl GrowableGraph for AdjacentListGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            edge_size: 0,
            adj: vec![vec![]; vertex_size],
            indegree: vec![0; vertex_size],
        }
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId> {
        self.validate_vertex(&source)?;
        self.validate_vertex(&sink)?;
        let eid = EdgeId::new(self.edge_size);
        self.edge_size += 1;
        self.adj[source.to_raw()].push(sink);
        self.indegree[sink.to_raw()] += 1;
        Ok(eid)
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.adj.len()
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }
}

impl AdjacentGraph for AdjacentListGraph {
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.adj[v.to_raw()].iter().copied())
    }

    fn iter_arcs(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        let it = self
            .iter_vertices()
            .flat_map(move |v| self.adj[v.to_raw()].iter().map(move |w| (v, *w)));
        Box::new(it)
    }
}

impl DirectedGraph for AdjacentListGraph {
    fn indegree(&self, v: &VertexId) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v.to_raw()])
    }

    fn reverse(&self) -> Self {
        let mut res = Self::new(self.vertex_size());
        for (v, w) in self.iter_arcs() {
            res.adj[w.to_raw()].push(v);
            res.indegree[v.to_raw()] += 1;
        }
        res.edge_size = self.edge_size;
        res
    }
}

impl std::fmt::Debug for AdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

impl std::fmt::Display for AdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.debug())
    }
}
