use crate::{graph::*, Result};

/// An undirected graph backed by adjacency lists.
///
/// An edge `v-w` is recorded in the lists of both endpoints, so a self-loop
/// appears twice in the list of its vertex. Parallel edges are kept.
///
/// |                    | Complexity          |
/// | ------------------ | ------------------- |
/// | `add_edge`         | amortized $O(1)$    |
/// | `neighbors`        | $O(1)$ per neighbor |
/// | `degree`           | $O(\deg v)$         |
/// | `iter_arcs`        | $O(\|V\| + \|E\|)$  |
#[derive(Clone)]
pub struct AdjacentListGraph {
    edge_size: usize,
    adj: Vec<Vec<VertexId>>,
}

impl DirectedOrNot for AdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl GrowableGraph for AdjacentListGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            edge_size: 0,
            adj: vec![vec![]; vertex_size],
        }
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<EdgeId> {
        self.validate_vertex(&source)?;
        self.validate_vertex(&sink)?;
        let eid = EdgeId::new(self.edge_size);
        self.edge_size += 1;
        self.adj[source.to_raw()].push(sink);
        self.adj[sink.to_raw()].push(source);
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
        let it = self.iter_vertices().flat_map(move |v| {
            // a self-loop sits twice in its own list
            let mut self_loops = 0usize;
            self.adj[v.to_raw()].iter().filter_map(move |w| {
                if *w > v {
                    Some((v, *w))
                } else if *w == v {
                    self_loops += 1;
                    (self_loops % 2 == 1).then_some((v, v))
                } else {
                    None
                }
            })
        });
        Box::new(it)
    }
}

impl UndirectedGraph for AdjacentListGraph {}

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
