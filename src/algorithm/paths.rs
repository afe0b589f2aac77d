use super::walk::*;
use crate::{graph::*, Result};
use std::collections::VecDeque;

/// Vertices reachable from a single source, with one path to each, found by
/// depth-first search.
///
/// The paths are not shortest in general; see [BreadthFirstPaths].
pub struct DepthFirstPaths {
    source: VertexId,
    marked: Vec<bool>,
    edge_to: Vec<Option<VertexId>>,
}

impl DepthFirstPaths {
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: AdjacentGraph,
    {
        graph.validate_vertex(&source)?;
        let mut edge_to = vec![None; graph.vertex_size()];
        let mut walk = DepthFirstWalk::new(graph);
        walk.start(source);
        for event in walk.by_ref() {
            if let DfsEvent::Discover {
                vertex,
                parent: Some(parent),
            } = event
            {
                edge_to[vertex.to_raw()] = Some(parent);
            }
        }
        Ok(Self {
            source,
            marked: walk.into_marked(),
            edge_to,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        v.validate(self.marked.len())?;
        Ok(self.marked[v.to_raw()])
    }

    /// Vertices on the discovered path from the source to `v`, both included.
    pub fn path_to(&self, v: &VertexId) -> Result<Option<Vec<VertexId>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(walk_back(&self.edge_to, *v)))
    }
}

/// Shortest (fewest edges) paths from one or more sources, found by
/// breadth-first search.
pub struct BreadthFirstPaths {
    marked: Vec<bool>,
    edge_to: Vec<Option<VertexId>>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: AdjacentGraph,
    {
        Self::from_sources(graph, [source])
    }

    /// A path to `v` starts at whichever source is nearest to `v`.
    pub fn from_sources<G, I>(graph: &G, sources: I) -> Result<Self>
    where
        G: AdjacentGraph,
        I: IntoIterator<Item = VertexId>,
    {
        let n = graph.vertex_size();
        let mut res = Self {
            marked: vec![false; n],
            edge_to: vec![None; n],
            dist_to: vec![None; n],
        };
        let mut queue = VecDeque::new();
        for s in sources {
            graph.validate_vertex(&s)?;
            if !res.marked[s.to_raw()] {
                res.marked[s.to_raw()] = true;
                res.dist_to[s.to_raw()] = Some(0);
                queue.push_back(s);
            }
        }
        while let Some(v) = queue.pop_front() {
            let dist = res.dist_to[v.to_raw()].map_or(0, |d| d + 1);
            for w in graph.neighbors(&v) {
                if !res.marked[w.to_raw()] {
                    res.marked[w.to_raw()] = true;
                    res.edge_to[w.to_raw()] = Some(v);
                    res.dist_to[w.to_raw()] = Some(dist);
                    queue.push_back(w);
                }
            }
        }
        Ok(res)
    }

    pub fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        v.validate(self.marked.len())?;
        Ok(self.marked[v.to_raw()])
    }

    /// Number of edges on a shortest path to `v`, or `None` if unreachable.
    pub fn dist_to(&self, v: &VertexId) -> Result<Option<usize>> {
        v.validate(self.dist_to.len())?;
        Ok(self.dist_to[v.to_raw()])
    }

    pub fn path_to(&self, v: &VertexId) -> Result<Option<Vec<VertexId>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(walk_back(&self.edge_to, *v)))
    }
}

/// Vertices reachable from any of a set of sources.
pub struct Reachability {
    marked: Vec<bool>,
    count: usize,
}

impl Reachability {
    pub fn new<G>(graph: &G, source: VertexId) -> Result<Self>
    where
        G: AdjacentGraph,
    {
        Self::from_sources(graph, [source])
    }

    pub fn from_sources<G, I>(graph: &G, sources: I) -> Result<Self>
    where
        G: AdjacentGraph,
        I: IntoIterator<Item = VertexId>,
    {
        let sources: Vec<_> = sources.into_iter().collect();
        for s in sources.iter() {
            graph.validate_vertex(s)?;
        }
        let mut walk = DepthFirstWalk::new(graph);
        let mut count = 0;
        for s in sources {
            if walk.start(s) {
                count += walk
                    .by_ref()
                    .filter(|e| matches!(e, DfsEvent::Discover { .. }))
                    .count();
            }
        }
        Ok(Self {
            marked: walk.into_marked(),
            count,
        })
    }

    pub fn marked(&self, v: &VertexId) -> Result<bool> {
        v.validate(self.marked.len())?;
        Ok(self.marked[v.to_raw()])
    }

    /// Number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn iter_marked(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(v, _)| VertexId::new(v))
    }
}

/// Follows parent links from `v` up to a root and returns the path root first.
pub(crate) fn walk_back(edge_to: &[Option<VertexId>], v: VertexId) -> Vec<VertexId> {
    let mut path = vec![v];
    let mut x = v;
    while let Some(parent) = edge_to[x.to_raw()] {
        path.push(parent);
        x = parent;
    }
    path.reverse();
    path
}
