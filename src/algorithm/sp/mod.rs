//! Single-source shortest (and longest) paths in edge-weighted digraphs.
//!
//! Every algorithm here grows a [ShortestPathTree]: `dist_to[v]` is the best
//! known distance from the source, and `edge_to[v]` the last edge on that
//! path. Queries go through the [ShortestPaths] trait.
use crate::{graph::*, GraphError, Result};

mod acyclic;
pub use self::acyclic::*;
mod bellman_ford;
pub use self::bellman_ford::*;
mod dijkstra;
pub use self::dijkstra::*;

/// Distances and parent edges from a single source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
    unreached: f64,
}

impl ShortestPathTree {
    /// A tree holding only `source`. Other vertices start at `unreached`,
    /// which is `INFINITY` for shortest and `NEG_INFINITY` for longest paths.
    pub(crate) fn new(vertex_size: usize, source: VertexId, unreached: f64) -> Self {
        let mut dist_to = vec![unreached; vertex_size];
        dist_to[source.to_raw()] = 0.0;
        Self {
            source,
            dist_to,
            edge_to: vec![None; vertex_size],
            unreached,
        }
    }

    /// Takes `edge` if it shortens the path to its head.
    pub(crate) fn relax(&mut self, edge: &DirectedEdge) -> bool {
        let candidate = self.dist_to[edge.from().to_raw()] + edge.weight();
        if candidate < self.dist_to[edge.to().to_raw()] {
            self.take(edge, candidate);
            true
        } else {
            false
        }
    }

    /// Takes `edge` if it lengthens the path to its head.
    pub(crate) fn relax_longer(&mut self, edge: &DirectedEdge) -> bool {
        let candidate = self.dist_to[edge.from().to_raw()] + edge.weight();
        if candidate > self.dist_to[edge.to().to_raw()] {
            self.take(edge, candidate);
            true
        } else {
            false
        }
    }

    fn take(&mut self, edge: &DirectedEdge, dist: f64) {
        log::trace!("relax {}: dist_to[{}] = {}", edge, edge.to(), dist);
        self.dist_to[edge.to().to_raw()] = dist;
        self.edge_to[edge.to().to_raw()] = Some(*edge);
    }

    pub(crate) fn raw_dist(&self, v: &VertexId) -> f64 {
        self.dist_to[v.to_raw()]
    }

    pub(crate) fn parent_edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.edge_to.iter().flatten()
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn vertex_size(&self) -> usize {
        self.dist_to.len()
    }

    pub fn dist_to(&self, v: &VertexId) -> Result<f64> {
        v.validate(self.vertex_size())?;
        Ok(self.dist_to[v.to_raw()])
    }

    pub fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        Ok(self.dist_to(v)? != self.unreached)
    }

    /// Edges from the source to `v`, or `None` if `v` is unreached.
    /// The path to the source itself is empty.
    pub fn path_to(&self, v: &VertexId) -> Result<Option<Vec<DirectedEdge>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let mut path = vec![];
        let mut x = *v;
        while let Some(e) = self.edge_to[x.to_raw()] {
            path.push(e);
            x = e.from();
        }
        path.reverse();
        Ok(Some(path))
    }
}

/// Queries shared by every single-source path algorithm.
pub trait ShortestPaths {
    /// The computed tree, or the reason no such tree exists.
    fn tree(&self) -> Result<&ShortestPathTree>;

    /// Distance from the source to `v`; the `unreached` sentinel if there is
    /// no path.
    fn dist_to(&self, v: &VertexId) -> Result<f64> {
        self.tree()?.dist_to(v)
    }

    fn has_path_to(&self, v: &VertexId) -> Result<bool> {
        self.tree()?.has_path_to(v)
    }

    fn path_to(&self, v: &VertexId) -> Result<Option<Vec<DirectedEdge>>> {
        self.tree()?.path_to(v)
    }
}

/// Fails with [GraphError::NegativeWeight] on the first negative edge.
pub(crate) fn check_nonnegative<G>(graph: &G) -> Result<()>
where
    G: WeightedGraph<Edge = DirectedEdge>,
{
    match graph.iter_edges().find(|e| e.weight() < 0.0) {
        Some(edge) => Err(GraphError::NegativeWeight { edge: *edge }),
        None => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Checks that `path` is a chain from `source` to `target` whose weights
    /// add up to `dist`.
    pub fn assert_path(path: &[DirectedEdge], source: usize, target: usize, dist: f64) {
        let mut at = VertexId(source);
        let mut total = 0.0;
        for e in path {
            assert_eq!(e.from(), at);
            at = e.to();
            total += e.weight();
        }
        assert_eq!(at, VertexId(target));
        assert!((total - dist).abs() < 1e-9, "{} != {}", total, dist);
    }

    #[test]
    fn lone_source() {
        let tree = ShortestPathTree::new(2, VertexId(0), f64::INFINITY);
        assert_eq!(tree.dist_to(&VertexId(0)).unwrap(), 0.0);
        assert_eq!(tree.path_to(&VertexId(0)).unwrap(), Some(vec![]));
        assert!(!tree.has_path_to(&VertexId(1)).unwrap());
        assert_eq!(tree.path_to(&VertexId(1)).unwrap(), None);
        assert!(matches!(
            tree.dist_to(&VertexId(2)),
            Err(GraphError::InvalidVertex { .. })
        ));
    }

    #[test]
    fn relax_only_improves() {
        let mut tree = ShortestPathTree::new(2, VertexId(0), f64::INFINITY);
        assert!(tree.relax(&DirectedEdge::new(VertexId(0), VertexId(1), 2.0)));
        assert!(!tree.relax(&DirectedEdge::new(VertexId(0), VertexId(1), 2.0)));
        assert!(tree.relax(&DirectedEdge::new(VertexId(0), VertexId(1), 1.0)));
        assert_eq!(tree.dist_to(&VertexId(1)).unwrap(), 1.0);
        assert_eq!(tree.parent_edges().count(), 1);
    }
}
