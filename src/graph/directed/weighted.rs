use crate::{graph::*, GraphError, Result};

/// A directed graph of weighted [DirectedEdge]s.
///
/// Edges are stored once in insertion order and indexed by [EdgeId] from the
/// adjacency list of their tail.
#[derive(Clone)]
pub struct WeightedAdjacentListGraph {
    edges: Vec<DirectedEdge>,
    adj: Vec<Vec<EdgeId>>,
    indegree: Vec<usize>,
}

impl DirectedOrNot for WeightedAdjacentListGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl WeightedAdjacentListGraph {
    pub fn edge(&self, eid: &EdgeId) -> Option<&DirectedEdge> {
        self.edges.get(eid.to_raw())
    }
}

impl GrowableWeightedGraph for WeightedAdjacentListGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            edges: vec![],
            adj: vec![vec![]; vertex_size],
            indegree: vec![0; vertex_size],
        }
    }

    fn add_edge(&mut self, edge: DirectedEdge) -> Result<EdgeId> {
        self.validate_vertex(&edge.from())?;
        self.validate_vertex(&edge.to())?;
        if edge.weight().is_nan() {
            return Err(GraphError::NanWeight);
        }
        let eid = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        self.adj[edge.from().to_raw()].push(eid);
        self.indegree[edge.to().to_raw()] += 1;
        Ok(eid)
    }
}

impl QueryableGraph for WeightedAdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.adj.len()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }
}

impl WeightedGraph for WeightedAdjacentListGraph {
    type Edge = DirectedEdge;

    fn edges_of(&self, v: &VertexId) -> Box<dyn Iterator<Item = &DirectedEdge> + '_> {
        let it = self.adj[v.to_raw()]
            .iter()
            .map(|eid| &self.edges[eid.to_raw()]);
        Box::new(it)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &DirectedEdge> + '_> {
        Box::new(self.edges.iter())
    }
}

impl AdjacentGraph for WeightedAdjacentListGraph {
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.edges_of(v).map(|e| e.to()))
    }

    fn iter_arcs(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        Box::new(self.edges.iter().map(|e| (e.from(), e.to())))
    }
}

impl DirectedGraph for WeightedAdjacentListGraph {
    fn indegree(&self, v: &VertexId) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v.to_raw()])
    }

    fn reverse(&self) -> Self {
        let mut res = Self::new(self.vertex_size());
        for e in self.edges.iter() {
            let eid = EdgeId::new(res.edges.len());
            res.edges.push(DirectedEdge::new(e.to(), e.from(), e.weight()));
            res.adj[e.to().to_raw()].push(eid);
            res.indegree[e.from().to_raw()] += 1;
        }
        res
    }
}

impl std::fmt::Debug for WeightedAdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for WeightedAdjacentListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_size(), self.edge_size())?;
        for v in self.iter_vertices() {
            write!(f, "{}:", v)?;
            for e in self.edges_of(&v) {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn tiny_ewd_shape() {
        let g = tiny_ewd();
        assert_eq!(g.vertex_size(), 8);
        assert_eq!(g.edge_size(), 15);
        assert_eq!(g.outdegree(&VertexId(5)).unwrap(), 3);
        assert_eq!(g.indegree(&VertexId(7)).unwrap(), 3);
        let heads: Vec<_> = g.adjacent(&VertexId(0)).unwrap().collect();
        assert_eq!(heads, vec![VertexId(4), VertexId(2)]);
    }

    #[test]
    fn reverse_keeps_weights() {
        let g = tiny_ewd();
        let r = g.reverse();
        let trial: Vec<_> = r
            .adjacent_edges(&VertexId(2))
            .unwrap()
            .map(|e| (e.to(), e.weight()))
            .collect();
        assert_eq!(trial, vec![(VertexId(0), 0.26), (VertexId(6), 0.40)]);
    }

    #[test]
    fn rejects_bad_edges() {
        let mut g = EdgeWeightedDigraph::new(2);
        assert!(g
            .add_edge(DirectedEdge::new(VertexId(5), VertexId(0), 1.0))
            .is_err());
        assert!(matches!(
            g.add_edge(DirectedEdge::new(VertexId(0), VertexId(1), f64::NAN)),
            Err(GraphError::NanWeight)
        ));
    }

    #[test]
    fn listing() {
        let mut g = EdgeWeightedDigraph::new(2);
        g.add_edge(DirectedEdge::new(VertexId(0), VertexId(1), 0.5))
            .unwrap();
        assert_eq!(
            g.to_string(),
            "2 vertices, 1 edges\n0:  0->1  0.50\n1:\n"
        );
    }
}
