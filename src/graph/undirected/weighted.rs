use crate::{graph::*, GraphError, Result};

/// An undirected graph of weighted [Edge]s.
///
/// Edges are stored once in insertion order. Each adjacency list holds the
/// [EdgeId]'s of the incident edges, and a self-loop is listed twice.
#[derive(Clone)]
pub struct WeightedAdjacentListGraph {
    edges: Vec<Edge>,
    adj: Vec<Vec<EdgeId>>,
}

impl DirectedOrNot for WeightedAdjacentListGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl WeightedAdjacentListGraph {
    /// The edge with ID `eid`, if present.
    pub fn edge(&self, eid: &EdgeId) -> Option<&Edge> {
        self.edges.get(eid.to_raw())
    }
}

impl GrowableWeightedGraph for WeightedAdjacentListGraph {
    fn new(vertex_size: usize) -> Self {
        Self {
            edges: vec![],
            adj: vec![vec![]; vertex_size],
        }
    }

    fn add_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        let (v, w) = edge.endpoints();
        self.validate_vertex(&v)?;
        self.validate_vertex(&w)?;
        if edge.weight().is_nan() {
            return Err(GraphError::NanWeight);
        }
        let eid = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        self.adj[v.to_raw()].push(eid);
        self.adj[w.to_raw()].push(eid);
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
    type Edge = Edge;

    fn edges_of(&self, v: &VertexId) -> Box<dyn Iterator<Item = &Edge> + '_> {
        let it = self.adj[v.to_raw()]
            .iter()
            .map(|eid| &self.edges[eid.to_raw()]);
        Box::new(it)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.iter())
    }
}

impl AdjacentGraph for WeightedAdjacentListGraph {
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let v = *v;
        let it = self.edges_of(&v).map(move |e| {
            let (a, b) = e.endpoints();
            if a == v {
                b
            } else {
                a
            }
        });
        Box::new(it)
    }

    fn iter_arcs(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        Box::new(self.edges.iter().map(|e| e.endpoints()))
    }
}

impl UndirectedGraph for WeightedAdjacentListGraph {}

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
    fn tiny_ewg_shape() {
        let g = tiny_ewg();
        assert_eq!(g.vertex_size(), 8);
        assert_eq!(g.edge_size(), 16);
        let total: usize = g.iter_vertices().map(|v| g.degree(&v).unwrap()).sum();
        assert_eq!(total, 32);
        let weight: f64 = g.iter_edges().map(|e| e.weight()).sum();
        assert!((weight - 5.90).abs() < 1e-9);
    }

    #[test]
    fn neighbors_are_far_endpoints() {
        let g = tiny_ewg();
        let trial: Vec<_> = g.adjacent(&VertexId(6)).unwrap().collect();
        assert_eq!(
            trial,
            vec![VertexId(2), VertexId(3), VertexId(0), VertexId(4)]
        );
    }

    #[test]
    fn rejects_bad_edges() {
        let mut g = EdgeWeightedGraph::new(2);
        assert!(matches!(
            g.add_edge(Edge::new(VertexId(0), VertexId(2), 1.0)),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert!(matches!(
            g.add_edge(Edge::new(VertexId(0), VertexId(1), f64::NAN)),
            Err(GraphError::NanWeight)
        ));
        assert_eq!(g.edge_size(), 0);
        assert!(g.adjacent_edges(&VertexId(2)).is_err());
    }

    #[test]
    fn self_loop_listed_twice() {
        let mut g = EdgeWeightedGraph::new(1);
        let eid = g.add_edge(Edge::new(VertexId(0), VertexId(0), 0.5)).unwrap();
        assert_eq!(g.edge(&eid).unwrap().weight(), 0.5);
        assert_eq!(g.degree(&VertexId(0)).unwrap(), 2);
        assert_eq!(g.iter_edges().count(), 1);
    }
}
