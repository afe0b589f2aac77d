//! Fixtures and generators shared by tests.
use crate::graph::{input::*, *};
use petgraph::graph::NodeIndex;
use quickcheck::{Arbitrary, Gen};
use rs_quickcheck_util::*;

pub const TINY_G: &str = "13 13
0 5  4 3  0 1  9 12  6 4  5 4  0 2
11 12  9 10  0 6  7 8  9 11  5 3
";

pub const TINY_CG: &str = "6 8
0 5  2 4  2 3  1 2  0 1  3 4  3 5  0 2
";

pub const TINY_DG: &str = "13 22
4 2  2 3  3 2  6 0  0 1  2 0  11 12  12 9  9 10  9 11  7 9
10 12  11 4  4 3  3 5  6 8  8 6  5 4  0 5  6 4  6 9  7 6
";

pub const TINY_DAG: &str = "13 15
2 3  0 6  0 1  2 0  11 12  9 12  9 10  9 11  3 5  8 7
5 4  0 5  6 4  6 9  7 6
";

pub const TINY_EWG: &str = "8
16
4 5 0.35
4 7 0.37
5 7 0.28
0 7 0.16
1 5 0.32
0 4 0.38
2 3 0.17
1 7 0.19
0 2 0.26
1 2 0.36
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

pub const TINY_EWD: &str = "8
15
4 5 0.35
5 4 0.35
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

pub const TINY_EWDAG: &str = "8
13
5 4 0.35
4 7 0.37
5 7 0.28
5 1 0.32
4 0 0.38
0 2 0.26
3 7 0.39
1 3 0.29
7 2 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

pub const TINY_EWDN: &str = "8
15
4 5 0.35
5 4 0.35
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 -1.20
3 6 0.52
6 0 -1.40
6 4 -1.25
";

pub const TINY_EWDNC: &str = "8
15
4 5 0.35
5 4 -0.66
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 0.40
3 6 0.52
6 0 0.58
6 4 0.93
";

pub fn tiny_g() -> Graph {
    read_graph(TINY_G.as_bytes()).unwrap()
}

pub fn tiny_cg() -> Graph {
    read_graph(TINY_CG.as_bytes()).unwrap()
}

/// Six vertices joined by `0-5 0-1 0-2 2-3 2-4`.
pub fn tiny_tree() -> Graph {
    let edges = [(0, 5), (0, 1), (0, 2), (2, 3), (2, 4)];
    Graph::from_edges(
        6,
        edges.iter().map(|(v, w)| (VertexId(*v), VertexId(*w))),
    )
    .unwrap()
}

pub fn tiny_dg() -> Digraph {
    read_graph(TINY_DG.as_bytes()).unwrap()
}

pub fn tiny_dag() -> Digraph {
    read_graph(TINY_DAG.as_bytes()).unwrap()
}

pub fn tiny_ewg() -> EdgeWeightedGraph {
    read_weighted_graph(TINY_EWG.as_bytes()).unwrap()
}

pub fn tiny_ewd() -> EdgeWeightedDigraph {
    read_weighted_graph(TINY_EWD.as_bytes()).unwrap()
}

pub fn tiny_ewdag() -> EdgeWeightedDigraph {
    read_weighted_graph(TINY_EWDAG.as_bytes()).unwrap()
}

pub fn tiny_ewdn() -> EdgeWeightedDigraph {
    read_weighted_graph(TINY_EWDN.as_bytes()).unwrap()
}

pub fn tiny_ewdnc() -> EdgeWeightedDigraph {
    read_weighted_graph(TINY_EWDNC.as_bytes()).unwrap()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn close_to(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 || (a.is_infinite() && a == b)
}

/// A random edge list over `0..vertex_size` with small integral weights.
///
/// Integral weights keep path sums exact, so different algorithms can be
/// compared with `==`.
#[derive(Clone)]
pub struct ArbitraryEdges {
    pub vertex_size: usize,
    pub edges: Vec<(usize, usize, u8)>,
}

impl std::fmt::Debug for ArbitraryEdges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.vertex_size, self.edges)
    }
}

impl Arbitrary for ArbitraryEdges {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_size = usize::arbitrary(g) % 12 + 1;
        let edges = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .map(|_| {
                let v = usize::arbitrary(g) % vertex_size;
                let w = usize::arbitrary(g) % vertex_size;
                let weight = u8::arbitrary(g) % 100;
                (v, w, weight)
            })
            .collect();
        Self { vertex_size, edges }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.edges.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| {
            let mut res = me.clone();
            res.edges = me.edges[0..n].to_vec();
            res
        });
        Box::new(it)
    }
}

impl ArbitraryEdges {
    fn pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges
            .iter()
            .map(|(v, w, _)| (VertexId(*v), VertexId(*w)))
    }

    pub fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_size, self.pairs()).unwrap()
    }

    pub fn digraph(&self) -> Digraph {
        Digraph::from_edges(self.vertex_size, self.pairs()).unwrap()
    }

    /// Edges oriented from the lower to the higher vertex, self-loops dropped.
    pub fn dag(&self) -> EdgeWeightedDigraph {
        let edges = self
            .edges
            .iter()
            .filter(|(v, w, _)| v != w)
            .map(|(v, w, weight)| {
                let (a, b) = if v < w { (v, w) } else { (w, v) };
                DirectedEdge::new(VertexId(*a), VertexId(*b), *weight as f64)
            });
        EdgeWeightedDigraph::from_edges(self.vertex_size, edges).unwrap()
    }

    pub fn weighted_graph(&self) -> EdgeWeightedGraph {
        let edges = self
            .edges
            .iter()
            .map(|(v, w, weight)| Edge::new(VertexId(*v), VertexId(*w), *weight as f64));
        EdgeWeightedGraph::from_edges(self.vertex_size, edges).unwrap()
    }

    pub fn weighted_digraph(&self) -> EdgeWeightedDigraph {
        let edges = self
            .edges
            .iter()
            .map(|(v, w, weight)| DirectedEdge::new(VertexId(*v), VertexId(*w), *weight as f64));
        EdgeWeightedDigraph::from_edges(self.vertex_size, edges).unwrap()
    }

    pub fn petgraph_digraph(&self) -> petgraph::Graph<(), f64> {
        let mut res = petgraph::Graph::new();
        for _ in 0..self.vertex_size {
            res.add_node(());
        }
        for (v, w, weight) in self.edges.iter() {
            res.add_edge(NodeIndex::new(*v), NodeIndex::new(*w), *weight as f64);
        }
        res
    }

    pub fn petgraph_graph(&self) -> petgraph::graph::UnGraph<(), f64> {
        let mut res = petgraph::graph::UnGraph::new_undirected();
        for _ in 0..self.vertex_size {
            res.add_node(());
        }
        for (v, w, weight) in self.edges.iter() {
            res.add_edge(NodeIndex::new(*v), NodeIndex::new(*w), *weight as f64);
        }
        res
    }
}
