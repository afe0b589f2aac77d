use super::walk::*;
use crate::graph::*;

/// Finds a directed cycle, if any.
///
/// A vertex is on the search stack from its discovery until it finishes.
/// The search stops at the first edge leading back onto the stack, so the
/// reported cycle is simply the first one met, neither shortest nor
/// canonical.
pub struct DirectedCycle {
    cycle: Option<Vec<VertexId>>,
}

impl DirectedCycle {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedGraph,
    {
        let n = graph.vertex_size();
        let mut on_stack = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut cycle = None;
        let mut walk = DepthFirstWalk::new(graph);
        'roots: for root in graph.iter_vertices() {
            if !walk.start(root) {
                continue;
            }
            for event in walk.by_ref() {
                match event {
                    DfsEvent::Discover { vertex, parent } => {
                        on_stack[vertex.to_raw()] = true;
                        edge_to[vertex.to_raw()] = parent;
                    }
                    DfsEvent::Finish(vertex) => {
                        on_stack[vertex.to_raw()] = false;
                    }
                    DfsEvent::Revisit { from, to } if on_stack[to.to_raw()] => {
                        cycle = Some(trace_cycle(&edge_to, from, to));
                        break 'roots;
                    }
                    DfsEvent::Revisit { .. } => {}
                }
            }
        }
        if let Some(cycle) = cycle.as_ref() {
            log::debug!("directed cycle of length {}", cycle.len() - 1);
        }
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices along the cycle; the first vertex is repeated at the end.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }
}

/// Finds a directed cycle in an edge-weighted digraph and reports its edges.
pub struct EdgeWeightedDirectedCycle {
    cycle: Option<Vec<DirectedEdge>>,
}

impl EdgeWeightedDirectedCycle {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedGraph + WeightedGraph<Edge = DirectedEdge>,
    {
        let cycle = DirectedCycle::new(graph).cycle.and_then(|vertices| {
            vertices
                .windows(2)
                .map(|pair| graph.edges_of(&pair[0]).find(|e| e.to() == pair[1]).copied())
                .collect::<Option<Vec<_>>>()
        });
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Edges along the cycle, each starting where the previous one ends.
    pub fn cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }
}

/// Finds a cycle in an undirected graph, if any.
///
/// Self-loops and parallel edges count as cycles and are looked for first.
pub struct Cycle {
    cycle: Option<Vec<VertexId>>,
}

impl Cycle {
    pub fn new<G>(graph: &G) -> Self
    where
        G: UndirectedGraph,
    {
        let cycle = self_loop(graph)
            .or_else(|| parallel_edges(graph))
            .or_else(|| back_edge(graph));
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Vertices along the cycle; the first vertex is repeated at the end.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }
}

fn self_loop<G: AdjacentGraph>(graph: &G) -> Option<Vec<VertexId>> {
    graph
        .iter_vertices()
        .find(|v| graph.neighbors(v).any(|w| w == *v))
        .map(|v| vec![v, v])
}

fn parallel_edges<G: AdjacentGraph>(graph: &G) -> Option<Vec<VertexId>> {
    let mut marked = vec![false; graph.vertex_size()];
    for v in graph.iter_vertices() {
        for w in graph.neighbors(&v) {
            if marked[w.to_raw()] {
                return Some(vec![v, w, v]);
            }
            marked[w.to_raw()] = true;
        }
        for w in graph.neighbors(&v) {
            marked[w.to_raw()] = false;
        }
    }
    None
}

fn back_edge<G: AdjacentGraph>(graph: &G) -> Option<Vec<VertexId>> {
    let mut edge_to = vec![None; graph.vertex_size()];
    let mut walk = DepthFirstWalk::new(graph);
    for root in graph.iter_vertices() {
        if !walk.start(root) {
            continue;
        }
        for event in walk.by_ref() {
            match event {
                DfsEvent::Discover { vertex, parent } => {
                    edge_to[vertex.to_raw()] = parent;
                }
                DfsEvent::Revisit { from, to } if edge_to[from.to_raw()] != Some(to) => {
                    return Some(trace_cycle(&edge_to, from, to));
                }
                _ => {}
            }
        }
    }
    None
}

/// Closes the cycle `to -> ... -> from -> to`, where `to` is an ancestor of
/// `from` in the search tree encoded by `edge_to`.
pub(crate) fn trace_cycle(
    edge_to: &[Option<VertexId>],
    from: VertexId,
    to: VertexId,
) -> Vec<VertexId> {
    let mut cycle = vec![];
    let mut x = from;
    while x != to {
        cycle.push(x);
        match edge_to[x.to_raw()] {
            Some(parent) => x = parent,
            None => break,
        }
    }
    cycle.push(to);
    cycle.reverse();
    cycle.push(to);
    cycle
}
