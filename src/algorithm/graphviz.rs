//! Visualize graphs in the graphviz format.
use crate::graph::*;

/// Edges as `(source, sink, attributes)`.
pub type GraphvizArcs<'a> = Box<dyn Iterator<Item = (VertexId, VertexId, Option<String>)> + 'a>;

/**
 * Lists the edges of a graph for graphviz output.
 *
 * See [DumpInGraphviz] for details.
 */
pub trait GraphvizEdges: QueryableGraph + DirectedOrNot {
    /**
     * Returns every edge once, as `(source, sink, attributes)`.
     */
    fn graphviz_edges(&self) -> GraphvizArcs<'_>;
}

impl GraphvizEdges for undirected::AdjacentListGraph {
    fn graphviz_edges(&self) -> GraphvizArcs<'_> {
        Box::new(self.iter_arcs().map(|(v, w)| (v, w, None)))
    }
}

impl GraphvizEdges for directed::AdjacentListGraph {
    fn graphviz_edges(&self) -> GraphvizArcs<'_> {
        Box::new(self.iter_arcs().map(|(v, w)| (v, w, None)))
    }
}

impl GraphvizEdges for undirected::WeightedAdjacentListGraph {
    fn graphviz_edges(&self) -> GraphvizArcs<'_> {
        Box::new(self.iter_edges().map(weight_label))
    }
}

impl GraphvizEdges for directed::WeightedAdjacentListGraph {
    fn graphviz_edges(&self) -> GraphvizArcs<'_> {
        Box::new(self.iter_edges().map(weight_label))
    }
}

fn weight_label<E: WeightedEdge>(e: &E) -> (VertexId, VertexId, Option<String>) {
    let (v, w) = e.endpoints();
    (v, w, Some(format!("label=\"{}\"", e.weight())))
}

/**
 * Dumps a directed/undirected graph into graphviz format.
 *
 * Vertices are named by their raw IDs. Weighted graphs label each edge with
 * its weight.
 *
 * # Examples
 *
 * ```rust
 * use graphwalk::{algorithm::graphviz::*, graph::*};
 *
 * let mut dg = EdgeWeightedDigraph::new(2);
 * dg.add_edge(DirectedEdge::new(VertexId(0), VertexId(1), 0.5)).unwrap();
 * dg.add_edge(DirectedEdge::new(VertexId(0), VertexId(0), 1.0)).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     dg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   0 ;
 *   1 ;
 *   0 -> 1 [label="0.5"] ;
 *   0 -> 0 [label="1"] ;
 * }
 * "#
 * );
 *
 * let udg = Graph::from_edges(2, [(VertexId(0), VertexId(1))]).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     udg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   0 ;
 *   1 ;
 *   0 -- 1 ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz: GraphvizEdges {
    /**
     * Dumps a directed/undirected graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        if Self::DIRECTED_OR_NOT {
            writeln!(out, "digraph {} {{", graph_name)?;
        } else {
            writeln!(out, "graph {} {{", graph_name)?;
        }
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        let dir = if Self::DIRECTED_OR_NOT { "->" } else { "--" };
        for (src, snk, label) in self.graphviz_edges() {
            if let Some(label) = label {
                writeln!(out, "  {} {} {} [{}] ;", src, dir, snk, label)?;
            } else {
                writeln!(out, "  {} {} {} ;", src, dir, snk)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G: GraphvizEdges> DumpInGraphviz for G {}
