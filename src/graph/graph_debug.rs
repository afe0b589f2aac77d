use crate::graph::*;

/// Adjacency listing of a graph with customized indentation.
///
/// ```text
/// 3 vertices, 2 edges
/// 0: 1 2
/// 1: 0
/// 2: 0
/// ```
pub struct GraphDebug<'a, G>
where
    G: AdjacentGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: AdjacentGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 0,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: AdjacentGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display_indent(f, 0)?;
        writeln!(
            f,
            "{} vertices, {} edges",
            self.graph.vertex_size(),
            self.graph.edge_size()
        )?;
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 1)?;
            write!(f, "{}:", v)?;
            for w in self.graph.neighbors(&v) {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Display for GraphDebug<'a, G>
where
    G: AdjacentGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
