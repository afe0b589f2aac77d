use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use std::io::BufRead;

/// A graph whose vertices are named by strings.
///
/// Each input line lists names separated by a delimiter. The first name on a
/// line is connected to every other name on it. Vertices are numbered in the
/// order their names first appear.
///
/// ```rust
/// use graphwalk::graph::*;
///
/// let routes = ["JFK MCO", "ORD DEN", "ORD HOU", "DFW PHX", "JFK ATL"];
/// let sg: SymbolGraph<Graph> = SymbolGraph::from_lines(routes, " ").unwrap();
/// let jfk = sg.index_of("JFK").unwrap();
/// let trial: Vec<_> = sg
///     .graph()
///     .adjacent(&jfk)
///     .unwrap()
///     .map(|v| sg.name_of(&v).unwrap().to_owned())
///     .collect();
/// assert_eq!(trial, vec!["MCO", "ATL"]);
/// ```
pub struct SymbolGraph<G> {
    graph: G,
    names: BiHashMap<String, VertexId, RandomState, RandomState>,
}

impl<G> SymbolGraph<G>
where
    G: GrowableGraph,
{
    pub fn from_lines<'a, I>(lines: I, delimiter: &str) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names = BiHashMap::with_hashers(RandomState::new(), RandomState::new());
        let mut rows: Vec<Vec<VertexId>> = vec![];
        for line in lines {
            let row: Vec<_> = line
                .trim()
                .split(delimiter)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| intern(&mut names, name))
                .collect();
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let mut graph = G::new(names.len());
        for row in rows.iter() {
            for w in row[1..].iter() {
                graph.add_edge(row[0], *w)?;
            }
        }
        log::debug!(
            "symbol graph: {} names, {} edges",
            graph.vertex_size(),
            graph.edge_size()
        );
        Ok(Self { graph, names })
    }

    pub fn from_reader<R>(reader: R, delimiter: &str) -> Result<Self>
    where
        R: BufRead,
    {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_lines(lines.iter().map(String::as_str), delimiter)
    }
}

impl<G> SymbolGraph<G>
where
    G: QueryableGraph,
{
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_left(name)
    }

    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.names.get_by_left(name).copied()
    }

    pub fn name_of(&self, v: &VertexId) -> Result<&str> {
        self.names
            .get_by_right(v)
            .map(String::as_str)
            .ok_or(GraphError::InvalidVertex {
                vertex: *v,
                vertex_size: self.names.len(),
            })
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

/// The id of `name`, numbering it next if it is new.
fn intern(
    names: &mut BiHashMap<String, VertexId, RandomState, RandomState>,
    name: &str,
) -> VertexId {
    if let Some(v) = names.get_by_left(name) {
        return *v;
    }
    let v = VertexId::new(names.len());
    names.insert(name.to_owned(), v);
    v
}
