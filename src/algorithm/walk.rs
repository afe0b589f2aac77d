use crate::graph::*;

/// What a depth-first walk observed on its latest step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `vertex` is marked for the first time, reached from `parent`.
    Discover {
        vertex: VertexId,
        parent: Option<VertexId>,
    },
    /// The edge `from -> to` leads to an already marked vertex.
    Revisit { from: VertexId, to: VertexId },
    /// All neighbors of `vertex` have been scanned.
    Finish(VertexId),
}

/// Depth-first search driven by an explicit stack of
/// `(vertex, remaining neighbors)` frames.
///
/// Events come out in exactly the order a recursive search would produce
/// them, but the call stack stays flat however deep the graph is.
/// A walk may be restarted from further roots with [Self::start]; marks
/// carry over between roots.
pub(crate) struct DepthFirstWalk<'a, G>
where
    G: AdjacentGraph,
{
    graph: &'a G,
    marked: Vec<bool>,
    stack: Vec<(VertexId, Box<dyn Iterator<Item = VertexId> + 'a>)>,
    root: Option<VertexId>,
}

impl<'a, G> DepthFirstWalk<'a, G>
where
    G: AdjacentGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            marked: vec![false; graph.vertex_size()],
            stack: vec![],
            root: None,
        }
    }

    /// Schedules a search from `root`, unless it is already marked.
    ///
    /// `root` must be a valid vertex, and the previous search must be drained.
    pub fn start(&mut self, root: VertexId) -> bool {
        debug_assert!(self.stack.is_empty());
        if self.marked[root.to_raw()] {
            false
        } else {
            self.root = Some(root);
            true
        }
    }

    pub fn is_marked(&self, v: &VertexId) -> bool {
        self.marked[v.to_raw()]
    }

    pub fn into_marked(self) -> Vec<bool> {
        self.marked
    }

    fn visit(&mut self, v: VertexId) {
        self.marked[v.to_raw()] = true;
        self.stack.push((v, self.graph.neighbors(&v)));
    }
}

impl<'a, G> Iterator for DepthFirstWalk<'a, G>
where
    G: AdjacentGraph,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.visit(root);
            return Some(DfsEvent::Discover {
                vertex: root,
                parent: None,
            });
        }
        let (v, next) = {
            let (v, neighbors) = self.stack.last_mut()?;
            (*v, neighbors.next())
        };
        match next {
            Some(w) if self.marked[w.to_raw()] => Some(DfsEvent::Revisit { from: v, to: w }),
            Some(w) => {
                self.visit(w);
                Some(DfsEvent::Discover {
                    vertex: w,
                    parent: Some(v),
                })
            }
            None => {
                self.stack.pop();
                Some(DfsEvent::Finish(v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DfsEvent::*;

    #[test]
    fn events_follow_recursion() {
        let g = Digraph::from_edges(
            3,
            [
                (VertexId(0), VertexId(1)),
                (VertexId(1), VertexId(2)),
                (VertexId(2), VertexId(0)),
                (VertexId(0), VertexId(2)),
            ],
        )
        .unwrap();
        let mut walk = DepthFirstWalk::new(&g);
        assert!(walk.start(VertexId(0)));
        let trial: Vec<_> = walk.by_ref().collect();
        let oracle = vec![
            Discover {
                vertex: VertexId(0),
                parent: None,
            },
            Discover {
                vertex: VertexId(1),
                parent: Some(VertexId(0)),
            },
            Discover {
                vertex: VertexId(2),
                parent: Some(VertexId(1)),
            },
            Revisit {
                from: VertexId(2),
                to: VertexId(0),
            },
            Finish(VertexId(2)),
            Finish(VertexId(1)),
            Revisit {
                from: VertexId(0),
                to: VertexId(2),
            },
            Finish(VertexId(0)),
        ];
        assert_eq!(trial, oracle);
        assert!(!walk.start(VertexId(2)));
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 200_000;
        let g = Digraph::from_edges(n, (1..n).map(|v| (VertexId(v - 1), VertexId(v)))).unwrap();
        let mut walk = DepthFirstWalk::new(&g);
        walk.start(VertexId(0));
        let finishes = walk.filter(|e| matches!(e, Finish(_))).count();
        assert_eq!(finishes, n);
    }
}
