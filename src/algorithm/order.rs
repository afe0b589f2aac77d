use super::walk::*;
use crate::{graph::*, Result};

/// Preorder, postorder and reverse postorder of a full depth-first search.
///
/// Roots are taken in increasing vertex order. Each ordering is a
/// permutation of all vertices.
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<VertexId>,
    postorder: Vec<VertexId>,
}

impl DepthFirstOrder {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedGraph,
    {
        let n = graph.vertex_size();
        let mut res = Self {
            pre: vec![0; n],
            post: vec![0; n],
            preorder: Vec::with_capacity(n),
            postorder: Vec::with_capacity(n),
        };
        let mut walk = DepthFirstWalk::new(graph);
        for root in graph.iter_vertices() {
            if !walk.start(root) {
                continue;
            }
            for event in walk.by_ref() {
                match event {
                    DfsEvent::Discover { vertex, .. } => {
                        res.pre[vertex.to_raw()] = res.preorder.len();
                        res.preorder.push(vertex);
                    }
                    DfsEvent::Finish(vertex) => {
                        res.post[vertex.to_raw()] = res.postorder.len();
                        res.postorder.push(vertex);
                    }
                    DfsEvent::Revisit { .. } => {}
                }
            }
        }
        res
    }

    /// Position of `v` in preorder.
    pub fn pre(&self, v: &VertexId) -> Result<usize> {
        v.validate(self.pre.len())?;
        Ok(self.pre[v.to_raw()])
    }

    /// Position of `v` in postorder.
    pub fn post(&self, v: &VertexId) -> Result<usize> {
        v.validate(self.post.len())?;
        Ok(self.post[v.to_raw()])
    }

    pub fn preorder(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.preorder.iter().copied()
    }

    pub fn postorder(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.postorder.iter().copied()
    }

    pub fn reverse_postorder(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.postorder.iter().rev().copied()
    }
}
