use crate::{GraphError, Result};

/// ID for vertices, which are essentially `usize` in `0..V`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const MIN: VertexId = VertexId(0);
    pub const MAX: VertexId = VertexId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Fails unless `self` lies in `0..vertex_size`.
    pub fn validate(&self, vertex_size: usize) -> Result<()> {
        if self.0 < vertex_size {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: *self,
                vertex_size,
            })
        }
    }
}

impl From<usize> for VertexId {
    fn from(x: usize) -> Self {
        Self(x)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
