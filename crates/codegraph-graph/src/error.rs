use crate::{EdgeDescriptor, VertexDescriptor};

pub type Result<T> = std::result::Result<T, Error>;

/// Lookup and registration failures.
///
/// These are precondition violations on the caller side: the container never retries or
/// silently ignores them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {0} doesn't exist")]
    VertexNotFound(VertexDescriptor),

    #[error("edge {0} doesn't exist")]
    EdgeNotFound(EdgeDescriptor),

    #[error("vertex {0} has already been issued")]
    DuplicateVertex(VertexDescriptor),

    #[error("edge {0} has already been issued")]
    DuplicateEdge(EdgeDescriptor),

    #[error("vertex {0} is outside the range open to caller-chosen descriptors")]
    VertexOutOfRange(VertexDescriptor),

    #[error("edge {0} is outside the range open to caller-chosen descriptors")]
    EdgeOutOfRange(EdgeDescriptor),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound(_) | Self::EdgeNotFound(_))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateVertex(_) | Self::DuplicateEdge(_))
    }
}
