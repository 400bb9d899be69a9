#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graph::Error),

    #[error("transpose has {transpose} vertices but the graph has {graph}")]
    VertexCountMismatch { graph: usize, transpose: usize },

    #[error("transpose has {transpose} edges but the graph has {graph}")]
    EdgeCountMismatch { graph: usize, transpose: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
