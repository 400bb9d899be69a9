#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("cannot allocate a graph with {vertex_count} vertices")]
    CapacityOverflow { vertex_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
