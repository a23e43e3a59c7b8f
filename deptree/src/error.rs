use thiserror::Error;

/// Graph processing error.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    #[error("dependent {dependent:?} is out of bounds for graph with {vertex_count:?} vertices")]
    DependentOutOfBounds {
        dependent: usize,
        vertex_count: usize,
    },

    #[error("head {head:?} is out of bounds for graph with {vertex_count:?} vertices")]
    HeadOutOfBounds { head: usize, vertex_count: usize },
}
