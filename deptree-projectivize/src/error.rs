use deptree::GraphError;
use thiserror::Error;

/// Projectivization errors.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum ProjectivizeError {
    /// The tokens do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A non-projective edge cannot be lifted, because its head has no head.
    #[error("cannot lift edge {head:?} -> {dependent:?}: head {head:?} has no incoming edge")]
    MissingHead { head: usize, dependent: usize },

    /// The graph is still non-projective after the maximum number of lifts.
    #[error("graph is not projective after {lifts:?} lifts, does it contain a cycle?")]
    LiftLimitExceeded { lifts: usize },
}
