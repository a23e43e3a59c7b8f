//! Pseudo-projective transformations of dependency trees.
//!
//! [`HeadProjectivizer`] rewrites non-projective trees into projective
//! trees and back, using the *head* encoding of *Pseudo-Projective
//! Dependency Parsing*, Nivre and Nilsson, 2005.

mod error;
pub use error::ProjectivizeError;

mod graph_algo;
pub use crate::graph_algo::{bfs_paths, BfsWithDepth};

mod head_rel;
pub use head_rel::{HeadRel, HEAD_MARKER_SEPARATOR};

mod proj;
pub use proj::{non_projective_edges, Deprojectivize, HeadProjectivizer, Projectivize};

#[cfg(test)]
mod tests;
