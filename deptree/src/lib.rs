//! Dependency trees over CoNLL-X tokens.
//!
//! A sentence is an ordered slice of [`Token`](token::Token)s. Its
//! dependency structure can be lifted into a [`DepGraph`](graph::DepGraph)
//! with vertex `0` as the artificial root and vertex `i` as the token at
//! (1-based) position `i`, and written back with
//! [`DepGraph::to_tokens`](graph::DepGraph::to_tokens).

mod error;
pub use crate::error::GraphError;

pub mod graph;

pub mod token;
