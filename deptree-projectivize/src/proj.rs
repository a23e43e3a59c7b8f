//! Projectivization/deprojectivization of graphs.

use std::cmp::{max, min};

use deptree::graph::{DepEdge, DepGraph, DepTriple};
use deptree::token::Token;
use itertools::Itertools;
use petgraph::visit::{Bfs, NodeFiltered, Walker};
use tracing::{debug, trace};

use crate::{bfs_paths, BfsWithDepth, HeadRel, ProjectivizeError, HEAD_MARKER_SEPARATOR};

/// Graph deprojectivizer.
pub trait Deprojectivize {
    /// Deprojectivize a sentence.
    ///
    /// This method rewrites a projective graph into a non-projective graph.
    /// Depending on the (de)projectivizer, this could require additional
    /// information in dependency labels to guide the deprojectivization.
    ///
    /// Returns a copy of the tokens with updated heads and head relations.
    fn deprojectivize(&self, tokens: &[Token]) -> Result<Vec<Token>, ProjectivizeError>;
}

/// Graph projectivizer.
pub trait Projectivize {
    /// Projectivize a sentence.
    ///
    /// This method rewrites a non-projective graph into a projective graph.
    /// Depending on the projectivizer, this may add additional information
    /// to the dependency labels to undo the projectivization later.
    ///
    /// Returns a copy of the tokens with updated heads and head relations.
    fn projectivize(&self, tokens: &[Token]) -> Result<Vec<Token>, ProjectivizeError>;
}

/// A projectivizer using the 'head'-marking strategy. See: *Pseudo-Projective
/// Dependency Parsing*, Nivre and Nilsson, 2005.
///
/// When a token is lifted, the relation of its original head is appended
/// to its own relation, e.g. `PP|AUX`. Deprojectivization uses this
/// marker to find the original head again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeadProjectivizer {
    separator: char,
}

impl HeadProjectivizer {
    /// Construct a projectivizer that uses `|` as the head marker separator.
    pub fn new() -> Self {
        Self::with_separator(HEAD_MARKER_SEPARATOR)
    }

    /// Construct a projectivizer with the given head marker separator.
    ///
    /// The separator should not occur in the relations of the treebank.
    pub fn with_separator(separator: char) -> Self {
        HeadProjectivizer { separator }
    }

    /// Get the separator between a relation and its head marker.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Deprojectivize the next node in the array of lifted nodes.
    ///
    /// Returns the index of the node that was reattached.
    fn deprojectivize_next(
        self,
        graph: &mut DepGraph<String>,
        lifted_sorted: &[usize],
        head_rels: &[Option<String>],
    ) -> Result<Option<usize>, ProjectivizeError> {
        for (idx, &lifted_node) in lifted_sorted.iter().enumerate() {
            let pref_head_rel = match &head_rels[lifted_node] {
                Some(head_rel) => head_rel,
                None => continue,
            };

            let (cur_head, rel) = match graph.parent(lifted_node) {
                Some(triple) => (triple.head(), triple.into_relation().clone()),
                None => continue,
            };

            if let Some(new_head) =
                self.search_attachment_point(graph, cur_head, lifted_node, pref_head_rel)
            {
                let edge = DepEdge::new(lifted_node, rel);
                graph.remove(cur_head, &edge);
                graph.add_edge(new_head, edge)?;

                debug!(
                    dependent = lifted_node,
                    head = cur_head,
                    new_head,
                    "reattached lifted token"
                );

                return Ok(Some(idx));
            }
        }

        Ok(None)
    }

    /// Find the correct attachment point for the lifted token/node.
    fn search_attachment_point(
        self,
        graph: &DepGraph<String>,
        cur_head: usize,
        lifted_node: usize,
        pref_head_rel: &str,
    ) -> Option<usize> {
        // We are looking for a token dominated by cur_head to attach
        // lifted_node to. This token should:
        //
        // 1. Be attached to its head using pref_head_rel.
        // 2. Not be lifted_node itself or any of its descendants.
        // 3. As high in the tree as possible.
        //
        // From the set of candidates, we pick the token that is the
        // closest to the lifted token.

        // Requirement (2): use a view of the graph that excludes
        // lifted_node, so that it and its children are never visited.
        let graph_without_lifted = NodeFiltered::from_fn(graph, |n| n != lifted_node);

        // Requirement (3): process the subtree by increasing depth
        // until the reattachment token is found.
        for (_, nodes) in &BfsWithDepth::new(&graph_without_lifted, cur_head)
            .iter(&graph_without_lifted)
            .skip(1)
            .group_by(|&(_, depth)| depth)
        {
            // Requirement (1): Only retain edges with the preferred relation.
            let level_candidates = nodes.map(|(node, _)| node).filter(|&node| {
                graph
                    .parent(node)
                    .map(|triple| triple.relation().as_str() == pref_head_rel)
                    .unwrap_or(false)
            });

            // When there are multiple candidates, return the token closest
            // to the lifted token.
            let min_candidate = level_candidates.min_by_key(|&node| {
                max(node, lifted_node) - min(node, lifted_node)
            });

            if min_candidate.is_some() {
                return min_candidate;
            }
        }

        None
    }

    /// Lift the given edge. This will reattach the edge to the parent of
    /// the head. If this was the first lifting operation for the
    /// dependent, the dependency relation of the original head is added
    /// to the dependency relation (following the head-strategy). The
    /// head's relation is added as it currently reads, including its own
    /// marker when the head was lifted before.
    fn lift(
        self,
        graph: &mut DepGraph<HeadRel>,
        lifted: &mut [bool],
        edge: DepTriple<HeadRel>,
    ) -> Result<(), ProjectivizeError> {
        let head = edge.head();
        let dependent = edge.dependent();

        let (new_head, parent_rel) = match graph.parent(head) {
            Some(parent) => (parent.head(), parent.relation().encode(self.separator)),
            None => return Err(ProjectivizeError::MissingHead { head, dependent }),
        };

        let rel = edge.into_relation();
        graph.remove(head, &DepEdge::new(dependent, rel.clone()));

        let rel = if lifted[dependent] {
            rel
        } else {
            HeadRel::Lifted {
                original: rel.original().to_owned(),
                owner: parent_rel,
            }
        };

        graph.add_edge(new_head, DepEdge::new(dependent, rel))?;
        lifted[dependent] = true;

        debug!(dependent, head, new_head, "lifted non-projective edge");

        Ok(())
    }

    /// Prepare for deprojectivizing: remove head annotations from lifted
    /// relations. Return the transformed graph + the preferred head
    /// relation of every lifted node.
    fn prepare_deproj(self, graph: &DepGraph<String>) -> (DepGraph<String>, Vec<Option<String>>) {
        let mut pref_head_rels = vec![None; graph.n_vertices()];

        let prepared_graph = graph.map(|_, dependent, rel| {
            let head_rel = HeadRel::parse(rel, self.separator);
            pref_head_rels[dependent] = head_rel.owner().map(ToOwned::to_owned);
            head_rel.original().to_owned()
        });

        (prepared_graph, pref_head_rels)
    }
}

impl Default for HeadProjectivizer {
    fn default() -> Self {
        HeadProjectivizer::new()
    }
}

impl Projectivize for HeadProjectivizer {
    fn projectivize(&self, tokens: &[Token]) -> Result<Vec<Token>, ProjectivizeError> {
        let mut graph = DepGraph::from_tokens(tokens)?.map(|_, _, rel| HeadRel::from(rel.clone()));
        let mut lifted = vec![false; graph.n_vertices()];

        // Every lift moves a subtree one level up, so a tree never needs
        // more lifts than the sum of its vertex depths.
        let max_lifts = graph.n_vertices() * graph.n_vertices();
        let mut lifts = 0;

        // Lift non-projective edges until there are no non-projective
        // edges left.
        while let Some(edge) = non_projective_edges(&graph).into_iter().next() {
            if lifts == max_lifts {
                return Err(ProjectivizeError::LiftLimitExceeded { lifts });
            }

            self.lift(&mut graph, &mut lifted, edge)?;
            lifts += 1;
        }

        // The graph is now a projective tree. Update the dependency relations
        // in the sentence to correspond to the graph.
        let separator = self.separator;
        Ok(graph
            .map(|_, _, rel| rel.encode(separator))
            .to_tokens(tokens))
    }
}

impl Deprojectivize for HeadProjectivizer {
    fn deprojectivize(&self, tokens: &[Token]) -> Result<Vec<Token>, ProjectivizeError> {
        let graph = DepGraph::from_tokens(tokens)?;

        // Find nodes and corresponding edges that are lifted and remove
        // head labels from dependency relations.
        let (mut graph, head_rels) = self.prepare_deproj(&graph);
        if head_rels.iter().all(Option::is_none) {
            return Ok(tokens.to_vec());
        }

        // Get and sort lifted tokens by increasing depth.
        let mut lifted_sorted = Vec::new();
        let mut bfs = Bfs::new(&graph, 0);
        while let Some(node) = bfs.next(&graph) {
            if head_rels[node].is_some() {
                lifted_sorted.push(node);
            }
        }

        // Deprojectivize the graph, re-attaching one token at a time,
        // with the preference of a token that is not deep in the tree.
        while let Some(idx) = self.deprojectivize_next(&mut graph, &lifted_sorted, &head_rels)? {
            lifted_sorted.remove(idx);
        }

        if !lifted_sorted.is_empty() {
            debug!(unresolved = ?lifted_sorted, "lifted tokens without attachment point");
        }

        Ok(graph.to_tokens(tokens))
    }
}

/// Returns non-projective edges in the graph, ordered by length.
///
/// Edges of the same length are ordered by head and then by dependent.
pub fn non_projective_edges<L>(graph: &DepGraph<L>) -> Vec<DepTriple<L>>
where
    L: Clone,
{
    let mut non_projective = Vec::new();

    for i in 0..graph.n_vertices() {
        let edges = graph.edges(i);
        if edges.is_empty() {
            continue;
        }

        let i_reachable = bfs_paths(graph, i);

        for edge in edges {
            // An edge i -> k is projective, iff:
            //
            // i > j > k or i < j < k, and i ->* j
            let k = edge.dependent();
            if (min(i, k) + 1..max(i, k)).any(|j| !i_reachable.contains_key(&j)) {
                non_projective.push(DepTriple::new(i, edge.relation().clone(), k));
            }
        }
    }

    non_projective.sort_by_key(DepTriple::span);

    if !non_projective.is_empty() {
        trace!(
            count = non_projective.len(),
            shortest = non_projective[0].span(),
            "found non-projective edges"
        );
    }

    non_projective
}
