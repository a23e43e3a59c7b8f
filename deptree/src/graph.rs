//! Dependency graphs.

use std::collections::HashSet;
use std::slice;

use petgraph::visit::{GraphBase, IntoNeighbors, NodeCount, Visitable};

use crate::error::GraphError;
use crate::token::Token;

/// A dependency triple.
///
/// A dependency triple consists of: a head index; a dependent index; and
/// a dependency label.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct DepTriple<S> {
    head: usize,
    dependent: usize,
    relation: S,
}

impl<S> DepTriple<S> {
    /// Construct a new dependency triple.
    pub fn new(head: usize, relation: S, dependent: usize) -> Self {
        DepTriple {
            head,
            dependent,
            relation,
        }
    }

    /// Get the dependent.
    pub fn dependent(&self) -> usize {
        self.dependent
    }

    /// Get the head.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Get the dependency relation.
    pub fn relation(&self) -> &S {
        &self.relation
    }

    /// Unwrap the dependency relation.
    pub fn into_relation(self) -> S {
        self.relation
    }

    /// The number of positions between the head and the dependent.
    pub fn span(&self) -> usize {
        if self.head > self.dependent {
            self.head - self.dependent
        } else {
            self.dependent - self.head
        }
    }
}

/// An outgoing edge of a head: the dependent and its relation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepEdge<L> {
    dependent: usize,
    relation: L,
}

impl<L> DepEdge<L> {
    pub fn new(dependent: usize, relation: L) -> Self {
        DepEdge {
            dependent,
            relation,
        }
    }

    pub fn dependent(&self) -> usize {
        self.dependent
    }

    pub fn relation(&self) -> &L {
        &self.relation
    }
}

/// A dependency graph over the vertices of a sentence.
///
/// Vertex `0` is the artificial root, vertex `i > 0` is the token at
/// sentence position `i`. The outgoing edges of every vertex are kept
/// sorted by dependent, so that scans over the dependents of a vertex
/// follow sentence order. Every vertex has at most one incoming edge:
/// adding an edge to a dependent replaces the head that was recorded
/// for it.
///
/// The forward and reverse edges are only guaranteed to agree when the
/// graph is modified through [`DepGraph::add_edge`] and
/// [`DepGraph::remove`] in tree-preserving ways, e.g. removing the old
/// head edge of a dependent before attaching it elsewhere.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepGraph<L = String> {
    dependents: Vec<Vec<DepEdge<L>>>,
    heads: Vec<Option<(usize, L)>>,
}

impl<L> DepGraph<L> {
    /// Construct a graph with `n_vertices` vertices and no edges.
    pub fn new(n_vertices: usize) -> Self {
        let mut dependents = Vec::with_capacity(n_vertices);
        dependents.resize_with(n_vertices, || Vec::with_capacity(3));
        let mut heads = Vec::with_capacity(n_vertices);
        heads.resize_with(n_vertices, || None);

        DepGraph { dependents, heads }
    }

    /// Get the outgoing edges of `vertex`, sorted by dependent.
    ///
    /// Panics when `vertex` is out of bounds.
    pub fn edges(&self, vertex: usize) -> &[DepEdge<L>] {
        &self.dependents[vertex]
    }

    /// Get the incoming edge of `vertex`, if any.
    pub fn parent(&self, vertex: usize) -> Option<DepTriple<&L>> {
        self.heads
            .get(vertex)
            .and_then(Option::as_ref)
            .map(|(head, relation)| DepTriple::new(*head, relation, vertex))
    }

    /// Get the number of vertices, including the root vertex.
    pub fn n_vertices(&self) -> usize {
        self.dependents.len()
    }

    /// Iterate over all edges, ordered by head and then by dependent.
    pub fn triples(&self) -> impl Iterator<Item = DepTriple<&L>> {
        self.dependents.iter().enumerate().flat_map(|(head, edges)| {
            edges
                .iter()
                .map(move |edge| DepTriple::new(head, &edge.relation, edge.dependent))
        })
    }

    /// Construct a graph with the same edges, relabeled using `f`.
    ///
    /// `f` is called with the head, the dependent, and the relation of
    /// every edge. Incoming edges are reconstructed from the outgoing
    /// edges.
    pub fn map<M, F>(&self, mut f: F) -> DepGraph<M>
    where
        F: FnMut(usize, usize, &L) -> M,
        M: Clone,
    {
        let mut mapped = DepGraph::new(self.n_vertices());

        for (head, edges) in self.dependents.iter().enumerate() {
            for edge in edges {
                let relation = f(head, edge.dependent, &edge.relation);
                mapped.heads[edge.dependent] = Some((head, relation.clone()));
                mapped.dependents[head].push(DepEdge::new(edge.dependent, relation));
            }
        }

        mapped
    }

    fn check_bounds(&self, head: usize, dependent: usize) -> Result<(), GraphError> {
        if head >= self.n_vertices() {
            return Err(GraphError::HeadOutOfBounds {
                head,
                vertex_count: self.n_vertices(),
            });
        }

        if dependent >= self.n_vertices() {
            return Err(GraphError::DependentOutOfBounds {
                dependent,
                vertex_count: self.n_vertices(),
            });
        }

        Ok(())
    }
}

impl<L> DepGraph<L>
where
    L: Clone + PartialEq,
{
    /// Add an edge from `head` to `edge.dependent()`.
    ///
    /// The edge is inserted after existing edges to the same dependent.
    /// Adding an edge that is already present is a no-op. Otherwise, the
    /// edge becomes the incoming edge of the dependent, replacing the
    /// head that was recorded before.
    pub fn add_edge(&mut self, head: usize, edge: DepEdge<L>) -> Result<(), GraphError> {
        self.check_bounds(head, edge.dependent)?;

        let edges = &mut self.dependents[head];
        let lower = edges.partition_point(|e| e.dependent < edge.dependent);
        let upper = edges.partition_point(|e| e.dependent <= edge.dependent);
        if edges[lower..upper].contains(&edge) {
            return Ok(());
        }

        self.heads[edge.dependent] = Some((head, edge.relation.clone()));
        edges.insert(upper, edge);

        Ok(())
    }

    /// Remove the edge from `head` to `edge.dependent()`.
    ///
    /// The dependent is left without an incoming edge. Returns `false`
    /// when the graph does not contain the edge.
    pub fn remove(&mut self, head: usize, edge: &DepEdge<L>) -> bool {
        let edges = match self.dependents.get_mut(head) {
            Some(edges) => edges,
            None => return false,
        };

        let lower = edges.partition_point(|e| e.dependent < edge.dependent);
        let idx = match edges[lower..]
            .iter()
            .take_while(|e| e.dependent == edge.dependent)
            .position(|e| e == edge)
        {
            Some(offset) => lower + offset,
            None => return false,
        };

        edges.remove(idx);
        self.heads[edge.dependent] = None;

        true
    }
}

impl DepGraph<String> {
    /// Construct the dependency graph of a sentence.
    ///
    /// Vertex `i` corresponds to `tokens[i - 1]`. Tokens that lack a head
    /// or a head relation do not get an incoming edge.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, GraphError> {
        let mut graph = DepGraph::new(tokens.len() + 1);

        for (idx, token) in tokens.iter().enumerate() {
            let (head, head_rel) = match (token.head(), token.head_rel()) {
                (Some(head), Some(head_rel)) => (head, head_rel),
                _ => continue,
            };

            graph.add_edge(head, DepEdge::new(idx + 1, head_rel.to_owned()))?;
        }

        Ok(graph)
    }

    /// Copy `tokens`, with heads and head relations taken from the graph.
    ///
    /// Tokens that are not the dependent of any edge keep their head and
    /// head relation.
    pub fn to_tokens(&self, tokens: &[Token]) -> Vec<Token> {
        let mut tokens = tokens.to_vec();

        for triple in self.triples() {
            let token = match triple
                .dependent()
                .checked_sub(1)
                .and_then(|idx| tokens.get_mut(idx))
            {
                Some(token) => token,
                None => continue,
            };

            token.set_head(Some(triple.head()));
            token.set_head_rel(Some(triple.relation().as_str()));
        }

        tokens
    }
}

impl<L> GraphBase for DepGraph<L> {
    type EdgeId = (usize, usize);
    type NodeId = usize;
}

impl<L> NodeCount for DepGraph<L> {
    fn node_count(&self) -> usize {
        self.n_vertices()
    }
}

impl<L> Visitable for DepGraph<L> {
    type Map = HashSet<usize>;

    fn visit_map(&self) -> Self::Map {
        HashSet::with_capacity(self.n_vertices())
    }

    fn reset_map(&self, map: &mut Self::Map) {
        map.clear();
    }
}

impl<'a, L> IntoNeighbors for &'a DepGraph<L> {
    type Neighbors = Neighbors<'a, L>;

    fn neighbors(self, vertex: usize) -> Self::Neighbors {
        Neighbors {
            inner: self.edges(vertex).iter(),
        }
    }
}

/// Iterator over the dependents of a vertex, in sentence order.
pub struct Neighbors<'a, L> {
    inner: slice::Iter<'a, DepEdge<L>>,
}

impl<'a, L> Iterator for Neighbors<'a, L> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(DepEdge::dependent)
    }
}
