//! Directed overlap graph over a token set
//!
//! Every input token is a vertex; an edge `A -> B` exists when `A` chains
//! to `B` under the overlap relation. The graph is built once from the
//! full token set and read-only afterwards.

use crate::token::Token;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Adjacency lists are short for realistic token sets; keep them inline.
type NeighborList = SmallVec<[Token; 2]>;

/// Directed adjacency structure over tokens.
///
/// Neighbor lists preserve input order, which downstream tie-breaking
/// depends on. Lookups for tokens outside the vertex set return an empty
/// neighbor slice rather than materializing an entry.
///
/// Assumes pairwise distinct token literals; duplicate handling is an
/// input-validation concern resolved before construction.
#[derive(Debug, Clone, Default)]
pub struct OverlapGraph {
    vertices: Vec<Token>,
    edges: HashMap<Token, NeighborList>,
}

impl OverlapGraph {
    /// Build the graph by testing the overlap relation for every ordered
    /// pair of distinct positions. O(n^2) in the token count; an empty
    /// input yields an empty graph.
    pub fn build(tokens: &[Token]) -> Self {
        let mut edges: HashMap<Token, NeighborList> = HashMap::new();
        for (i, a) in tokens.iter().enumerate() {
            for (j, b) in tokens.iter().enumerate() {
                if i != j && a.chains_to(b) {
                    edges.entry(a.clone()).or_default().push(b.clone());
                }
            }
        }
        Self {
            vertices: tokens.to_vec(),
            edges,
        }
    }

    /// Vertices in input order.
    pub fn vertices(&self) -> &[Token] {
        &self.vertices
    }

    /// Whether `token` is a vertex of this graph.
    pub fn contains(&self, token: &Token) -> bool {
        self.vertices.contains(token)
    }

    /// Out-neighbors of `token` in input order; empty for unknown tokens.
    pub fn neighbors(&self, token: &Token) -> &[Token] {
        self.edges.get(token).map_or(&[], |list| list.as_slice())
    }

    /// Number of out-edges of `token`.
    pub fn out_degree(&self, token: &Token) -> usize {
        self.neighbors(token).len()
    }

    /// Choose the exploration start token.
    ///
    /// Prefers the smallest literal among vertices with exactly one
    /// out-edge (a plausible chain terminus); falls back to the first
    /// vertex in input order when no such token exists. `None` only for
    /// an empty graph.
    pub fn select_start(&self) -> Option<&Token> {
        self.vertices
            .iter()
            .filter(|t| self.out_degree(t) == 1)
            .min()
            .or_else(|| self.vertices.first())
    }
}
