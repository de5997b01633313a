//! Friendship graph representation

pub mod builder;

use std::collections::HashSet;

pub use builder::{assemble, GraphBuilder};

/// Undirected friendship graph with string ids interned to dense indices
///
/// Interning order is first-encounter order over the edge list, so node
/// index 0 is the first user mentioned. That order doubles as the stable
/// "iteration order" the clique search truncates on and the tie-break order
/// for pivot selection. Built once per analysis run and never mutated
/// afterward, which is what lets concurrent readers share it freely.
#[derive(Debug, Clone)]
pub struct FriendshipGraph {
    pub(crate) node_ids: Vec<String>,
    pub(crate) neighbors: Vec<HashSet<u32>>,
}

impl FriendshipGraph {
    /// Number of distinct users mentioned in any friendship
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Original string id for a node index
    pub fn node_id(&self, node: u32) -> &str {
        &self.node_ids[node as usize]
    }

    /// Neighbor set of a node
    pub fn neighbors(&self, node: u32) -> &HashSet<u32> {
        &self.neighbors[node as usize]
    }

    pub fn degree(&self, node: u32) -> usize {
        self.neighbors[node as usize].len()
    }

    /// Sum of neighbor-set sizes; counts each friendship twice
    pub fn total_degree(&self) -> usize {
        self.neighbors.iter().map(|set| set.len()).sum()
    }

    /// Number of distinct undirected friendships
    pub fn edge_count(&self) -> usize {
        self.total_degree() / 2
    }

    /// Mean neighbor-set size, 0 for the empty graph
    pub fn average_degree(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.total_degree() as f64 / self.node_count() as f64
        }
    }

    /// Node indices in interning order
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        0..self.node_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::data::Friendship;

    fn graph_of(pairs: &[(&str, &str)]) -> FriendshipGraph {
        let edges: Vec<Friendship> = pairs
            .iter()
            .map(|&(a, b)| Friendship::new(a, b))
            .collect();
        assemble(&edges, &CancelToken::new()).expect("assemble")
    }

    #[test]
    fn neighbor_membership_is_symmetric() {
        let graph = graph_of(&[("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")]);
        for node in graph.nodes() {
            for &neighbor in graph.neighbors(node) {
                assert!(
                    graph.neighbors(neighbor).contains(&node),
                    "{} -> {} not mirrored",
                    graph.node_id(node),
                    graph.node_id(neighbor)
                );
            }
        }
    }

    #[test]
    fn counts_and_average_degree() {
        let graph = graph_of(&[("a", "b"), ("b", "c")]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!((graph.average_degree() - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_graph_has_zero_average_degree() {
        let graph = graph_of(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.average_degree(), 0.0);
    }

    #[test]
    fn interning_follows_first_encounter_order() {
        let graph = graph_of(&[("x", "y"), ("y", "z")]);
        assert_eq!(graph.node_id(0), "x");
        assert_eq!(graph.node_id(1), "y");
        assert_eq!(graph.node_id(2), "z");
    }
}
