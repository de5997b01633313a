//! Graph construction module

use std::collections::{HashMap, HashSet};

use crate::cancel::CancelToken;
use crate::data::Friendship;
use crate::error::AnalysisError;
use crate::graph::FriendshipGraph;

/// Builder for incrementally constructing a FriendshipGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from string ids to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string ids in interning order
    node_ids: Vec<String>,

    /// Neighbor sets for each node
    neighbors: Vec<HashSet<u32>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            neighbors: Vec::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given string id
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        // Create a new node
        let idx = self.node_ids.len() as u32;
        let id = id.to_string();
        self.node_ids.push(id.clone());
        self.id_to_index.insert(id, idx);
        self.neighbors.push(HashSet::new());

        idx
    }

    /// Record an undirected friendship between two users
    ///
    /// Both endpoints are interned on first sight and inserted into each
    /// other's neighbor set. A self-referencing pair interns the node but
    /// adds no neighbor, keeping the graph self-loop-free.
    pub fn add_friendship(&mut self, a: &str, b: &str) {
        let a_idx = self.get_or_create_node(a);
        let b_idx = self.get_or_create_node(b);

        if a_idx == b_idx {
            return;
        }

        self.neighbors[a_idx as usize].insert(b_idx);
        self.neighbors[b_idx as usize].insert(a_idx);
    }

    /// Finish building and hand over the immutable graph
    pub fn build(self) -> FriendshipGraph {
        FriendshipGraph {
            node_ids: self.node_ids,
            neighbors: self.neighbors,
        }
    }
}

/// Assemble a friendship graph from a flat edge list
///
/// Cancellation is checked on every edge so callers can abort
/// mid-construction without observing a partial graph.
pub fn assemble(
    edges: &[Friendship],
    cancel: &CancelToken,
) -> Result<FriendshipGraph, AnalysisError> {
    let mut builder = GraphBuilder::with_capacity(edges.len() * 2);
    for edge in edges {
        cancel.check()?;
        builder.add_friendship(&edge.user_a, &edge.user_b);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_edge_list_yields_empty_graph() {
        let graph = assemble(&[], &CancelToken::new()).expect("assemble");
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_edges_collapse_into_one_friendship() {
        let edges = vec![
            Friendship::new("a", "b"),
            Friendship::new("a", "b"),
            Friendship::new("b", "a"),
        ];
        let graph = assemble(&edges, &CancelToken::new()).expect("assemble");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn reinterning_an_id_returns_the_existing_index() {
        let mut builder = GraphBuilder::new();
        let first = builder.get_or_create_node("a");
        let second = builder.get_or_create_node("b");
        assert_eq!(builder.get_or_create_node("a"), first);
        assert_eq!(builder.get_or_create_node("b"), second);

        let graph = builder.build();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_id(first), "a");
        assert_eq!(graph.node_id(second), "b");
    }

    #[test]
    fn self_referencing_edge_interns_node_without_self_loop() {
        let edges = vec![Friendship::new("a", "a"), Friendship::new("a", "b")];
        let graph = assemble(&edges, &CancelToken::new()).expect("assemble");
        assert_eq!(graph.node_count(), 2);
        assert!(!graph.neighbors(0).contains(&0));
        assert_eq!(graph.degree(0), 1);
    }

    #[test]
    fn cancellation_aborts_assembly() {
        let edges = vec![Friendship::new("a", "b")];
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = assemble(&edges, &cancel).unwrap_err();
        assert!(matches!(err, AnalysisError::Canceled));
    }
}
