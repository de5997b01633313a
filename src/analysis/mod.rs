//! Descriptive analytics over a friendship graph

pub mod cliques;
pub mod reachability;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary statistics for one dataset
///
/// Immutable once constructed; the cache hands it out behind an `Arc` so
/// concurrent readers share one copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of distinct users appearing in any friendship
    pub total_users: usize,

    /// Mean neighbor-set size over all users
    pub average_friends_per_user: f64,

    /// Hop distance to average number of nodes reached at that distance,
    /// contiguous from 1 up to the maximum observed distance
    pub average_reachable_per_distance: BTreeMap<u32, f64>,

    /// Mean size of the maximal cliques found, 0 when there are none
    pub average_maximal_clique_size: f64,
}
