//! Configuration for the social network analyzer

use std::time::Duration;

/// Tunable limits for a single analysis run
pub struct AnalysisConfig {
    /// Maximum number of BFS source nodes sampled from large graphs
    pub sample_cap: usize,

    /// Node count above which the reachability sample is capped
    pub sample_population_threshold: usize,

    /// Fixed seed for the sample shuffle; reruns over the same graph must
    /// pick the same source nodes
    pub sample_seed: u64,

    /// Maximum number of nodes fed to the maximal-clique search
    pub clique_node_cap: usize,

    /// How long a computed result stays valid in the cache
    pub cache_ttl: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_cap: 100,
            sample_population_threshold: 1000,
            sample_seed: 12345,
            clique_node_cap: 500,
            cache_ttl: Duration::from_secs(30 * 60),
        }
    }
}
