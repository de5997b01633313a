//! Analysis orchestration: cache check, graph assembly, and algorithm fan-out

use std::sync::Arc;

use crate::analysis::{cliques, reachability, AnalysisReport};
use crate::cache::AnalysisCache;
use crate::cancel::CancelToken;
use crate::config::AnalysisConfig;
use crate::data::EdgeSource;
use crate::error::AnalysisError;
use crate::graph;

/// Public entry point for dataset analytics
///
/// Holds the edge source and the shared result cache. Each request either
/// returns the cached report or computes a fresh one, stores it, and
/// returns it.
pub struct Analyzer<S> {
    source: S,
    cache: AnalysisCache,
    config: AnalysisConfig,
}

impl<S: EdgeSource> Analyzer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, AnalysisConfig::default())
    }

    pub fn with_config(source: S, config: AnalysisConfig) -> Self {
        Self {
            source,
            cache: AnalysisCache::new(),
            config,
        }
    }

    /// The edge source backing this analyzer
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Compute (or fetch from cache) the analytics report for a dataset
    ///
    /// On a cache hit the edge source is never consulted and no algorithm
    /// runs. On any failure or cancellation nothing is cached and the
    /// error propagates to the caller unchanged.
    pub fn compute_analysis(
        &self,
        dataset_id: &str,
        cancel: &CancelToken,
    ) -> Result<Arc<AnalysisReport>, AnalysisError> {
        log::info!("Starting analysis for dataset '{}'", dataset_id);

        if let Some(report) = self.cache.lookup(dataset_id) {
            log::info!("Returning cached analysis result for dataset '{}'", dataset_id);
            return Ok(report);
        }

        let edges = self.source.edges(dataset_id, cancel)?;
        log::info!(
            "Retrieved {} friendships for dataset '{}'",
            edges.len(),
            dataset_id
        );

        let graph = graph::assemble(&edges, cancel)?;
        let total_users = graph.node_count();
        let average_friends_per_user = graph.average_degree();
        log::info!(
            "Graph constructed: {} users, average {:.3} friends per user",
            total_users,
            average_friends_per_user
        );

        // Both passes only read the immutable graph, so they can run side
        // by side on the pool.
        let (reachable, found) = rayon::join(
            || reachability::average_reachable_per_distance(&graph, &self.config, cancel),
            || cliques::maximal_cliques(&graph, &self.config, cancel),
        );
        let average_reachable_per_distance = reachable?;
        let found = found?;
        let average_maximal_clique_size = cliques::average_clique_size(&found);
        log::info!(
            "Found {} maximal cliques, average size {:.3}",
            found.len(),
            average_maximal_clique_size
        );

        let report = Arc::new(AnalysisReport {
            total_users,
            average_friends_per_user,
            average_reachable_per_distance,
            average_maximal_clique_size,
        });

        self.cache
            .store(dataset_id, Arc::clone(&report), self.config.cache_ttl);
        log::info!("Analysis result cached for dataset '{}'", dataset_id);
        Ok(report)
    }
}
