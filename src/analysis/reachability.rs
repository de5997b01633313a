//! Sampled reachability estimation via concurrent BFS

use std::collections::{BTreeMap, VecDeque};

use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::graph::FriendshipGraph;

const UNREACHED: u32 = u32::MAX;

/// Estimate the average number of nodes reachable at each hop distance
///
/// Source nodes are drawn by shuffling with a fixed seed and taking the
/// first `sample_size`, so reruns over the same graph sample the same nodes
/// and produce identical averages. This is a reproducibility contract for
/// tests and audits, not a security property. One BFS runs per sampled
/// node; runs are independent and execute concurrently on the rayon pool.
///
/// The result maps every distance from 1 to the maximum observed across the
/// sample; distances with no observations in that range report 0.0.
pub fn average_reachable_per_distance(
    graph: &FriendshipGraph,
    config: &AnalysisConfig,
    cancel: &CancelToken,
) -> Result<BTreeMap<u32, f64>, AnalysisError> {
    let total_nodes = graph.node_count();
    let sample_size = if total_nodes > config.sample_population_threshold {
        config.sample_cap.min(total_nodes)
    } else {
        total_nodes
    };

    if sample_size == 0 {
        return Ok(BTreeMap::new());
    }
    log::info!(
        "Sampling {} of {} nodes for reachability estimation",
        sample_size,
        total_nodes
    );

    let mut nodes: Vec<u32> = graph.nodes().collect();
    let mut rng = StdRng::seed_from_u64(config.sample_seed);
    nodes.shuffle(&mut rng);
    nodes.truncate(sample_size);

    // Counts (sampled source, reached node) pairs per distance. Entry
    // updates are synchronized per shard, so increments from concurrent
    // BFS runs are never lost.
    let distance_counts: DashMap<u32, u64> = DashMap::new();

    nodes
        .par_iter()
        .try_for_each(|&source| -> Result<(), AnalysisError> {
            let distances = bfs(graph, source, cancel)?;
            for dist in distances {
                if dist != UNREACHED && dist > 0 {
                    *distance_counts.entry(dist).or_insert(0) += 1;
                }
            }
            Ok(())
        })?;

    let max_distance = distance_counts
        .iter()
        .map(|entry| *entry.key())
        .max()
        .unwrap_or(0);

    let mut averages = BTreeMap::new();
    for dist in 1..=max_distance {
        let count = distance_counts
            .get(&dist)
            .map(|entry| *entry.value())
            .unwrap_or(0);
        averages.insert(dist, count as f64 / sample_size as f64);
    }

    log::info!(
        "Computed reachability averages up to distance {}",
        max_distance
    );
    Ok(averages)
}

/// Unweighted BFS distances from `source`; unreached nodes stay `UNREACHED`
///
/// The cancellation flag is checked at every dequeue.
fn bfs(
    graph: &FriendshipGraph,
    source: u32,
    cancel: &CancelToken,
) -> Result<Vec<u32>, AnalysisError> {
    let mut distances = vec![UNREACHED; graph.node_count()];
    let mut queue = VecDeque::new();

    distances[source as usize] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        cancel.check()?;
        let next_dist = distances[current as usize] + 1;
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor as usize] == UNREACHED {
                distances[neighbor as usize] = next_dist;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(distances)
}
