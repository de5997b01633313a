//! Maximal clique enumeration via pivoted Bron-Kerbosch

use std::collections::HashSet;

use crate::cancel::CancelToken;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::graph::FriendshipGraph;

/// Enumerate all maximal cliques as sorted node-index sets
///
/// Graphs above `clique_node_cap` nodes are searched over the first cap
/// nodes in interning order only. This bounds the worst-case exponential
/// cost of the search; it is a sampling trade-off, not a correctness bug,
/// and cliques involving later nodes are simply not reported. Neighbor
/// sets are not truncated, so the pivot heuristic still sees full-graph
/// degrees.
pub fn maximal_cliques(
    graph: &FriendshipGraph,
    config: &AnalysisConfig,
    cancel: &CancelToken,
) -> Result<Vec<Vec<u32>>, AnalysisError> {
    let total_nodes = graph.node_count();
    let searched = total_nodes.min(config.clique_node_cap);
    if searched == 0 {
        return Ok(Vec::new());
    }
    if searched < total_nodes {
        log::warn!(
            "Graph size {} exceeds clique search cap, sampling first {} nodes",
            total_nodes,
            searched
        );
    }

    let r: HashSet<u32> = HashSet::new();
    let mut p: HashSet<u32> = (0..searched as u32).collect();
    let mut x: HashSet<u32> = HashSet::new();
    let mut cliques = Vec::new();
    bron_kerbosch(graph, &r, &mut p, &mut x, &mut cliques, cancel)?;

    log::info!("Found {} maximal cliques", cliques.len());
    Ok(cliques)
}

/// Mean clique size, 0 when no cliques were found
pub fn average_clique_size(cliques: &[Vec<u32>]) -> f64 {
    if cliques.is_empty() {
        0.0
    } else {
        cliques.iter().map(|clique| clique.len()).sum::<usize>() as f64 / cliques.len() as f64
    }
}

/// One recursion step over R (clique so far), P (candidates), X (excluded)
///
/// P and X belong to the caller's frame and are mutated across sibling
/// iterations: after each branch returns, the branched node leaves P and
/// enters X. That sequencing is what suppresses duplicate and non-maximal
/// emissions, so it must stay exactly as written. Recursion itself runs on
/// fresh copies.
fn bron_kerbosch(
    graph: &FriendshipGraph,
    r: &HashSet<u32>,
    p: &mut HashSet<u32>,
    x: &mut HashSet<u32>,
    cliques: &mut Vec<Vec<u32>>,
    cancel: &CancelToken,
) -> Result<(), AnalysisError> {
    cancel.check()?;

    if p.is_empty() && x.is_empty() {
        let mut clique: Vec<u32> = r.iter().copied().collect();
        clique.sort_unstable();
        cliques.push(clique);
        return Ok(());
    }

    // Branch only on candidates outside the pivot's neighborhood; the
    // pivot's neighbors are covered by the branch that picks the pivot.
    let candidates: Vec<u32> = match select_pivot(graph, p, x) {
        Some(pivot) => {
            let pivot_neighbors = graph.neighbors(pivot);
            p.iter()
                .copied()
                .filter(|v| !pivot_neighbors.contains(v))
                .collect()
        }
        None => p.iter().copied().collect(),
    };

    for v in candidates {
        let neighbors = graph.neighbors(v);

        let mut new_r = r.clone();
        new_r.insert(v);
        let mut new_p: HashSet<u32> = p.iter().copied().filter(|u| neighbors.contains(u)).collect();
        let mut new_x: HashSet<u32> = x.iter().copied().filter(|u| neighbors.contains(u)).collect();

        bron_kerbosch(graph, &new_r, &mut new_p, &mut new_x, cliques, cancel)?;

        p.remove(&v);
        x.insert(v);
    }

    Ok(())
}

/// Highest full-graph-degree node of P ∪ X, ties to the earliest-interned
///
/// Degree is read from the untruncated neighbor sets on purpose: the
/// original heuristic ranks pivots by global degree, which changes the
/// branching order (and therefore performance) but not the clique set.
fn select_pivot(graph: &FriendshipGraph, p: &HashSet<u32>, x: &HashSet<u32>) -> Option<u32> {
    let mut best: Option<(u32, usize)> = None;
    for &node in p.iter().chain(x.iter()) {
        let degree = graph.degree(node);
        let better = match best {
            None => true,
            Some((best_node, best_degree)) => {
                degree > best_degree || (degree == best_degree && node < best_node)
            }
        };
        if better {
            best = Some((node, degree));
        }
    }
    best.map(|(node, _)| node)
}
