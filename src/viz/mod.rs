//! Graph visualization data generation

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use serde_json::{json, to_string_pretty, Value};

use crate::data::Friendship;

/// Build the nodes/edges document the graph view renders
///
/// Nodes are the distinct users mentioned in any friendship, listed in
/// sorted order so output is stable across runs; edges keep the input
/// order and direction of the pairs they came from.
pub fn graph_json(edges: &[Friendship]) -> Value {
    let users: HashSet<&str> = edges
        .iter()
        .flat_map(|edge| [edge.user_a.as_str(), edge.user_b.as_str()])
        .collect();

    let nodes: Vec<Value> = users
        .into_iter()
        .sorted()
        .map(|user| {
            json!({
                "data": { "id": user, "label": format!("User {}", user) }
            })
        })
        .collect();

    let edge_values: Vec<Value> = edges
        .iter()
        .map(|edge| {
            json!({
                "data": {
                    "id": format!("{}-{}", edge.user_a, edge.user_b),
                    "source": edge.user_a,
                    "target": edge.user_b,
                }
            })
        })
        .collect();

    json!({ "nodes": nodes, "edges": edge_values })
}

/// Save the graph document to `<output_dir>/graph.json`
pub fn save_graph_json(edges: &[Friendship], output_dir: &str) -> Result<()> {
    log::info!("Generating graph visualization data");

    fs::create_dir_all(output_dir)?;
    let path = Path::new(output_dir).join("graph.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&graph_json(edges))?.as_bytes())?;

    log::info!("Graph visualization data saved");

    Ok(())
}
