//! In-memory edge lists

use std::collections::HashMap;

use crate::cancel::CancelToken;
use crate::data::{EdgeSource, Friendship};
use crate::error::AnalysisError;

/// Edge source over already-loaded edge lists
///
/// Useful when the edges were read once up front and several consumers
/// need them, so nothing re-reads the underlying file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEdgeSource {
    datasets: HashMap<String, Vec<Friendship>>,
}

impl InMemoryEdgeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset identifier and its edge list
    pub fn insert(&mut self, dataset_id: impl Into<String>, edges: Vec<Friendship>) {
        self.datasets.insert(dataset_id.into(), edges);
    }
}

impl EdgeSource for InMemoryEdgeSource {
    fn edges(
        &self,
        dataset_id: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Friendship>, AnalysisError> {
        cancel.check()?;
        self.datasets
            .get(dataset_id)
            .cloned()
            .ok_or_else(|| AnalysisError::DatasetNotFound(dataset_id.to_string()))
    }
}
