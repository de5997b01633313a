//! Plain-text edge list loading

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::cancel::CancelToken;
use crate::data::{EdgeSource, Friendship};
use crate::error::AnalysisError;

/// Edge source backed by whitespace-separated "a b" files, one per dataset
#[derive(Debug, Clone, Default)]
pub struct TextFileEdgeSource {
    datasets: HashMap<String, PathBuf>,
}

impl TextFileEdgeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset identifier and the file holding its edge list
    pub fn register(&mut self, dataset_id: impl Into<String>, path: impl AsRef<Path>) {
        self.datasets
            .insert(dataset_id.into(), path.as_ref().to_path_buf());
    }
}

impl EdgeSource for TextFileEdgeSource {
    fn edges(
        &self,
        dataset_id: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Friendship>, AnalysisError> {
        let path = self
            .datasets
            .get(dataset_id)
            .ok_or_else(|| AnalysisError::DatasetNotFound(dataset_id.to_string()))?;

        // Check if the file exists
        if !path.exists() {
            return Err(AnalysisError::DatasetNotFound(dataset_id.to_string()));
        }

        log::info!("Reading edge list: {}", path.display());
        let reader = BufReader::new(File::open(path)?);

        let mut friendships = Vec::new();
        for line in reader.lines() {
            cancel.check()?;
            let line = line?;

            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(b), None) => friendships.push(Friendship::new(a, b)),
                _ => log::warn!(
                    "Skipping invalid line in dataset '{}': {:?}",
                    dataset_id,
                    line
                ),
            }
        }

        log::info!(
            "Loaded {} friendships for dataset '{}'",
            friendships.len(),
            dataset_id
        );
        Ok(friendships)
    }
}
