//! Friendship edge model and edge sources

pub mod memory;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::cancel::CancelToken;
use crate::error::AnalysisError;

pub use memory::InMemoryEdgeSource;
pub use text::TextFileEdgeSource;

/// An undirected friendship between two users
///
/// Carries no weight or direction. Duplicate pairs are harmless because
/// adjacency is set-based downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    pub user_a: String,
    pub user_b: String,
}

impl Friendship {
    pub fn new(user_a: impl Into<String>, user_b: impl Into<String>) -> Self {
        Self {
            user_a: user_a.into(),
            user_b: user_b.into(),
        }
    }
}

/// Supplier of the full edge list for a dataset
///
/// Implementations may fail with `DatasetNotFound` for unknown identifiers
/// and must propagate cancellation instead of returning a partial list.
pub trait EdgeSource: Send + Sync {
    fn edges(
        &self,
        dataset_id: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Friendship>, AnalysisError>;
}
