//! Time-bounded cache of analysis results

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::analysis::AnalysisReport;

/// One cached result; superseded wholesale by any later store for the key
struct CacheEntry {
    report: Arc<AnalysisReport>,
    expires_at: Instant,
}

/// Maps dataset ids to their most recently computed report
///
/// Expiry is lazy: an entry past its TTL is invisible to `lookup` and gets
/// dropped by the lookup that notices it; there is no background sweep.
/// There is also no per-key single-flight, so two concurrent misses may
/// both recompute and the later store wins. Both computations are
/// idempotent over the same edge set, so that is wasteful but not unsafe.
#[derive(Default)]
pub struct AnalysisCache {
    entries: DashMap<String, CacheEntry>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live report for a dataset, if any
    pub fn lookup(&self, dataset_id: &str) -> Option<Arc<AnalysisReport>> {
        let now = Instant::now();
        {
            let entry = self.entries.get(dataset_id)?;
            if entry.expires_at > now {
                return Some(Arc::clone(&entry.report));
            }
            // guard dropped here; removal below takes a write lock
        }
        self.entries
            .remove_if(dataset_id, |_, entry| entry.expires_at <= now);
        None
    }

    /// Store a freshly computed report, replacing any previous entry
    pub fn store(&self, dataset_id: &str, report: Arc<AnalysisReport>, ttl: Duration) {
        self.entries.insert(
            dataset_id.to_string(),
            CacheEntry {
                report,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}
