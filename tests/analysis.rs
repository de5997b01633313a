//! End-to-end analysis scenarios

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use social_network_analyzer::cancel::CancelToken;
use social_network_analyzer::config::AnalysisConfig;
use social_network_analyzer::data::{EdgeSource, Friendship};
use social_network_analyzer::{AnalysisError, Analyzer};

/// In-memory edge source that counts how often it is consulted
struct MockEdgeSource {
    edges: Vec<Friendship>,
    calls: AtomicUsize,
}

impl MockEdgeSource {
    fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            edges: pairs
                .iter()
                .map(|&(a, b)| Friendship::new(a, b))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EdgeSource for MockEdgeSource {
    fn edges(
        &self,
        _dataset_id: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<Friendship>, AnalysisError> {
        cancel.check()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.edges.clone())
    }
}

/// Edge source that always reports the dataset as missing
struct MissingEdgeSource;

impl EdgeSource for MissingEdgeSource {
    fn edges(
        &self,
        dataset_id: &str,
        _cancel: &CancelToken,
    ) -> Result<Vec<Friendship>, AnalysisError> {
        Err(AnalysisError::DatasetNotFound(dataset_id.to_string()))
    }
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn empty_edge_list_yields_zeroed_report() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[]));
    let report = analyzer
        .compute_analysis("empty", &CancelToken::new())
        .expect("analysis");

    assert_eq!(report.total_users, 0);
    assert_eq!(report.average_friends_per_user, 0.0);
    assert!(report.average_reachable_per_distance.is_empty());
    assert_eq!(report.average_maximal_clique_size, 0.0);
}

#[test]
fn triangle_scenario() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[("a", "b"), ("b", "c"), ("c", "a")]));
    let report = analyzer
        .compute_analysis("triangle", &CancelToken::new())
        .expect("analysis");

    assert_eq!(report.total_users, 3);
    assert!(approx(report.average_friends_per_user, 2.0));
    assert_eq!(report.average_reachable_per_distance.len(), 1);
    assert!(approx(report.average_reachable_per_distance[&1], 2.0));
    assert!(approx(report.average_maximal_clique_size, 3.0));
}

#[test]
fn path_scenario() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[("a", "b"), ("b", "c")]));
    let report = analyzer
        .compute_analysis("path", &CancelToken::new())
        .expect("analysis");

    assert_eq!(report.total_users, 3);
    assert!(approx(report.average_friends_per_user, 4.0 / 3.0));
    assert!(approx(report.average_reachable_per_distance[&1], 4.0 / 3.0));
    assert!(approx(report.average_reachable_per_distance[&2], 2.0 / 3.0));
    assert!(approx(report.average_maximal_clique_size, 2.0));
}

#[test]
fn disjoint_edges_scenario() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[("a", "b"), ("c", "d")]));
    let report = analyzer
        .compute_analysis("pairs", &CancelToken::new())
        .expect("analysis");

    assert_eq!(report.total_users, 4);
    assert!(approx(report.average_friends_per_user, 1.0));
    assert_eq!(report.average_reachable_per_distance.len(), 1);
    assert!(approx(report.average_reachable_per_distance[&1], 1.0));
    assert!(approx(report.average_maximal_clique_size, 2.0));
}

#[test]
fn second_call_within_ttl_skips_the_edge_source() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[("a", "b"), ("b", "c"), ("c", "a")]));
    let cancel = CancelToken::new();

    let first = analyzer.compute_analysis("ds", &cancel).expect("first run");
    let second = analyzer.compute_analysis("ds", &cancel).expect("second run");

    assert_eq!(*first, *second);
    assert_eq!(analyzer.source().call_count(), 1);
}

#[test]
fn expired_entry_triggers_recomputation() {
    let config = AnalysisConfig {
        cache_ttl: Duration::from_millis(1),
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::with_config(MockEdgeSource::new(&[("a", "b")]), config);
    let cancel = CancelToken::new();

    analyzer.compute_analysis("ds", &cancel).expect("first run");
    std::thread::sleep(Duration::from_millis(10));
    analyzer.compute_analysis("ds", &cancel).expect("second run");

    assert_eq!(analyzer.source().call_count(), 2);
}

#[test]
fn pre_signaled_cancellation_aborts_and_caches_nothing() {
    let analyzer = Analyzer::new(MockEdgeSource::new(&[("a", "b")]));

    let canceled = CancelToken::new();
    canceled.cancel();
    let err = analyzer.compute_analysis("ds", &canceled).unwrap_err();
    assert!(matches!(err, AnalysisError::Canceled));

    // The aborted attempt must not have stored anything: a fresh request
    // goes all the way to the edge source.
    analyzer
        .compute_analysis("ds", &CancelToken::new())
        .expect("fresh run");
    assert_eq!(analyzer.source().call_count(), 1);
}

#[test]
fn missing_dataset_propagates_unchanged() {
    let analyzer = Analyzer::new(MissingEdgeSource);
    let err = analyzer
        .compute_analysis("ghost", &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::DatasetNotFound(id) if id == "ghost"));
}

#[test]
fn separate_analyzers_produce_identical_reports() {
    let pairs = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("a", "c")];
    let cancel = CancelToken::new();

    let first = Analyzer::new(MockEdgeSource::new(&pairs))
        .compute_analysis("ds", &cancel)
        .expect("first analyzer");
    let second = Analyzer::new(MockEdgeSource::new(&pairs))
        .compute_analysis("ds", &cancel)
        .expect("second analyzer");

    assert_eq!(*first, *second);
}
