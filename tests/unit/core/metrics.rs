//! Unit tests for Prometheus metrics

use junkfilter::metrics::Metrics;
use junkfilter::models::JunkReason;
use junkfilter::signals::BatchSummary;

#[test]
fn test_record_batch_exports_counters() {
    let metrics = Metrics::new().expect("metrics initialization");
    let mut summary = BatchSummary {
        total: 4,
        junk: 3,
        ..BatchSummary::default()
    };
    summary.by_reason.insert(JunkReason::NoApplicableRule, 2);
    summary.by_reason.insert(JunkReason::ParseFailure, 1);

    metrics.record_batch(&summary);

    assert_eq!(metrics.signals_evaluated_total.get(), 4);
    let body = metrics.export().unwrap();
    assert!(body.contains("signals_evaluated_total 4"));
    assert!(body.contains(r#"junk_signals_total{reason="no_applicable_rule"} 2"#));
    assert!(body.contains(r#"junk_signals_total{reason="parse_failure"} 1"#));
}
