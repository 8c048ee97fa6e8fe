//! Unit tests for batch evaluation

use chrono::{NaiveDate, NaiveDateTime};
use junkfilter::models::{JunkReason, Rule, RuleSet, SignalDetails};
use junkfilter::rules::SignalEvaluator;
use junkfilter::signals::SignalEngine;

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 30)
        .unwrap()
}

fn create_rule_set() -> RuleSet {
    RuleSet::new(vec![
        Rule::new("INTEGER", "GT", "10"),
        Rule::new("DATETIME", "EQ", ""),
        Rule::new("SIGNAL", "GTE", "1"),
        Rule::new("VOLTAGE", "BETWEEN", "1"),
        Rule::new("TEMPERATURE", "LT", ""),
    ])
}

fn create_batch() -> Vec<SignalDetails> {
    vec![
        SignalDetails::new("integer", "15"), // accepted
        SignalDetails::new("PRESSURE", "3"), // no rule
        SignalDetails::new("Integer", "5"), // not satisfied
        SignalDetails::new("SIGNAL", "HIGH"), // accepted
        SignalDetails::new("DATETIME", "2001-01-01"), // seconds component != 0
        SignalDetails::new("VOLTAGE", "HIGH"), // malformed
        SignalDetails::new("DATETIME", "2024-05-01 11:00:30"), // accepted
        SignalDetails::new("TEMPERATURE", "LOW"), // empty threshold
        SignalDetails::new("DATETIME", "garbage"), // parse failure
    ]
}

#[test]
fn test_junk_list_preserves_input_order() {
    let junk = SignalEngine::junk_signals_at(&create_rule_set(), &create_batch(), reference_time());
    assert_eq!(
        junk,
        vec![
            SignalDetails::new("PRESSURE", "3"),
            SignalDetails::new("Integer", "5"),
            SignalDetails::new("DATETIME", "2001-01-01"),
            SignalDetails::new("VOLTAGE", "HIGH"),
            SignalDetails::new("TEMPERATURE", "LOW"),
            SignalDetails::new("DATETIME", "garbage"),
        ]
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let rules = create_rule_set();
    let batch = create_batch();
    let first = SignalEngine::junk_signals_at(&rules, &batch, reference_time());
    let second = SignalEngine::junk_signals_at(&rules, &batch, reference_time());
    assert_eq!(first, second);
}

#[test]
fn test_summary_counts_reasons() {
    let evaluator = SignalEvaluator::new(reference_time());
    let result = SignalEngine::evaluate(&evaluator, &create_rule_set(), &create_batch());
    let summary = result.summary;

    assert_eq!(summary.total, 9);
    assert_eq!(summary.junk, 6);
    assert_eq!(summary.accepted(), 3);
    assert_eq!(summary.by_reason[&JunkReason::NoApplicableRule], 1);
    assert_eq!(summary.by_reason[&JunkReason::RuleNotSatisfied], 2);
    assert_eq!(summary.by_reason[&JunkReason::MalformedExpression], 1);
    assert_eq!(summary.by_reason[&JunkReason::EmptyRuleThreshold], 1);
    assert_eq!(summary.by_reason[&JunkReason::ParseFailure], 1);
    assert_eq!(result.junk.len(), summary.junk);
}

#[test]
fn test_empty_rule_set_marks_everything_junk() {
    let batch = create_batch();
    let junk = SignalEngine::junk_signals(&RuleSet::default(), &batch);
    assert_eq!(junk, batch);
}

#[test]
fn test_empty_batch() {
    let junk = SignalEngine::junk_signals(&create_rule_set(), &[]);
    assert!(junk.is_empty());
}

#[test]
fn test_inputs_are_not_mutated() {
    let rules = create_rule_set();
    let batch = create_batch();
    let before = (rules.clone(), batch.clone());
    let _ = SignalEngine::junk_signals_at(&rules, &batch, reference_time());
    assert_eq!((rules, batch), before);
}
