//! Batch signal evaluation: partitions a batch into junk and accepted.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::models::{JunkReason, RuleSet, SignalDetails};
use crate::rules::evaluator::SignalEvaluator;

/// Counts for one evaluated batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub junk: usize,
    pub by_reason: BTreeMap<JunkReason, usize>,
}

impl BatchSummary {
    pub fn accepted(&self) -> usize {
        self.total - self.junk
    }
}

/// Junk list of one batch plus its counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Junk signals in input order.
    pub junk: Vec<SignalDetails>,
    pub summary: BatchSummary,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Junk signals in input order, with the current local time as the
    /// reference for empty timestamp thresholds.
    pub fn junk_signals(rule_set: &RuleSet, signals: &[SignalDetails]) -> Vec<SignalDetails> {
        Self::evaluate(&SignalEvaluator::at_current_time(), rule_set, signals).junk
    }

    /// Junk signals in input order, evaluated against a fixed reference time.
    pub fn junk_signals_at(
        rule_set: &RuleSet,
        signals: &[SignalDetails],
        now: NaiveDateTime,
    ) -> Vec<SignalDetails> {
        Self::evaluate(&SignalEvaluator::new(now), rule_set, signals).junk
    }

    /// Evaluate every signal independently; one failure never stops the batch.
    pub fn evaluate(
        evaluator: &SignalEvaluator,
        rule_set: &RuleSet,
        signals: &[SignalDetails],
    ) -> BatchResult {
        let mut result = BatchResult {
            junk: Vec::new(),
            summary: BatchSummary {
                total: signals.len(),
                ..BatchSummary::default()
            },
        };

        for (index, signal) in signals.iter().enumerate() {
            if let Err(reason) = evaluator.evaluate(rule_set, signal) {
                debug!(
                    index = index,
                    value_type = %signal.value_type,
                    value = %signal.value,
                    reason = %reason,
                    "Signal classified as junk"
                );
                result.junk.push(signal.clone());
                result.summary.junk += 1;
                *result.summary.by_reason.entry(reason).or_insert(0) += 1;
            }
        }

        info!(
            rules = rule_set.len(),
            signals = result.summary.total,
            junk = result.summary.junk,
            "Evaluated signal batch"
        );
        result
    }
}
