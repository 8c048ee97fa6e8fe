//! Per-signal acceptance decision.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::models::{JunkReason, Rule, RuleSet, SignalDetails};
use crate::rules::datetime::{parse_datetime, seconds_component};
use crate::rules::expression::Expression;
use crate::rules::operator::Operator;
use crate::rules::resolver::resolve;
use crate::rules::strength::strength_key;
use crate::rules::value_kind::ValueKind;

/// Decides whether a single signal satisfies its rule.
///
/// The evaluator carries the reference time that empty timestamp thresholds
/// default to, so every signal in a batch sees the same "now".
#[derive(Debug, Clone, Copy)]
pub struct SignalEvaluator {
    now: NaiveDateTime,
}

impl SignalEvaluator {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Evaluator pinned to the current local time.
    pub fn at_current_time() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Resolve the signal's rule and evaluate against it.
    ///
    /// `Ok(())` means accepted; any `Err` means junk.
    pub fn evaluate(&self, rule_set: &RuleSet, signal: &SignalDetails) -> Result<(), JunkReason> {
        let rule = resolve(rule_set, &signal.value_type).ok_or(JunkReason::NoApplicableRule)?;
        self.evaluate_against(rule, signal)
    }

    /// Evaluate a signal against an already resolved rule.
    pub fn evaluate_against(&self, rule: &Rule, signal: &SignalDetails) -> Result<(), JunkReason> {
        let kind = ValueKind::of(&signal.value_type);

        if rule.has_empty_threshold() && !kind.allows_empty_threshold() {
            return Err(JunkReason::EmptyRuleThreshold);
        }

        let expression = self.build_expression(kind, rule, signal)?;

        match expression.evaluate() {
            Ok(true) => Ok(()),
            Ok(false) => Err(JunkReason::RuleNotSatisfied),
            Err(e) => {
                debug!(error = %e, expression = %expression, "Expression could not be evaluated");
                Err(JunkReason::MalformedExpression)
            }
        }
    }

    /// Build the comparison for `signal` under `rule`.
    ///
    /// Conversion failures of the threshold or the signal value are
    /// reported as [`JunkReason::ParseFailure`].
    pub fn build_expression(
        &self,
        kind: ValueKind,
        rule: &Rule,
        signal: &SignalDetails,
    ) -> Result<Expression, JunkReason> {
        let operator = Operator::from_code(&rule.operator);

        match kind {
            ValueKind::Integer => {
                let threshold: i32 = rule.value.trim().parse().map_err(|_| {
                    debug!(threshold = %rule.value, "Integer threshold is not a 32-bit integer");
                    JunkReason::ParseFailure
                })?;
                Ok(Expression::new(
                    signal.value.clone(),
                    operator,
                    threshold.to_string(),
                ))
            }
            ValueKind::DateTime => {
                let rule_time = if rule.has_empty_threshold() {
                    self.now
                } else {
                    parse_datetime(&rule.value).ok_or_else(|| {
                        debug!(threshold = %rule.value, "Timestamp threshold is not a date/time");
                        JunkReason::ParseFailure
                    })?
                };
                let signal_time = parse_datetime(&signal.value).ok_or_else(|| {
                    debug!(value = %signal.value, "Signal value is not a date/time");
                    JunkReason::ParseFailure
                })?;
                let seconds = seconds_component(signal_time, rule_time);
                Ok(Expression::new(seconds.to_string(), operator, "0"))
            }
            ValueKind::Strength => Ok(Expression::new(
                strength_key(&signal.value).to_string(),
                operator,
                rule.value.clone(),
            )),
        }
    }
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self::at_current_time()
    }
}
