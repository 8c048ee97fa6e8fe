use serde::{Deserialize, Serialize};
use std::fmt;

use super::lenient_string;

/// One raw reading as received from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub value_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl SignalDetails {
    pub fn new(value_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
            value: value.into(),
        }
    }
}

/// Why a signal was classified as junk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JunkReason {
    /// No rule matches the signal's type.
    NoApplicableRule,
    /// The matching rule has no threshold and the type cannot default one.
    EmptyRuleThreshold,
    /// The threshold or the signal value could not be converted.
    ParseFailure,
    /// The comparison evaluated to false.
    RuleNotSatisfied,
    /// Unknown operator code or an expression that cannot be evaluated.
    MalformedExpression,
}

impl JunkReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            JunkReason::NoApplicableRule => "no_applicable_rule",
            JunkReason::EmptyRuleThreshold => "empty_rule_threshold",
            JunkReason::ParseFailure => "parse_failure",
            JunkReason::RuleNotSatisfied => "rule_not_satisfied",
            JunkReason::MalformedExpression => "malformed_expression",
        }
    }
}

impl fmt::Display for JunkReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
