//! Threshold rule definitions as they appear in the rule file.

use serde::{Deserialize, Serialize};

use super::lenient_string;

/// One acceptance rule: signals whose type equals `value_type` must satisfy
/// `<signal> <operator> <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "ValueType", default, deserialize_with = "lenient_string")]
    pub value_type: String,
    /// Raw operator code (`GT`, `GTE`, `LT`, `LTE`, `EQ`, `NEQ`). Unknown
    /// codes are kept so they can fail per signal instead of at load time.
    #[serde(rename = "Operator", default, deserialize_with = "lenient_string")]
    pub operator: String,
    #[serde(rename = "Value", default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl Rule {
    pub fn new(
        value_type: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            value_type: value_type.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// True when the rule carries no usable threshold.
    pub fn has_empty_threshold(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Ordered rule collection. Order matters: the first rule for a type wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "RuleSet", default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}
