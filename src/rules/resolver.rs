//! Rule lookup by signal type.

use crate::models::{Rule, RuleSet};

/// Find the rule that applies to `value_type`.
///
/// Types match case-insensitively and exactly. When several rules share a
/// type, the first one in rule-set order is the only one ever consulted.
pub fn resolve<'a>(rule_set: &'a RuleSet, value_type: &str) -> Option<&'a Rule> {
    let wanted = value_type.to_uppercase();
    rule_set
        .rules
        .iter()
        .find(|rule| rule.value_type.to_uppercase() == wanted)
}
