//! Value-type dispatch for signal comparison.

use std::fmt;

/// How a signal's raw value is compared against its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Numeric literal compared directly against a 32-bit integer threshold.
    Integer,
    /// Timestamp compared through the seconds component of its offset from
    /// the threshold time.
    DateTime,
    /// Categorical strength label mapped to a numeric key. Every type that
    /// is not one of the above falls here.
    Strength,
}

impl ValueKind {
    /// Classify a declared signal type, case-insensitively.
    pub fn of(value_type: &str) -> Self {
        match value_type.to_uppercase().as_str() {
            "INTEGER" => ValueKind::Integer,
            "DATETIME" => ValueKind::DateTime,
            _ => ValueKind::Strength,
        }
    }

    /// Whether an empty rule threshold has a defined default for this kind.
    pub fn allows_empty_threshold(&self) -> bool {
        matches!(self, ValueKind::DateTime)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::DateTime => "datetime",
            ValueKind::Strength => "strength",
        };
        f.write_str(name)
    }
}
