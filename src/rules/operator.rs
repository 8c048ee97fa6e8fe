//! Rule operator codes and the relational comparison each one performs.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Comparison operators a rule may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    GT,
    GTE,
    LT,
    LTE,
    EQ,
    NEQ,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::GT,
        Operator::GTE,
        Operator::LT,
        Operator::LTE,
        Operator::EQ,
        Operator::NEQ,
    ];

    /// Look up a rule operator code. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GT" => Some(Operator::GT),
            "GTE" => Some(Operator::GTE),
            "LT" => Some(Operator::LT),
            "LTE" => Some(Operator::LTE),
            "EQ" => Some(Operator::EQ),
            "NEQ" => Some(Operator::NEQ),
            _ => None,
        }
    }

    /// Look up a comparison symbol. `<>` and `==` are accepted as aliases.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Operator::GT),
            ">=" => Some(Operator::GTE),
            "<" => Some(Operator::LT),
            "<=" => Some(Operator::LTE),
            "=" | "==" => Some(Operator::EQ),
            "!=" | "<>" => Some(Operator::NEQ),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Operator::GT => "GT",
            Operator::GTE => "GTE",
            Operator::LT => "LT",
            Operator::LTE => "LTE",
            Operator::EQ => "EQ",
            Operator::NEQ => "NEQ",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::GT => ">",
            Operator::GTE => ">=",
            Operator::LT => "<",
            Operator::LTE => "<=",
            Operator::EQ => "=",
            Operator::NEQ => "!=",
        }
    }

    /// Apply the operator to `lhs <op> rhs`. NaN compares unequal to everything.
    pub fn compare(&self, lhs: f64, rhs: f64) -> bool {
        let ordering = lhs.partial_cmp(&rhs);
        match self {
            Operator::GT => ordering == Some(Ordering::Greater),
            Operator::GTE => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Operator::LT => ordering == Some(Ordering::Less),
            Operator::LTE => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Operator::EQ => ordering == Some(Ordering::Equal),
            Operator::NEQ => ordering != Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Map a rule operator code to its comparison symbol; unknown codes map to `""`.
pub fn map_operator(code: &str) -> &'static str {
    Operator::from_code(code).map(|op| op.symbol()).unwrap_or("")
}
