//! Relational comparison expressions of the form `<lhs> <op> <rhs>`.
//!
//! Expressions are kept typed: the operator is resolved up front and both
//! operands are parsed as numbers at evaluation time. The textual form is
//! available through `Display` and `FromStr` for logging and for callers
//! that hold an expression string.

use std::fmt;
use std::str::FromStr;

use crate::error::ExpressionError;
use crate::rules::operator::Operator;

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub lhs: String,
    /// `None` when the rule's operator code did not map to a symbol.
    pub operator: Option<Operator>,
    pub rhs: String,
}

impl Expression {
    pub fn new(lhs: impl Into<String>, operator: Option<Operator>, rhs: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            operator,
            rhs: rhs.into(),
        }
    }

    /// Evaluate the comparison.
    ///
    /// Fails when the operator is missing or either operand is not a number;
    /// it never defaults to true or false.
    pub fn evaluate(&self) -> Result<bool, ExpressionError> {
        let operator = self
            .operator
            .ok_or_else(|| ExpressionError::MissingOperator(self.to_string()))?;
        let lhs = parse_operand(&self.lhs)?;
        let rhs = parse_operand(&self.rhs)?;
        Ok(operator.compare(lhs, rhs))
    }
}

fn parse_operand(raw: &str) -> Result<f64, ExpressionError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExpressionError::NonNumericOperand(trimmed.to_string()))
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operator.map(|op| op.symbol()).unwrap_or("");
        write!(f, "{} {} {}", self.lhs, symbol, self.rhs)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [lhs, symbol, rhs] => {
                let operator = Operator::from_symbol(symbol)
                    .ok_or_else(|| ExpressionError::UnsupportedOperator(symbol.to_string()))?;
                Ok(Expression::new(*lhs, Some(operator), *rhs))
            }
            [_, _] => Err(ExpressionError::MissingOperator(s.to_string())),
            _ => Err(ExpressionError::Malformed(s.to_string())),
        }
    }
}

/// Parse and evaluate a textual expression such as `"15 > 10"`.
pub fn evaluate_expression(expr: &str) -> Result<bool, ExpressionError> {
    expr.parse::<Expression>()?.evaluate()
}
