//! Rule resolution and signal comparison.

pub mod datetime;
pub mod evaluator;
pub mod expression;
pub mod operator;
pub mod resolver;
pub mod strength;
pub mod value_kind;

pub use evaluator::SignalEvaluator;
pub use expression::{evaluate_expression, Expression};
pub use operator::{map_operator, Operator};
pub use resolver::resolve;
pub use strength::strength_key;
pub use value_kind::ValueKind;
