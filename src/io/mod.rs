//! Sourcing rule sets and signal batches.

pub mod loader;

pub use loader::{load_rule_set, load_signals, parse_rule_set, parse_signals};
