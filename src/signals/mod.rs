//! Signal batch evaluation.

pub mod engine;

pub use engine::{BatchResult, BatchSummary, SignalEngine};
