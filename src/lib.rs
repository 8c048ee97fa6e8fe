//! Junk signal filter.
//!
//! Evaluates typed threshold rules against batches of raw signal readings
//! and reports the readings that fail, have no applicable rule, or cannot
//! be parsed.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod rules;
pub mod signals;
