//! Service plumbing around the evaluation engine.

pub mod http;

pub use http::*;
