//! Shared data models spanning the engine layers.

pub mod rule;
pub mod signal;

pub use rule::{Rule, RuleSet};
pub use signal::{JunkReason, SignalDetails};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON string, number, boolean or null where a raw string is
/// expected. Null becomes the empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar value, found {}",
            other
        ))),
    }
}
