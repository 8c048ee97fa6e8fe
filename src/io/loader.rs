use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::LoadError;
use crate::models::{RuleSet, SignalDetails};

pub fn parse_rule_set(json: &str) -> Result<RuleSet, LoadError> {
    parse_json(json, "rule set")
}

pub fn parse_signals(json: &str) -> Result<Vec<SignalDetails>, LoadError> {
    parse_json(json, "signal batch")
}

/// Read a rule file of the form `{"RuleSet": [{"ValueType", "Operator", "Value"}, ...]}`.
pub fn load_rule_set(path: impl AsRef<Path>) -> Result<RuleSet, LoadError> {
    let path = path.as_ref();
    let rule_set: RuleSet = parse_json(&read(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), rules = rule_set.len(), "Loaded rule set");
    Ok(rule_set)
}

/// Read a signal file of the form `[{"value_type", "value"}, ...]`.
pub fn load_signals(path: impl AsRef<Path>) -> Result<Vec<SignalDetails>, LoadError> {
    let path = path.as_ref();
    let signals: Vec<SignalDetails> = parse_json(&read(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), signals = signals.len(), "Loaded signals");
    Ok(signals)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, origin: &str) -> Result<T, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}
