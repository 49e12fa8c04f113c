//! Content fingerprints for scenarios
//!
//! A fingerprint is the SHA-256 of the canonical JSON form (all object
//! keys sorted) of a value. Scenario fingerprints drop the identity and
//! bookkeeping fields first, so a branch or an import of the same
//! financial data hashes identically.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::models::scenario::Scenario;

/// Scenario fields that do not affect any calculation
const IDENTITY_FIELDS: &[&str] = &["id", "name", "created", "lastModified"];

/// Recursively sort all object keys
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

fn hash_value(value: Value) -> Result<String, ModelError> {
    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-256 (hex) of any serializable value in canonical JSON form
pub fn compute_hash<T: Serialize>(value: &T) -> Result<String, ModelError> {
    hash_value(serde_json::to_value(value)?)
}

/// SHA-256 (hex) of a scenario's financial content
///
/// Excludes the scenario id, name and timestamps. Location ids are kept.
pub fn scenario_fingerprint(scenario: &Scenario) -> Result<String, ModelError> {
    let mut value = serde_json::to_value(scenario)?;
    if let Value::Object(map) = &mut value {
        for field in IDENTITY_FIELDS {
            map.remove(*field);
        }
    }
    hash_value(value)
}
