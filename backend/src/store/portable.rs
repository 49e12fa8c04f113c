//! Scenario import/export as standalone JSON documents

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::error::ModelError;
use crate::models::scenario::{generate_scenario_id, Scenario};

/// Pretty-printed JSON document for one scenario
pub fn export_scenario(scenario: &Scenario) -> Result<String, ModelError> {
    Ok(serde_json::to_string_pretty(scenario)?)
}

/// Parse an exported scenario as a new scenario
///
/// The document must carry a non-empty `name`, a `modelType` and a
/// `locations` array. The import gets a fresh id and fresh timestamps;
/// everything else is taken from the document with the usual defaults.
pub fn import_scenario(json: &str) -> Result<Scenario, ModelError> {
    let mut value: Value = serde_json::from_str(json)?;

    let map = value
        .as_object_mut()
        .ok_or_else(|| ModelError::InvalidScenario("expected a JSON object".to_string()))?;

    match map.get("name") {
        Some(Value::String(name)) if !name.is_empty() => {}
        _ => return Err(ModelError::InvalidScenario("missing name".to_string())),
    }
    if map.get("modelType").map_or(true, Value::is_null) {
        return Err(ModelError::InvalidScenario("missing modelType".to_string()));
    }
    if !map.get("locations").map_or(false, Value::is_array) {
        return Err(ModelError::InvalidScenario("missing locations".to_string()));
    }

    let now = Value::String(Utc::now().to_rfc3339());
    map.insert("id".to_string(), Value::String(generate_scenario_id()));
    map.insert("created".to_string(), now.clone());
    map.insert("lastModified".to_string(), now);

    let scenario: Scenario = serde_json::from_value(value)?;
    debug!(scenario = %scenario.id, name = %scenario.name, "imported scenario");
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_requires_fields() {
        assert!(matches!(
            import_scenario(r#"{"modelType": "traditional", "locations": []}"#),
            Err(ModelError::InvalidScenario(_))
        ));
        assert!(matches!(
            import_scenario(r#"{"name": "X", "locations": []}"#),
            Err(ModelError::InvalidScenario(_))
        ));
        assert!(matches!(
            import_scenario(r#"{"name": "X", "modelType": "traditional"}"#),
            Err(ModelError::InvalidScenario(_))
        ));
        assert!(matches!(
            import_scenario("[1, 2]"),
            Err(ModelError::InvalidScenario(_))
        ));
        assert!(matches!(
            import_scenario("not json"),
            Err(ModelError::Serialization(_))
        ));
    }

    #[test]
    fn test_import_assigns_fresh_identity() {
        let json = r#"{
            "id": "scenario-old",
            "name": "Imported",
            "modelType": "ai-enabled",
            "created": "2020-01-01T00:00:00Z",
            "locations": []
        }"#;
        let scenario = import_scenario(json).unwrap();
        assert_ne!(scenario.id, "scenario-old");
        assert_eq!(scenario.name, "Imported");
        assert!(scenario.created.timestamp() > 1_600_000_000);
    }
}
