//! Scenario persistence
//!
//! The calculation core treats persistence as an opaque collaborator.
//! [`ScenarioStore`] is the seam; [`MemoryStore`] keeps each scenario as
//! its serialized JSON so every load is a full round trip.

pub mod fingerprint;
pub mod portable;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModelError;
use crate::models::scenario::{ModelType, Scenario};

pub use fingerprint::{compute_hash, scenario_fingerprint};
pub use portable::{export_scenario, import_scenario};

/// Listing entry for a stored scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMeta {
    pub id: String,
    pub name: String,
    pub model_type: ModelType,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl From<&Scenario> for ScenarioMeta {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            model_type: scenario.model_type,
            created: scenario.created,
            last_modified: scenario.last_modified,
        }
    }
}

/// Size of the store contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub scenario_count: usize,
    pub bytes: usize,
}

/// Object store of scenarios keyed by id
pub trait ScenarioStore {
    /// Insert, or replace the scenario with the same id
    fn save(&mut self, scenario: &Scenario) -> Result<(), ModelError>;

    fn load(&self, id: &str) -> Result<Scenario, ModelError>;

    /// Metadata of every stored scenario, in insertion order
    fn list(&self) -> Result<Vec<ScenarioMeta>, ModelError>;

    /// Remove a scenario; `false` when it was not stored
    fn delete(&mut self, id: &str) -> Result<bool, ModelError>;

    /// Remove every scenario and the current selection
    fn clear(&mut self) -> Result<(), ModelError>;

    fn set_current(&mut self, id: &str) -> Result<(), ModelError>;

    fn current_id(&self) -> Option<&str>;

    fn load_current(&self) -> Result<Option<Scenario>, ModelError> {
        self.current_id().map(|id| self.load(id)).transpose()
    }
}

/// In-memory store holding serialized scenarios
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(String, String)>,
    current: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage_info(&self) -> StorageInfo {
        StorageInfo {
            scenario_count: self.entries.len(),
            bytes: self.entries.iter().map(|(_, json)| json.len()).sum(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| entry_id == id)
    }
}

impl ScenarioStore for MemoryStore {
    fn save(&mut self, scenario: &Scenario) -> Result<(), ModelError> {
        let json = serde_json::to_string(scenario)?;
        match self.position(&scenario.id) {
            Some(index) => self.entries[index].1 = json,
            None => self.entries.push((scenario.id.clone(), json)),
        }
        debug!(scenario = %scenario.id, name = %scenario.name, "saved scenario");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Scenario, ModelError> {
        let (_, json) = self
            .entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .ok_or_else(|| ModelError::ScenarioNotFound(id.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }

    fn list(&self) -> Result<Vec<ScenarioMeta>, ModelError> {
        self.entries
            .iter()
            .map(|(_, json)| serde_json::from_str::<ScenarioMeta>(json).map_err(ModelError::from))
            .collect()
    }

    fn delete(&mut self, id: &str) -> Result<bool, ModelError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.entries.remove(index);
        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
        debug!(scenario = %id, "deleted scenario");
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), ModelError> {
        self.entries.clear();
        self.current = None;
        Ok(())
    }

    fn set_current(&mut self, id: &str) -> Result<(), ModelError> {
        if self.position(id).is_none() {
            return Err(ModelError::ScenarioNotFound(id.to_string()));
        }
        self.current = Some(id.to_string());
        Ok(())
    }

    fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
