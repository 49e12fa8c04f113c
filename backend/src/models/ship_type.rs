//! Ship-type call volumes
//!
//! A location bills agency fees per port call, broken down by ship
//! category. Disabled entries stay in the data but drop out of every
//! aggregate.

use serde::{Deserialize, Serialize};

use crate::config::ShipTypePreset;
use crate::models::lenient;

/// Annual call volume and per-call economics for one ship category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipTypeEntry {
    #[serde(rename = "type", default)]
    pub ship_type: String,

    /// Annual port calls
    #[serde(default, deserialize_with = "lenient::count")]
    pub calls: u32,

    /// Agency fee earned per call
    #[serde(default, deserialize_with = "lenient::amount")]
    pub fee_per_call: f64,

    /// Client disbursement funds handled per call (pass-through, not revenue)
    #[serde(default, deserialize_with = "lenient::amount")]
    pub funds_per_call: f64,

    #[serde(default = "default_enabled", deserialize_with = "lenient::flag")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ShipTypeEntry {
    pub fn new(ship_type: impl Into<String>, calls: u32, fee_per_call: f64, funds_per_call: f64) -> Self {
        Self {
            ship_type: ship_type.into(),
            calls,
            fee_per_call,
            funds_per_call,
            enabled: true,
        }
    }

    /// Build an entry from a catalogue preset
    pub fn from_preset(preset: &ShipTypePreset, calls: u32) -> Self {
        Self::new(preset.name, calls, preset.fee_per_call, preset.funds_per_call)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Agency fees billed across all calls
    pub fn fees(&self) -> f64 {
        self.calls as f64 * self.fee_per_call
    }

    /// Client funds flowing through across all calls
    pub fn funds_flow(&self) -> f64 {
        self.calls as f64 * self.funds_per_call
    }
}
