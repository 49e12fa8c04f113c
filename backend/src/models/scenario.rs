//! Scenario model
//!
//! A scenario owns every location exclusively, together with the global
//! assumptions and the enterprise-level indirect overhead. Cloning a
//! scenario is a full structural copy: nothing is shared between a
//! scenario and the scenarios derived from it.
//!
//! # Critical Invariants
//!
//! 1. Enterprise indirect overhead is never attached to a location
//! 2. `branch` produces an independent deep copy with a fresh id
//! 3. All defaults are applied here, at construction or deserialization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{
    DEFAULT_AI_ACCOUNTING_CLERK_REDUCTION, DEFAULT_AI_DOCUMENTATION_REDUCTION,
    DEFAULT_AI_OPS_ADMIN_CLERK_REDUCTION, DEFAULT_AI_TECHNOLOGY_INCREASE,
    DEFAULT_CORPORATE_ACCOUNTING, DEFAULT_CORPORATE_INSURANCE, DEFAULT_CORPORATE_LEGAL,
    DEFAULT_CORPORATE_TECHNOLOGY, DEFAULT_EXECUTIVE_COMPENSATION,
    DEFAULT_HEALTH_INSURANCE_PER_EMPLOYEE, DEFAULT_RETIREMENT_401K_PERCENT, PREDEFINED_LOCATIONS,
};
use crate::error::ModelError;
use crate::models::lenient;
use crate::models::location::{Location, LocationType};

/// Staffing model of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    #[default]
    Traditional,
    AiEnabled,
}

impl ModelType {
    pub fn label(self) -> &'static str {
        match self {
            ModelType::Traditional => "Traditional",
            ModelType::AiEnabled => "AI-Enabled",
        }
    }
}

/// Fractions of each role removed by AI-enabled staffing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiReductionFactors {
    #[serde(default = "default_documentation_staff", deserialize_with = "lenient::amount")]
    pub documentation_staff: f64,
    #[serde(default = "default_accounting_clerks", deserialize_with = "lenient::amount")]
    pub accounting_clerks: f64,
    #[serde(default = "default_ops_admin_clerks", deserialize_with = "lenient::amount")]
    pub ops_admin_clerks: f64,
    /// Flat technology spend added at HQ
    #[serde(default = "default_technology_increase", deserialize_with = "lenient::amount")]
    pub technology_increase: f64,
}

fn default_documentation_staff() -> f64 {
    DEFAULT_AI_DOCUMENTATION_REDUCTION
}

fn default_accounting_clerks() -> f64 {
    DEFAULT_AI_ACCOUNTING_CLERK_REDUCTION
}

fn default_ops_admin_clerks() -> f64 {
    DEFAULT_AI_OPS_ADMIN_CLERK_REDUCTION
}

fn default_technology_increase() -> f64 {
    DEFAULT_AI_TECHNOLOGY_INCREASE
}

impl Default for AiReductionFactors {
    fn default() -> Self {
        Self {
            documentation_staff: DEFAULT_AI_DOCUMENTATION_REDUCTION,
            accounting_clerks: DEFAULT_AI_ACCOUNTING_CLERK_REDUCTION,
            ops_admin_clerks: DEFAULT_AI_OPS_ADMIN_CLERK_REDUCTION,
            technology_increase: DEFAULT_AI_TECHNOLOGY_INCREASE,
        }
    }
}

/// Benefit rates and AI factors shared by every location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAssumptions {
    #[serde(default = "default_health_insurance", deserialize_with = "lenient::amount")]
    pub health_insurance_per_employee: f64,
    #[serde(
        rename = "retirement401kPercent",
        default = "default_retirement_401k",
        deserialize_with = "lenient::amount"
    )]
    pub retirement_401k_percent: f64,
    #[serde(default)]
    pub ai_reduction_factors: AiReductionFactors,
}

fn default_health_insurance() -> f64 {
    DEFAULT_HEALTH_INSURANCE_PER_EMPLOYEE
}

fn default_retirement_401k() -> f64 {
    DEFAULT_RETIREMENT_401K_PERCENT
}

impl Default for GlobalAssumptions {
    fn default() -> Self {
        Self {
            health_insurance_per_employee: DEFAULT_HEALTH_INSURANCE_PER_EMPLOYEE,
            retirement_401k_percent: DEFAULT_RETIREMENT_401K_PERCENT,
            ai_reduction_factors: AiReductionFactors::default(),
        }
    }
}

/// Discretionary travel & entertainment line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeItem {
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
}

impl TeItem {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Enterprise costs carried at scenario level, never allocated to a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseIndirectOverhead {
    #[serde(default = "default_executive_compensation", deserialize_with = "lenient::amount")]
    pub executive_compensation: f64,
    #[serde(default = "default_corporate_legal", deserialize_with = "lenient::amount")]
    pub corporate_legal: f64,
    #[serde(default = "default_corporate_accounting", deserialize_with = "lenient::amount")]
    pub corporate_accounting: f64,
    #[serde(default = "default_corporate_insurance", deserialize_with = "lenient::amount")]
    pub corporate_insurance: f64,
    #[serde(default = "default_corporate_technology", deserialize_with = "lenient::amount")]
    pub corporate_technology: f64,
    #[serde(rename = "customTEItems", default)]
    pub custom_te_items: Vec<TeItem>,
}

fn default_executive_compensation() -> f64 {
    DEFAULT_EXECUTIVE_COMPENSATION
}

fn default_corporate_legal() -> f64 {
    DEFAULT_CORPORATE_LEGAL
}

fn default_corporate_accounting() -> f64 {
    DEFAULT_CORPORATE_ACCOUNTING
}

fn default_corporate_insurance() -> f64 {
    DEFAULT_CORPORATE_INSURANCE
}

fn default_corporate_technology() -> f64 {
    DEFAULT_CORPORATE_TECHNOLOGY
}

impl Default for EnterpriseIndirectOverhead {
    fn default() -> Self {
        Self {
            executive_compensation: DEFAULT_EXECUTIVE_COMPENSATION,
            corporate_legal: DEFAULT_CORPORATE_LEGAL,
            corporate_accounting: DEFAULT_CORPORATE_ACCOUNTING,
            corporate_insurance: DEFAULT_CORPORATE_INSURANCE,
            corporate_technology: DEFAULT_CORPORATE_TECHNOLOGY,
            custom_te_items: Vec::new(),
        }
    }
}

impl EnterpriseIndirectOverhead {
    /// All-zero indirect overhead
    pub fn zero() -> Self {
        Self {
            executive_compensation: 0.0,
            corporate_legal: 0.0,
            corporate_accounting: 0.0,
            corporate_insurance: 0.0,
            corporate_technology: 0.0,
            custom_te_items: Vec::new(),
        }
    }

    /// Sum of the five fixed lines
    pub fn fixed_total(&self) -> f64 {
        self.executive_compensation
            + self.corporate_legal
            + self.corporate_accounting
            + self.corporate_insurance
            + self.corporate_technology
    }

    pub fn te_total(&self) -> f64 {
        self.custom_te_items.iter().map(|item| item.amount).sum()
    }

    pub fn total(&self) -> f64 {
        self.fixed_total() + self.te_total()
    }
}

/// A complete financial scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default = "generate_scenario_id")]
    pub id: String,
    #[serde(default = "default_scenario_name")]
    pub name: String,
    #[serde(default)]
    pub model_type: ModelType,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub global_assumptions: GlobalAssumptions,
    #[serde(rename = "corporateIndirectOverhead", default)]
    pub enterprise_indirect: EnterpriseIndirectOverhead,
}

/// Generate a fresh scenario id (`scenario-<uuid>`)
pub fn generate_scenario_id() -> String {
    format!("scenario-{}", Uuid::new_v4().simple())
}

fn default_scenario_name() -> String {
    "New Scenario".to_string()
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(default_scenario_name(), ModelType::Traditional)
    }
}

impl Scenario {
    /// Create an empty scenario with default assumptions
    pub fn new(name: impl Into<String>, model_type: ModelType) -> Self {
        let now = Utc::now();
        Self {
            id: generate_scenario_id(),
            name: name.into(),
            model_type,
            created: now,
            last_modified: now,
            locations: Vec::new(),
            global_assumptions: GlobalAssumptions::default(),
            enterprise_indirect: EnterpriseIndirectOverhead::default(),
        }
    }

    /// Scenario holding the standard twelve-office network
    ///
    /// The HQ starts active; port offices start inactive until they are
    /// staffed and given call volumes.
    pub fn with_predefined_locations(name: impl Into<String>, model_type: ModelType) -> Self {
        let mut scenario = Self::new(name, model_type);
        scenario.locations = PREDEFINED_LOCATIONS
            .iter()
            .map(|preset| {
                let mut location = Location::new(preset.name, preset.location_type).with_id(preset.id);
                location.state = preset.state.to_string();
                location.active = preset.location_type == LocationType::Hq;
                location
            })
            .collect();
        scenario
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_enterprise_indirect(mut self, overhead: EnterpriseIndirectOverhead) -> Self {
        self.enterprise_indirect = overhead;
        self
    }

    pub fn with_global_assumptions(mut self, assumptions: GlobalAssumptions) -> Self {
        self.global_assumptions = assumptions;
        self
    }

    pub fn add_location(&mut self, location: Location) {
        self.locations.push(location);
        self.touch();
    }

    pub fn remove_location(&mut self, location_id: &str) -> Result<Location, ModelError> {
        let index = self
            .locations
            .iter()
            .position(|l| l.id == location_id)
            .ok_or_else(|| ModelError::LocationNotFound(location_id.to_string()))?;
        let removed = self.locations.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn location(&self, location_id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == location_id)
    }

    pub fn location_mut(&mut self, location_id: &str) -> Option<&mut Location> {
        self.locations.iter_mut().find(|l| l.id == location_id)
    }

    pub fn active_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.active)
    }

    /// First location of type `hq`, if any
    pub fn hq_location(&self) -> Option<&Location> {
        self.locations.iter().find(|l| l.is_hq())
    }

    pub fn port_office_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.location_type == LocationType::PortOffice)
    }

    /// Deep copy under a new id and fresh timestamps
    ///
    /// `None` names the copy "<name> (Copy)".
    pub fn branch(&self, name: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_scenario_id(),
            name: name
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} (Copy)", self.name)),
            created: now,
            last_modified: now,
            ..self.clone()
        }
    }

    /// Mark as modified now
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
