//! Location model
//!
//! A location is one office in the agency network: the Houston HQ or a
//! port office. It owns its staffing, ship-call revenue drivers and
//! overhead. An inactive location stays in the scenario but contributes
//! nothing to any result.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::config::{
    RentRange, COMMON_AREA_FACTOR, DEFAULT_COMMISSION_MARGIN_PERCENT,
    DEFAULT_HUSBANDRY_MARGIN_PERCENT, EXECUTIVE_SQFT, MANAGER_SQFT, STAFF_SQFT,
};
use crate::error::ModelError;
use crate::models::lenient;
use crate::models::overhead::{Overhead, OverheadBenchmark, OverheadKind, RentClass};
use crate::models::ship_type::ShipTypeEntry;
use crate::models::staff::StaffEntry;

/// Kind of office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LocationType {
    #[serde(rename = "hq")]
    Hq,
    #[default]
    #[serde(rename = "port-office", alias = "satellite")]
    PortOffice,
    #[serde(rename = "virtual-satellite-office")]
    VirtualSatelliteOffice,
}

/// Which staffing group an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffGroup {
    /// HQ and administrative staff
    Corporate,
    /// Port operations staff
    Port,
}

/// Percentage markup on agency fees
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSetting {
    pub enabled: bool,
    pub margin_percent: f64,
}

impl MarginSetting {
    pub fn enabled(margin_percent: f64) -> Self {
        Self {
            enabled: true,
            margin_percent,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            margin_percent: 0.0,
        }
    }
}

/// Manually entered documentation revenue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationRevenue {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub manual_amount: f64,
}

/// Revenue drivers of a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRevenue {
    #[serde(default)]
    pub ship_types: Vec<ShipTypeEntry>,
    #[serde(default = "default_husbandry", deserialize_with = "husbandry_margin")]
    pub husbandry: MarginSetting,
    #[serde(default = "default_commission", deserialize_with = "commission_margin")]
    pub commission: MarginSetting,
    #[serde(default)]
    pub documentation: DocumentationRevenue,
}

fn default_true() -> bool {
    true
}

fn default_husbandry() -> MarginSetting {
    MarginSetting::enabled(DEFAULT_HUSBANDRY_MARGIN_PERCENT)
}

fn default_commission() -> MarginSetting {
    MarginSetting::enabled(DEFAULT_COMMISSION_MARGIN_PERCENT)
}

/// Wire shape of a margin setting; a missing margin takes the default of
/// the revenue line it belongs to
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarginRecord {
    #[serde(default = "default_true", deserialize_with = "lenient::truthy")]
    enabled: bool,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    margin_percent: Option<f64>,
}

impl MarginRecord {
    fn into_setting(self, default_margin_percent: f64) -> MarginSetting {
        MarginSetting {
            enabled: self.enabled,
            margin_percent: self.margin_percent.unwrap_or(default_margin_percent),
        }
    }
}

fn margin_with_default<'de, D>(
    deserializer: D,
    default_margin_percent: f64,
) -> Result<MarginSetting, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<MarginRecord>::deserialize(deserializer)? {
        Some(record) => record.into_setting(default_margin_percent),
        None => MarginSetting::enabled(default_margin_percent),
    })
}

fn husbandry_margin<'de, D>(deserializer: D) -> Result<MarginSetting, D::Error>
where
    D: Deserializer<'de>,
{
    margin_with_default(deserializer, DEFAULT_HUSBANDRY_MARGIN_PERCENT)
}

fn commission_margin<'de, D>(deserializer: D) -> Result<MarginSetting, D::Error>
where
    D: Deserializer<'de>,
{
    margin_with_default(deserializer, DEFAULT_COMMISSION_MARGIN_PERCENT)
}

impl Default for LocationRevenue {
    fn default() -> Self {
        Self {
            ship_types: Vec::new(),
            husbandry: default_husbandry(),
            commission: default_commission(),
            documentation: DocumentationRevenue::default(),
        }
    }
}

/// One office in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default = "generate_location_id")]
    pub id: String,
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub location_type: LocationType,
    /// US state code
    #[serde(default)]
    pub state: String,
    /// Missing means active; `null`, `0` or `false` mean inactive
    #[serde(default = "default_true", deserialize_with = "lenient::truthy")]
    pub active: bool,
    #[serde(default)]
    pub revenue: LocationRevenue,
    #[serde(default)]
    pub corporate_staff: Vec<StaffEntry>,
    #[serde(default)]
    pub port_staff: Vec<StaffEntry>,
    #[serde(default)]
    pub overhead: Overhead,
}

/// Generate a fresh location id (`loc-<uuid>`)
pub fn generate_location_id() -> String {
    format!("loc-{}", Uuid::new_v4().simple())
}

fn default_location_name() -> String {
    "New Location".to_string()
}

/// Office footprint recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRecommendation {
    pub workspace_sqft: u32,
    pub common_area_sqft: u32,
    pub total_sqft: u32,
    pub employee_count: u32,
}

/// Agent workload classification against the 20-30 calls/agent/month benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadStatus {
    NoWorkload,
    Underutilized,
    Optimal,
    High,
    Overworked,
}

impl WorkloadStatus {
    pub fn classify(calls_per_agent_month: f64) -> Self {
        if calls_per_agent_month <= 0.0 {
            WorkloadStatus::NoWorkload
        } else if calls_per_agent_month < 20.0 {
            WorkloadStatus::Underutilized
        } else if calls_per_agent_month <= 30.0 {
            WorkloadStatus::Optimal
        } else if calls_per_agent_month <= 40.0 {
            WorkloadStatus::High
        } else {
            WorkloadStatus::Overworked
        }
    }
}

/// Port staff workload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadAnalysis {
    pub total_calls: u32,
    pub monthly_calls_avg: f64,
    pub agent_count: u32,
    pub ops_manager_count: u32,
    pub boarding_agent_count: u32,
    /// Ship agents count fully, ops managers at half capacity
    pub total_agent_capacity: f64,
    pub calls_per_agent_month: f64,
    pub status: WorkloadStatus,
}

impl Location {
    /// Create an active location with catalogue defaults and no staff or calls
    pub fn new(name: impl Into<String>, location_type: LocationType) -> Self {
        Self {
            id: generate_location_id(),
            name: name.into(),
            location_type,
            state: String::new(),
            active: true,
            revenue: LocationRevenue::default(),
            corporate_staff: Vec::new(),
            port_staff: Vec::new(),
            overhead: Overhead::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_overhead(mut self, overhead: Overhead) -> Self {
        self.overhead = overhead;
        self
    }

    pub fn with_ship_type(mut self, entry: ShipTypeEntry) -> Self {
        self.revenue.ship_types.push(entry);
        self
    }

    pub fn with_staff(mut self, group: StaffGroup, entry: StaffEntry) -> Self {
        self.add_staff(group, entry);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn is_hq(&self) -> bool {
        self.location_type == LocationType::Hq
    }

    pub fn enabled_ship_types(&self) -> impl Iterator<Item = &ShipTypeEntry> {
        self.revenue.ship_types.iter().filter(|st| st.enabled)
    }

    /// Annual port calls across enabled ship types
    pub fn total_calls(&self) -> u32 {
        self.enabled_ship_types()
            .fold(0u32, |sum, st| sum.saturating_add(st.calls))
    }

    pub fn staff(&self, group: StaffGroup) -> &[StaffEntry] {
        match group {
            StaffGroup::Corporate => &self.corporate_staff,
            StaffGroup::Port => &self.port_staff,
        }
    }

    fn staff_mut(&mut self, group: StaffGroup) -> &mut Vec<StaffEntry> {
        match group {
            StaffGroup::Corporate => &mut self.corporate_staff,
            StaffGroup::Port => &mut self.port_staff,
        }
    }

    pub fn enabled_staff(&self, group: StaffGroup) -> impl Iterator<Item = &StaffEntry> {
        self.staff(group).iter().filter(|s| s.enabled)
    }

    /// Headcount of enabled staff in both groups
    pub fn total_employee_count(&self) -> u32 {
        self.enabled_staff(StaffGroup::Corporate)
            .chain(self.enabled_staff(StaffGroup::Port))
            .fold(0u32, |sum, s| sum.saturating_add(s.count))
    }

    pub fn add_staff(&mut self, group: StaffGroup, entry: StaffEntry) {
        self.staff_mut(group).push(entry);
    }

    pub fn remove_staff(&mut self, group: StaffGroup, index: usize) -> Result<StaffEntry, ModelError> {
        let staff = self.staff_mut(group);
        if index >= staff.len() {
            return Err(ModelError::IndexOutOfRange {
                collection: "staff",
                index,
                len: staff.len(),
            });
        }
        Ok(staff.remove(index))
    }

    pub fn add_ship_type(&mut self, entry: ShipTypeEntry) {
        self.revenue.ship_types.push(entry);
    }

    pub fn remove_ship_type(&mut self, index: usize) -> Result<ShipTypeEntry, ModelError> {
        let ship_types = &mut self.revenue.ship_types;
        if index >= ship_types.len() {
            return Err(ModelError::IndexOutOfRange {
                collection: "ship types",
                index,
                len: ship_types.len(),
            });
        }
        Ok(ship_types.remove(index))
    }

    /// Insert or overwrite a line item in an itemised overhead category
    ///
    /// `category` is the persisted key (`"insurance"`, `"technology"`, ...).
    /// `officeSpace` and `variableCosts` are computed and rejected.
    pub fn set_overhead_item(
        &mut self,
        category: &str,
        item: impl Into<String>,
        amount: f64,
    ) -> Result<(), ModelError> {
        let kind: OverheadKind = category.parse()?;
        self.overhead.category_mut(kind).set(item, amount);
        Ok(())
    }

    pub fn remove_overhead_item(&mut self, category: &str, item: &str) -> Result<Option<f64>, ModelError> {
        let kind: OverheadKind = category.parse()?;
        Ok(self.overhead.category_mut(kind).remove(item))
    }

    /// Recompute the per-call variable cost from miles and vehicle type
    pub fn update_variable_cost_per_call(&mut self) {
        self.overhead.variable_costs.recompute();
    }

    pub fn typical_rent(&self) -> RentRange {
        self.overhead.office_space.rent_class.rent_range()
    }

    /// Switch rent class and reset cost/sqft to that class's typical rent
    pub fn set_rent_class(&mut self, rent_class: RentClass) {
        self.overhead.office_space.rent_class = rent_class;
        self.overhead.office_space.cost_per_sqft = rent_class.rent_range().typical;
    }

    /// Recommend office square footage from the enabled team
    ///
    /// Executives get 150 sqft, managers 100, everyone else 75, plus 40%
    /// for common areas.
    pub fn recommended_sqft(&self) -> SpaceRecommendation {
        let corporate: u32 = self
            .enabled_staff(StaffGroup::Corporate)
            .fold(0u32, |sum, s| {
                sum.saturating_add(s.count.saturating_mul(corporate_sqft_per_person(&s.position)))
            });
        let port: u32 = self
            .enabled_staff(StaffGroup::Port)
            .map(|s| {
                let per_person = if s.position.to_lowercase().contains("manager") {
                    MANAGER_SQFT
                } else {
                    STAFF_SQFT
                };
                s.count.saturating_mul(per_person)
            })
            .fold(0u32, u32::saturating_add);
        let workspace = corporate.saturating_add(port);
        let common_area = (workspace as f64 * COMMON_AREA_FACTOR - 1e-9).ceil().max(0.0) as u32;

        SpaceRecommendation {
            workspace_sqft: workspace,
            common_area_sqft: common_area,
            total_sqft: workspace.saturating_add(common_area),
            employee_count: self.total_employee_count(),
        }
    }

    pub fn auto_scale_office_sqft(&mut self) {
        self.overhead.office_space.sqft = self.recommended_sqft().total_sqft as f64;
    }

    /// Port calls per agent per month
    pub fn workload(&self) -> WorkloadAnalysis {
        let total_calls = self.total_calls();
        let monthly_calls_avg = total_calls as f64 / 12.0;

        let mut agent_count = 0u32;
        let mut ops_manager_count = 0u32;
        let mut boarding_agent_count = 0u32;
        let mut total_agent_capacity = 0.0;

        for staff in self.enabled_staff(StaffGroup::Port) {
            let position = staff.position.to_lowercase();
            if position.contains("ship agent") {
                agent_count = agent_count.saturating_add(staff.count);
                total_agent_capacity += staff.count as f64;
            } else if position.contains("port ops manager") || position.contains("asst ops manager") {
                // management duties leave about half their time for calls
                ops_manager_count = ops_manager_count.saturating_add(staff.count);
                total_agent_capacity += staff.count as f64 * 0.5;
            } else if position.contains("boarding agent") || position.contains("runner") {
                boarding_agent_count = boarding_agent_count.saturating_add(staff.count);
            }
        }

        let calls_per_agent_month = if total_agent_capacity > 0.0 {
            monthly_calls_avg / total_agent_capacity
        } else {
            0.0
        };

        WorkloadAnalysis {
            total_calls,
            monthly_calls_avg,
            agent_count,
            ops_manager_count,
            boarding_agent_count,
            total_agent_capacity,
            calls_per_agent_month,
            status: WorkloadStatus::classify(calls_per_agent_month),
        }
    }

    /// Overwrite overhead with industry benchmarks for this headcount
    pub fn apply_benchmark_overhead(&mut self) {
        let benchmark = OverheadBenchmark::for_headcount(self.total_employee_count());
        benchmark.apply_to(&mut self.overhead);
    }

    /// Deep copy under a new id, named "<name> (Copy)"
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_location_id(),
            name: format!("{} (Copy)", self.name),
            ..self.clone()
        }
    }
}

fn corporate_sqft_per_person(position: &str) -> u32 {
    let position = position.to_lowercase();
    let is_executive = ["ceo", "president", "cfo", "vp"]
        .iter()
        .any(|k| position.contains(k));
    let is_manager = ["manager", "controller", "supervisor"]
        .iter()
        .any(|k| position.contains(k));

    if is_executive {
        EXECUTIVE_SQFT
    } else if is_manager {
        MANAGER_SQFT
    } else {
        STAFF_SQFT
    }
}
