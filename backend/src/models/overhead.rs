//! Location overhead
//!
//! Overhead is split into categories. Office space and variable costs
//! are computed from drivers (square footage, miles per call); the nine
//! remaining categories are open-ended maps of named line items whose
//! amounts are simply summed.
//!
//! # Defaulting
//!
//! A category missing from input takes the catalogue defaults below. A
//! category explicitly set to `null` is treated as empty.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::{
    RentRange, CLASS_A_RENT, CLASS_B_RENT, DEFAULT_COST_PER_SQFT, DEFAULT_MILES_PER_CALL,
    DEFAULT_OFFICE_SQFT, MILEAGE_REIMBURSEMENT_PER_MILE, SEDAN_COST_PER_MILE, SUV_COST_PER_MILE,
};
use crate::error::ModelError;
use crate::models::lenient;

// ============================================================================
// Itemised categories
// ============================================================================

/// Named line items within one overhead category
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OverheadCategory {
    items: BTreeMap<String, f64>,
}

impl OverheadCategory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: &[(&str, f64)]) -> Self {
        Self {
            items: items
                .iter()
                .map(|(name, amount)| (name.to_string(), *amount))
                .collect(),
        }
    }

    pub fn get(&self, item: &str) -> Option<f64> {
        self.items.get(item).copied()
    }

    /// Insert or replace a line item
    pub fn set(&mut self, item: impl Into<String>, amount: f64) {
        self.items.insert(item.into(), amount);
    }

    /// Add to a line item, creating it at zero when absent
    pub fn increase(&mut self, item: &str, amount: f64) {
        *self.items.entry(item.to_string()).or_insert(0.0) += amount;
    }

    pub fn remove(&mut self, item: &str) -> Option<f64> {
        self.items.remove(item)
    }

    /// Multiply every line item by `factor`
    pub fn scale(&mut self, factor: f64) {
        for amount in self.items.values_mut() {
            *amount *= factor;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.items.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for OverheadCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
        let items = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name, lenient::coerce_f64(&value)))
            .collect();
        Ok(Self { items })
    }
}

/// The nine itemised overhead categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverheadKind {
    Insurance,
    Technology,
    Regulatory,
    ProfessionalServices,
    OfficeOperations,
    Communications,
    EmployeeRelated,
    VehicleTransport,
    Other,
}

impl OverheadKind {
    pub const ALL: [OverheadKind; 9] = [
        OverheadKind::Insurance,
        OverheadKind::Technology,
        OverheadKind::Regulatory,
        OverheadKind::ProfessionalServices,
        OverheadKind::OfficeOperations,
        OverheadKind::Communications,
        OverheadKind::EmployeeRelated,
        OverheadKind::VehicleTransport,
        OverheadKind::Other,
    ];

    /// Key used in persisted scenarios
    pub fn key(self) -> &'static str {
        match self {
            OverheadKind::Insurance => "insurance",
            OverheadKind::Technology => "technology",
            OverheadKind::Regulatory => "regulatory",
            OverheadKind::ProfessionalServices => "professionalServices",
            OverheadKind::OfficeOperations => "officeOperations",
            OverheadKind::Communications => "communications",
            OverheadKind::EmployeeRelated => "employeeRelated",
            OverheadKind::VehicleTransport => "vehicleTransport",
            OverheadKind::Other => "other",
        }
    }
}

impl fmt::Display for OverheadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OverheadKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "officeSpace" || s == "variableCosts" {
            return Err(ModelError::ProtectedCategory(s.to_string()));
        }
        OverheadKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Computed categories
// ============================================================================

/// Commercial building class for office rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RentClass {
    ClassA,
    #[default]
    ClassB,
}

impl RentClass {
    pub fn rent_range(self) -> RentRange {
        match self {
            RentClass::ClassA => CLASS_A_RENT,
            RentClass::ClassB => CLASS_B_RENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSpace {
    #[serde(default = "default_sqft", deserialize_with = "lenient::amount")]
    pub sqft: f64,
    #[serde(default)]
    pub rent_class: RentClass,
    #[serde(default = "default_cost_per_sqft", deserialize_with = "lenient::amount")]
    pub cost_per_sqft: f64,
}

fn default_sqft() -> f64 {
    DEFAULT_OFFICE_SQFT
}

fn default_cost_per_sqft() -> f64 {
    DEFAULT_COST_PER_SQFT
}

impl Default for OfficeSpace {
    fn default() -> Self {
        Self {
            sqft: DEFAULT_OFFICE_SQFT,
            rent_class: RentClass::ClassB,
            cost_per_sqft: DEFAULT_COST_PER_SQFT,
        }
    }
}

impl OfficeSpace {
    /// Annual rent
    pub fn cost(&self) -> f64 {
        self.sqft * self.cost_per_sqft
    }
}

/// How port-call driving is paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    #[default]
    CompanySedan,
    CompanySuv,
    MileageReimbursement,
    #[serde(other)]
    Unspecified,
}

impl VehicleType {
    pub fn cost_per_mile(self) -> f64 {
        match self {
            VehicleType::CompanySedan => SEDAN_COST_PER_MILE,
            VehicleType::CompanySuv => SUV_COST_PER_MILE,
            VehicleType::MileageReimbursement | VehicleType::Unspecified => {
                MILEAGE_REIMBURSEMENT_PER_MILE
            }
        }
    }
}

/// Per-call variable cost drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "VariableCostsRecord")]
pub struct VariableCosts {
    pub miles_per_call: f64,
    pub vehicle_type: VehicleType,
    /// Cost charged per enabled port call
    pub cost_per_call: f64,
}

impl VariableCosts {
    pub fn new(miles_per_call: f64, vehicle_type: VehicleType) -> Self {
        Self {
            miles_per_call,
            vehicle_type,
            cost_per_call: miles_per_call * vehicle_type.cost_per_mile(),
        }
    }

    /// Fixed cost per call, detached from mileage
    pub fn flat(cost_per_call: f64) -> Self {
        Self {
            miles_per_call: 0.0,
            vehicle_type: VehicleType::Unspecified,
            cost_per_call,
        }
    }

    /// Recompute `cost_per_call` from miles and vehicle type
    pub fn recompute(&mut self) {
        self.cost_per_call = self.miles_per_call * self.vehicle_type.cost_per_mile();
    }
}

impl Default for VariableCosts {
    fn default() -> Self {
        Self::new(DEFAULT_MILES_PER_CALL, VehicleType::CompanySedan)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariableCostsRecord {
    #[serde(default = "default_miles_per_call", deserialize_with = "lenient::amount")]
    miles_per_call: f64,
    #[serde(default)]
    vehicle_type: VehicleType,
    #[serde(default, deserialize_with = "lenient::optional_amount")]
    cost_per_call: Option<f64>,
}

fn default_miles_per_call() -> f64 {
    DEFAULT_MILES_PER_CALL
}

impl From<VariableCostsRecord> for VariableCosts {
    fn from(record: VariableCostsRecord) -> Self {
        let mut costs = VariableCosts {
            miles_per_call: record.miles_per_call,
            vehicle_type: record.vehicle_type,
            cost_per_call: 0.0,
        };
        match record.cost_per_call {
            Some(cost_per_call) => costs.cost_per_call = cost_per_call,
            None => costs.recompute(),
        }
        costs
    }
}

// ============================================================================
// Overhead
// ============================================================================

/// All overhead for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overhead {
    pub office_space: OfficeSpace,
    pub insurance: OverheadCategory,
    pub technology: OverheadCategory,
    pub regulatory: OverheadCategory,
    pub professional_services: OverheadCategory,
    pub office_operations: OverheadCategory,
    pub communications: OverheadCategory,
    pub employee_related: OverheadCategory,
    pub vehicle_transport: OverheadCategory,
    pub other: OverheadCategory,
    pub variable_costs: VariableCosts,
}

impl Default for Overhead {
    fn default() -> Self {
        Self {
            office_space: OfficeSpace::default(),
            insurance: OverheadCategory::from_items(&[
                ("longshoremen", 25_000.0),
                ("errorsOmissions", 50_000.0),
                ("generalLiability", 15_000.0),
            ]),
            technology: OverheadCategory::from_items(&[
                ("office365", 3_600.0),
                ("erpNetSuite", 0.0), // HQ only
                ("crmDynamics", 12_000.0),
                ("specializedSaaS", 30_000.0),
            ]),
            regulatory: OverheadCategory::from_items(&[
                ("customsBond", 15_000.0),
                ("fmcLicensing", 5_000.0),
            ]),
            professional_services: OverheadCategory::from_items(&[
                ("legal", 15_000.0),
                ("accounting", 25_000.0),
                ("consulting", 10_000.0),
            ]),
            office_operations: OverheadCategory::from_items(&[
                ("utilities", 12_000.0),
                ("officeSupplies", 8_000.0),
                ("maintenanceRepairs", 6_000.0),
                ("janitorial", 8_000.0),
            ]),
            communications: OverheadCategory::from_items(&[
                ("phoneSystems", 6_000.0),
                ("mobileDevices", 4_000.0),
            ]),
            employee_related: OverheadCategory::from_items(&[
                ("trainingDevelopment", 10_000.0),
                ("recruiting", 8_000.0),
                ("travelEntertainment", 12_000.0),
            ]),
            vehicle_transport: OverheadCategory::from_items(&[
                ("vehicleMaintenance", 12_000.0),
                ("parking", 3_000.0),
            ]),
            other: OverheadCategory::from_items(&[("miscellaneous", 0.0)]),
            variable_costs: VariableCosts::default(),
        }
    }
}

impl Overhead {
    /// Overhead with no office, no line items and no variable cost
    pub fn empty() -> Self {
        Self {
            office_space: OfficeSpace {
                sqft: 0.0,
                rent_class: RentClass::ClassB,
                cost_per_sqft: 0.0,
            },
            insurance: OverheadCategory::new(),
            technology: OverheadCategory::new(),
            regulatory: OverheadCategory::new(),
            professional_services: OverheadCategory::new(),
            office_operations: OverheadCategory::new(),
            communications: OverheadCategory::new(),
            employee_related: OverheadCategory::new(),
            vehicle_transport: OverheadCategory::new(),
            other: OverheadCategory::new(),
            variable_costs: VariableCosts::flat(0.0),
        }
    }

    pub fn category(&self, kind: OverheadKind) -> &OverheadCategory {
        match kind {
            OverheadKind::Insurance => &self.insurance,
            OverheadKind::Technology => &self.technology,
            OverheadKind::Regulatory => &self.regulatory,
            OverheadKind::ProfessionalServices => &self.professional_services,
            OverheadKind::OfficeOperations => &self.office_operations,
            OverheadKind::Communications => &self.communications,
            OverheadKind::EmployeeRelated => &self.employee_related,
            OverheadKind::VehicleTransport => &self.vehicle_transport,
            OverheadKind::Other => &self.other,
        }
    }

    pub fn category_mut(&mut self, kind: OverheadKind) -> &mut OverheadCategory {
        match kind {
            OverheadKind::Insurance => &mut self.insurance,
            OverheadKind::Technology => &mut self.technology,
            OverheadKind::Regulatory => &mut self.regulatory,
            OverheadKind::ProfessionalServices => &mut self.professional_services,
            OverheadKind::OfficeOperations => &mut self.office_operations,
            OverheadKind::Communications => &mut self.communications,
            OverheadKind::EmployeeRelated => &mut self.employee_related,
            OverheadKind::VehicleTransport => &mut self.vehicle_transport,
            OverheadKind::Other => &mut self.other,
        }
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

/// Company size band used for overhead benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub fn from_headcount(total_employees: u32) -> Self {
        match total_employees {
            0..=10 => CompanySize::Small,
            11..=50 => CompanySize::Medium,
            _ => CompanySize::Large,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::Small => "Small (1-10 employees)",
            CompanySize::Medium => "Medium (11-50 employees)",
            CompanySize::Large => "Large (51-125 employees)",
        }
    }
}

/// Industry overhead amounts for a company size
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadBenchmark {
    pub size: CompanySize,
    pub professional_services: OverheadCategory,
    pub office_operations: OverheadCategory,
    pub communications: OverheadCategory,
    pub employee_related: OverheadCategory,
    pub vehicle_transport: OverheadCategory,
    pub insurance: OverheadCategory,
    pub technology: OverheadCategory,
    pub health_insurance_per_employee: f64,
}

impl OverheadBenchmark {
    pub fn for_headcount(total_employees: u32) -> Self {
        let size = CompanySize::from_headcount(total_employees);
        match size {
            CompanySize::Small => Self {
                size,
                professional_services: OverheadCategory::from_items(&[
                    ("legal", 10_000.0),
                    ("accounting", 15_000.0),
                    ("consulting", 5_000.0),
                ]),
                office_operations: OverheadCategory::from_items(&[
                    ("utilities", 6_000.0),
                    ("officeSupplies", 3_000.0),
                    ("maintenanceRepairs", 3_000.0),
                    ("janitorial", 4_000.0),
                ]),
                communications: OverheadCategory::from_items(&[
                    ("phoneSystems", 3_000.0),
                    ("mobileDevices", 2_000.0),
                ]),
                employee_related: OverheadCategory::from_items(&[
                    ("trainingDevelopment", 5_000.0),
                    ("recruiting", 3_000.0),
                    ("travelEntertainment", 6_000.0),
                ]),
                vehicle_transport: OverheadCategory::from_items(&[
                    ("vehicleMaintenance", 6_000.0),
                    ("parking", 1_500.0),
                ]),
                insurance: OverheadCategory::from_items(&[
                    ("longshoremen", 15_000.0),
                    ("errorsOmissions", 25_000.0),
                    ("generalLiability", 8_000.0),
                ]),
                // ERP and CRM are out of reach for small offices
                technology: OverheadCategory::from_items(&[
                    ("office365", 1_200.0),
                    ("erpNetSuite", 0.0),
                    ("crmDynamics", 0.0),
                    ("specializedSaaS", 10_000.0),
                ]),
                health_insurance_per_employee: 15_000.0,
            },
            CompanySize::Medium => Self {
                size,
                professional_services: OverheadCategory::from_items(&[
                    ("legal", 15_000.0),
                    ("accounting", 25_000.0),
                    ("consulting", 10_000.0),
                ]),
                office_operations: OverheadCategory::from_items(&[
                    ("utilities", 12_000.0),
                    ("officeSupplies", 8_000.0),
                    ("maintenanceRepairs", 6_000.0),
                    ("janitorial", 8_000.0),
                ]),
                communications: OverheadCategory::from_items(&[
                    ("phoneSystems", 6_000.0),
                    ("mobileDevices", 4_000.0),
                ]),
                employee_related: OverheadCategory::from_items(&[
                    ("trainingDevelopment", 10_000.0),
                    ("recruiting", 8_000.0),
                    ("travelEntertainment", 12_000.0),
                ]),
                vehicle_transport: OverheadCategory::from_items(&[
                    ("vehicleMaintenance", 12_000.0),
                    ("parking", 3_000.0),
                ]),
                insurance: OverheadCategory::from_items(&[
                    ("longshoremen", 25_000.0),
                    ("errorsOmissions", 50_000.0),
                    ("generalLiability", 15_000.0),
                ]),
                technology: OverheadCategory::from_items(&[
                    ("office365", 3_600.0),
                    ("erpNetSuite", 50_000.0),
                    ("crmDynamics", 12_000.0),
                    ("specializedSaaS", 30_000.0),
                ]),
                health_insurance_per_employee: 15_000.0,
            },
            CompanySize::Large => Self {
                size,
                professional_services: OverheadCategory::from_items(&[
                    ("legal", 25_000.0),
                    ("accounting", 40_000.0),
                    ("consulting", 20_000.0),
                ]),
                office_operations: OverheadCategory::from_items(&[
                    ("utilities", 24_000.0),
                    ("officeSupplies", 15_000.0),
                    ("maintenanceRepairs", 12_000.0),
                    ("janitorial", 16_000.0),
                ]),
                communications: OverheadCategory::from_items(&[
                    ("phoneSystems", 12_000.0),
                    ("mobileDevices", 8_000.0),
                ]),
                employee_related: OverheadCategory::from_items(&[
                    ("trainingDevelopment", 20_000.0),
                    ("recruiting", 15_000.0),
                    ("travelEntertainment", 24_000.0),
                ]),
                vehicle_transport: OverheadCategory::from_items(&[
                    ("vehicleMaintenance", 24_000.0),
                    ("parking", 6_000.0),
                ]),
                insurance: OverheadCategory::from_items(&[
                    ("longshoremen", 40_000.0),
                    ("errorsOmissions", 75_000.0),
                    ("generalLiability", 25_000.0),
                ]),
                technology: OverheadCategory::from_items(&[
                    ("office365", 7_200.0),
                    ("erpNetSuite", 100_000.0),
                    ("crmDynamics", 24_000.0),
                    ("specializedSaaS", 60_000.0),
                ]),
                // group rates
                health_insurance_per_employee: 14_000.0,
            },
        }
    }

    /// Write the benchmark into an overhead block
    ///
    /// Service, operations, communications, people and vehicle
    /// categories are replaced outright. Insurance and technology only
    /// have their benchmarked items overwritten; other items survive.
    pub fn apply_to(&self, overhead: &mut Overhead) {
        overhead.professional_services = self.professional_services.clone();
        overhead.office_operations = self.office_operations.clone();
        overhead.communications = self.communications.clone();
        overhead.employee_related = self.employee_related.clone();
        overhead.vehicle_transport = self.vehicle_transport.clone();
        for (item, amount) in self.insurance.iter() {
            overhead.insurance.set(item, amount);
        }
        for (item, amount) in self.technology.iter() {
            overhead.technology.set(item, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_coerces_values() {
        let category: OverheadCategory = serde_json::from_value(json!({
            "legal": 15000,
            "accounting": "25000",
            "consulting": null,
            "misc": "n/a"
        }))
        .unwrap();
        assert_eq!(category.get("legal"), Some(15_000.0));
        assert_eq!(category.get("accounting"), Some(25_000.0));
        assert_eq!(category.get("consulting"), Some(0.0));
        assert_eq!(category.get("misc"), Some(0.0));
    }

    #[test]
    fn test_null_category_is_empty_and_missing_is_default() {
        let overhead: Overhead = serde_json::from_value(json!({
            "insurance": null
        }))
        .unwrap();
        assert!(overhead.insurance.is_empty());
        assert_eq!(overhead.technology.get("specializedSaaS"), Some(30_000.0));
        assert_eq!(overhead.office_space.cost(), 50_000.0);
    }

    #[test]
    fn test_variable_cost_computed_when_absent() {
        let costs: VariableCosts = serde_json::from_value(json!({
            "milesPerCall": 40,
            "vehicleType": "company-suv"
        }))
        .unwrap();
        assert!((costs.cost_per_call - 30.0).abs() < 1e-9);

        let explicit: VariableCosts = serde_json::from_value(json!({
            "milesPerCall": 40,
            "vehicleType": "company-suv",
            "costPerCall": 12.5
        }))
        .unwrap();
        assert_eq!(explicit.cost_per_call, 12.5);
    }

    #[test]
    fn test_unknown_vehicle_type_uses_irs_rate() {
        let costs: VariableCosts = serde_json::from_value(json!({
            "milesPerCall": 10,
            "vehicleType": "bicycle"
        }))
        .unwrap();
        assert_eq!(costs.vehicle_type, VehicleType::Unspecified);
        assert!((costs.cost_per_call - 6.7).abs() < 1e-9);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "professionalServices".parse::<OverheadKind>().unwrap(),
            OverheadKind::ProfessionalServices
        );
        assert_eq!(
            "officeSpace".parse::<OverheadKind>(),
            Err(ModelError::ProtectedCategory("officeSpace".to_string()))
        );
        assert_eq!(
            "marketing".parse::<OverheadKind>(),
            Err(ModelError::UnknownCategory("marketing".to_string()))
        );
    }

    #[test]
    fn test_benchmark_bands() {
        assert_eq!(OverheadBenchmark::for_headcount(10).size, CompanySize::Small);
        assert_eq!(OverheadBenchmark::for_headcount(11).size, CompanySize::Medium);
        assert_eq!(OverheadBenchmark::for_headcount(51).size, CompanySize::Large);
        assert_eq!(
            OverheadBenchmark::for_headcount(80).health_insurance_per_employee,
            14_000.0
        );
    }

    #[test]
    fn test_benchmark_merges_insurance() {
        let mut overhead = Overhead::default();
        overhead.insurance.set("cargo", 7_000.0);
        OverheadBenchmark::for_headcount(5).apply_to(&mut overhead);
        assert_eq!(overhead.insurance.get("longshoremen"), Some(15_000.0));
        assert_eq!(overhead.insurance.get("cargo"), Some(7_000.0));
        assert_eq!(overhead.professional_services.get("legal"), Some(10_000.0));
    }
}
