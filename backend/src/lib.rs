//! Ship Agency Model Core - Rust Engine
//!
//! Financial model of a ship agency network: locations with staffing,
//! port-call volumes and overhead roll up into revenue, costs, EBITDA
//! and per-call KPIs for a whole scenario.
//!
//! # Architecture
//!
//! - **models**: Domain types (Scenario, Location, StaffEntry, Overhead)
//! - **calc**: Calculation engine (location and scenario aggregation, float)
//! - **transform**: Scenario transformers (AI staffing, sensitivity)
//! - **comparison**: Scenario diffing and best-in-class ranking
//! - **store**: Persistence seam, import/export, fingerprints
//! - **export**: CSV summary sheet
//! - **config**: Defaults and catalogues
//!
//! # Critical Invariants
//!
//! 1. Calculations are pure and total: no I/O, no errors, no NaN from
//!    division by zero
//! 2. Every aggregate is the exact sum of its documented terms
//! 3. Inactive locations and disabled entries contribute nothing
//! 4. Enterprise indirect overhead is never allocated to a location

// Module declarations
pub mod calc;
pub mod comparison;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
pub mod transform;

// Re-exports for convenience
pub use calc::{
    calculate_costs, calculate_cycle_time_sensitivity, calculate_float_income, calculate_location,
    calculate_revenue, calculate_scenario, percent_change, staff_cost, ConsolidatedResult,
    CostBreakdown, CycleTimeAnalysis, FloatIncome, Kpis, LocationResult, RevenueBreakdown,
    ScenarioResult,
};
pub use comparison::{best_in_class, compare_scenarios, BestInClass, Metric, ScenarioComparison};
pub use error::ModelError;
pub use export::{csv_file_name, export_csv};
pub use models::{
    location::{Location, LocationType, StaffGroup},
    overhead::{Overhead, OverheadCategory, OverheadKind, VariableCosts, VehicleType},
    scenario::{EnterpriseIndirectOverhead, GlobalAssumptions, ModelType, Scenario, TeItem},
    ship_type::ShipTypeEntry,
    staff::{StaffEntry, StaffRole},
};
pub use store::{
    export_scenario, import_scenario, scenario_fingerprint, MemoryStore, ScenarioMeta,
    ScenarioStore,
};
pub use transform::{
    ambiguous_role_entries, apply_ai_reductions, apply_sensitivity, sensitivity_report, tornado,
    AmbiguousRoleEntry, SensitivityAdjustments, TornadoBar,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn ship_agency_model_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::functions::register(m)
}
