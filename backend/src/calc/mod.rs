//! Financial calculation engine
//!
//! Control flow, leaves first:
//!
//! - **staff**: compensation of one staff entry
//! - **overhead**: category totals
//! - **revenue**: agency fees, markups, documentation, funds flow
//! - **costs**: payroll, benefits, overhead, variable costs and the
//!   direct / location-admin partition
//! - **kpi**: per-call and margin metrics
//! - **location**: revenue + costs + KPIs for one office
//! - **scenario**: sum of active locations plus enterprise indirect overhead
//! - **float**: interest on client funds held during the cash cycle
//!
//! All entry points are pure and total. They take the model by
//! reference and return plain numbers.

pub mod costs;
pub mod float;
pub mod kpi;
pub mod location;
pub mod overhead;
pub mod revenue;
pub mod scenario;
pub mod staff;

pub use costs::{calculate_costs, CostBreakdown};
pub use float::{
    calculate_cycle_time_sensitivity, calculate_cycle_time_sensitivity_for,
    calculate_float_income, CycleTimeAnalysis, CycleTimeResult, CyclePreset, FloatIncome,
    CYCLE_PRESETS,
};
pub use kpi::{percent_change, Kpis};
pub use location::{calculate_location, LocationResult};
pub use overhead::{category_total, OverheadTotals};
pub use revenue::{calculate_revenue, RevenueBreakdown};
pub use scenario::{
    calculate_scenario, consolidate, ConsolidatedResult, EnterpriseIndirectBreakdown,
    ScenarioResult,
};
pub use staff::{staff_cost, GroupPayroll};
