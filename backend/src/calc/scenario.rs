//! Scenario consolidation
//!
//! Active locations are calculated independently and summed left to
//! right in location order. Enterprise indirect overhead is added only at
//! this level and is never divided across locations.
//!
//! # Critical Invariants
//!
//! 1. `total_costs == location_costs + enterprise_indirect_total`
//! 2. Consolidated KPIs use `total_costs` (with indirect) against the
//!    summed direct costs
//! 3. Changing the enterprise indirect overhead never changes any
//!    `LocationResult`

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::calc::costs::CostBreakdown;
use crate::calc::kpi::Kpis;
use crate::calc::location::{calculate_location, LocationResult};
use crate::calc::revenue::RevenueBreakdown;
use crate::models::scenario::{EnterpriseIndirectOverhead, Scenario, TeItem};

/// Itemised enterprise indirect overhead used in a consolidation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseIndirectBreakdown {
    pub executive_compensation: f64,
    pub corporate_legal: f64,
    pub corporate_accounting: f64,
    pub corporate_insurance: f64,
    pub corporate_technology: f64,
    #[serde(rename = "customTETotal")]
    pub custom_te_total: f64,
    #[serde(rename = "customTEItems")]
    pub custom_te_items: Vec<TeItem>,
}

impl From<&EnterpriseIndirectOverhead> for EnterpriseIndirectBreakdown {
    fn from(overhead: &EnterpriseIndirectOverhead) -> Self {
        Self {
            executive_compensation: overhead.executive_compensation,
            corporate_legal: overhead.corporate_legal,
            corporate_accounting: overhead.corporate_accounting,
            corporate_insurance: overhead.corporate_insurance,
            corporate_technology: overhead.corporate_technology,
            custom_te_total: overhead.te_total(),
            custom_te_items: overhead.custom_te_items.clone(),
        }
    }
}

/// Scenario-wide totals and KPIs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedResult {
    pub total_revenue: f64,
    pub base_agency_fees: f64,
    pub husbandry_revenue: f64,
    pub commission_revenue: f64,
    pub documentation_revenue: f64,

    /// Location costs plus enterprise indirect overhead
    pub total_costs: f64,
    /// Sum of location cost totals, without enterprise indirect overhead
    pub location_costs: f64,
    pub enterprise_indirect_total: f64,
    pub enterprise_indirect_breakdown: EnterpriseIndirectBreakdown,

    pub corporate_payroll: f64,
    pub port_payroll: f64,
    pub total_benefits: f64,
    pub total_overhead: f64,
    pub total_variable_costs: f64,
    pub total_direct_costs: f64,
    pub total_location_admin_cost: f64,

    pub total_calls: u32,
    pub total_employees: u32,
    pub total_funds_flow: f64,

    #[serde(flatten)]
    pub kpis: Kpis,

    /// Summed revenue breakdown of the active locations
    pub revenue_breakdown: RevenueBreakdown,
    /// Summed cost breakdown of the active locations
    pub cost_breakdown: CostBreakdown,
}

/// Per-location results and the consolidation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Results of active locations, in scenario order
    pub location_results: Vec<LocationResult>,
    pub consolidated: ConsolidatedResult,
}

/// Consolidate a set of location results with enterprise indirect overhead
pub fn consolidate(
    location_results: &[LocationResult],
    enterprise_indirect: &EnterpriseIndirectOverhead,
) -> ConsolidatedResult {
    let mut revenue = RevenueBreakdown::default();
    let mut costs = CostBreakdown::default();
    let mut total_calls = 0u32;

    for result in location_results {
        revenue += &result.revenue;
        costs += &result.costs;
        total_calls = total_calls.saturating_add(result.total_calls);
    }
    costs.variable_cost_per_call = if total_calls > 0 {
        costs.total_variable_costs / total_calls as f64
    } else {
        0.0
    };

    let enterprise_indirect_total = enterprise_indirect.total();
    let total_costs = costs.total + enterprise_indirect_total;
    let kpis = Kpis::calculate(revenue.total, total_costs, costs.direct_costs, total_calls);

    ConsolidatedResult {
        total_revenue: revenue.total,
        base_agency_fees: revenue.base_agency_fees,
        husbandry_revenue: revenue.husbandry_revenue,
        commission_revenue: revenue.commission_revenue,
        documentation_revenue: revenue.documentation_revenue,
        total_costs,
        location_costs: costs.total,
        enterprise_indirect_total,
        enterprise_indirect_breakdown: EnterpriseIndirectBreakdown::from(enterprise_indirect),
        corporate_payroll: costs.corporate_payroll,
        port_payroll: costs.port_payroll,
        total_benefits: costs.total_benefits,
        total_overhead: costs.total_overhead,
        total_variable_costs: costs.total_variable_costs,
        total_direct_costs: costs.direct_costs,
        total_location_admin_cost: costs.location_admin_cost,
        total_calls,
        total_employees: costs.employee_count,
        total_funds_flow: revenue.funds_flow,
        kpis,
        revenue_breakdown: revenue,
        cost_breakdown: costs,
    }
}

/// Calculate every active location and consolidate the scenario
pub fn calculate_scenario(scenario: &Scenario) -> ScenarioResult {
    let _span = debug_span!("calculate_scenario", scenario = %scenario.id).entered();

    let location_results: Vec<LocationResult> = scenario
        .active_locations()
        .map(|location| calculate_location(location, &scenario.global_assumptions))
        .collect();

    let consolidated = consolidate(&location_results, &scenario.enterprise_indirect);

    debug!(
        locations = location_results.len(),
        revenue = consolidated.total_revenue,
        costs = consolidated.total_costs,
        indirect = consolidated.enterprise_indirect_total,
        "scenario consolidated"
    );

    ScenarioResult {
        location_results,
        consolidated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::{Location, LocationType};
    use crate::models::overhead::Overhead;
    use crate::models::scenario::ModelType;
    use crate::models::ship_type::ShipTypeEntry;

    fn office(name: &str, calls: u32) -> Location {
        Location::new(name, LocationType::PortOffice)
            .with_overhead(Overhead::empty())
            .with_ship_type(ShipTypeEntry::new("Grain", calls, 1_000.0, 10_000.0))
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = Scenario::new("Empty", ModelType::Traditional)
            .with_enterprise_indirect(EnterpriseIndirectOverhead::zero());
        let result = calculate_scenario(&scenario);
        assert!(result.location_results.is_empty());
        assert_eq!(result.consolidated.total_costs, 0.0);
        assert_eq!(result.consolidated.kpis, Kpis::default());
    }

    #[test]
    fn test_indirect_added_only_at_scenario_level() {
        let scenario = Scenario::new("Two offices", ModelType::Traditional)
            .with_location(office("Tampa", 10))
            .with_location(office("Mobile", 20).inactive());

        let result = calculate_scenario(&scenario);
        let consolidated = &result.consolidated;

        assert_eq!(result.location_results.len(), 1);
        assert_eq!(consolidated.location_costs, 0.0);
        assert_eq!(consolidated.enterprise_indirect_total, 375_000.0);
        assert_eq!(consolidated.total_costs, 375_000.0);
        assert_eq!(consolidated.total_calls, 10);
        assert_eq!(consolidated.total_funds_flow, 100_000.0);
        assert_eq!(consolidated.kpis.total_cost_per_call, 37_500.0);
        assert_eq!(consolidated.kpis.direct_cost_per_call, 0.0);
    }
}
