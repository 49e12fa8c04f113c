//! Integration tests for location costs and KPIs
//!
//! Tests cover:
//! - Direct / location-admin partition
//! - Overhead categories, including null and custom items
//! - Zero-call safety of per-call KPIs
//! - Inactive locations, including falsy `active` values

use serde_json::json;
use ship_agency_model_core::{
    calculate_costs, calculate_location, calculate_scenario, GlobalAssumptions, Location,
    LocationResult, LocationType, ModelType, Overhead, Scenario, ShipTypeEntry, StaffEntry,
    StaffGroup, VariableCosts,
};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// HQ with staff in both groups, default overhead and a few calls
fn staffed_hq() -> Location {
    Location::new("Houston", LocationType::Hq)
        .with_staff(StaffGroup::Corporate, StaffEntry::salaried("CFO", 275_000.0, 1))
        .with_staff(StaffGroup::Corporate, StaffEntry::hourly("Accounting Clerk", 31.25, 2))
        .with_staff(StaffGroup::Port, StaffEntry::salaried("Ship Agent", 107_500.0, 3))
        .with_staff(
            StaffGroup::Port,
            StaffEntry::hourly("Boarding Agent/Runner", 38.46, 2).with_overtime(150),
        )
        .with_ship_type(ShipTypeEntry::new("Grain", 80, 12_000.0, 135_000.0))
        .with_ship_type(ShipTypeEntry::new("Coal", 60, 9_800.0, 100_000.0))
}

// ============================================================================
// Partition
// ============================================================================

#[test]
fn test_partition_identity() {
    let costs = calculate_costs(&staffed_hq(), &GlobalAssumptions::default());

    assert_close(costs.direct_costs + costs.location_admin_cost, costs.total);
    assert_close(
        costs.direct_costs,
        costs.port_payroll + costs.port_benefits + costs.total_variable_costs,
    );
    assert_close(
        costs.location_admin_cost,
        costs.corporate_payroll + costs.corporate_benefits + costs.total_overhead,
    );
    assert_close(costs.total_benefits, costs.corporate_benefits + costs.port_benefits);
}

#[test]
fn test_headcounts_and_benefits() {
    let costs = calculate_costs(&staffed_hq(), &GlobalAssumptions::default());

    assert_eq!(costs.corporate_employee_count, 3);
    assert_eq!(costs.port_employee_count, 5);
    assert_eq!(costs.employee_count, 8);
    assert_close(costs.health_insurance, 8.0 * 15_000.0);
    assert_close(costs.retirement_401k, costs.total_payroll * 0.04);
}

#[test]
fn test_default_variable_cost_per_call() {
    let costs = calculate_costs(&staffed_hq(), &GlobalAssumptions::default());
    // 25 miles × 0.55 per mile, 140 calls
    assert_close(costs.variable_cost_per_call, 13.75);
    assert_close(costs.total_variable_costs, 1_925.0);
}

// ============================================================================
// Overhead
// ============================================================================

#[test]
fn test_overhead_from_json() {
    let location: Location = serde_json::from_value(json!({
        "name": "Norfolk",
        "type": "port-office",
        "overhead": {
            "officeSpace": { "sqft": 1000, "costPerSqft": "18.5" },
            "insurance": { "longshoremen": 1000, "cargo": 500 },
            "technology": null,
            "regulatory": {},
            "professionalServices": {},
            "officeOperations": {},
            "communications": {},
            "employeeRelated": {},
            "vehicleTransport": {},
            "other": { "misc": "250" },
            "variableCosts": { "costPerCall": 20 }
        }
    }))
    .unwrap();

    let costs = calculate_costs(&location, &GlobalAssumptions::default());
    assert_close(costs.overhead.office_space_cost, 18_500.0);
    assert_close(costs.overhead.insurance_cost, 1_500.0);
    assert_eq!(costs.overhead.technology_cost, 0.0);
    assert_close(costs.overhead.other_cost, 250.0);
    assert_close(costs.total_overhead, 20_250.0);
    assert_eq!(costs.variable_cost_per_call, 20.0);
}

// ============================================================================
// KPIs
// ============================================================================

#[test]
fn test_zero_calls_yield_zero_per_call_kpis() {
    let location = Location::new("Portland", LocationType::PortOffice)
        .with_staff(StaffGroup::Port, StaffEntry::salaried("Ship Agent", 107_500.0, 1));
    let result = calculate_location(&location, &GlobalAssumptions::default());

    assert_eq!(result.total_calls, 0);
    assert_eq!(result.kpis.revenue_per_call, 0.0);
    assert_eq!(result.kpis.total_cost_per_call, 0.0);
    assert_eq!(result.kpis.direct_cost_per_call, 0.0);
    assert_eq!(result.kpis.break_even_calls, 0.0);
    assert!(result.kpis.ebitda < 0.0);
    assert_eq!(result.kpis.ebitda_margin, 0.0);
}

#[test]
fn test_direct_delta_per_call() {
    let mut overhead = Overhead::empty();
    overhead.variable_costs = VariableCosts::flat(100.0);
    let mut location = Location::new("Savannah", LocationType::PortOffice)
        .with_overhead(overhead)
        .with_ship_type(ShipTypeEntry::new("Grain", 10, 12_000.0, 0.0));
    location.revenue.husbandry.enabled = false;
    location.revenue.commission.enabled = false;

    let result = calculate_location(&location, &GlobalAssumptions::default());
    assert_close(result.kpis.revenue_per_call, 12_000.0);
    assert_close(result.kpis.direct_cost_per_call, 100.0);
    assert_close(result.kpis.direct_delta_per_call, 11_900.0);
    assert_close(result.kpis.break_even_calls, 1_000.0 / 12_000.0);
}

// ============================================================================
// Inactive
// ============================================================================

#[test]
fn test_inactive_then_reactivated() {
    let active = staffed_hq();
    let inactive = active.clone().inactive();
    let assumptions = GlobalAssumptions::default();

    let zeroed = calculate_location(&inactive, &assumptions);
    assert_eq!(zeroed, LocationResult::empty(&inactive));

    let mut reactivated = inactive.clone();
    reactivated.active = true;
    assert_eq!(
        calculate_location(&reactivated, &assumptions),
        calculate_location(&active, &assumptions)
    );
}

#[test]
fn test_falsy_active_flag_means_inactive() {
    for active in [json!(null), json!(0), json!(false), json!("")] {
        let location: Location = serde_json::from_value(json!({
            "name": "Mobile",
            "active": active,
            "revenue": { "shipTypes": [{ "type": "Coal", "calls": 10, "feePerCall": 1000 }] }
        }))
        .unwrap();
        assert!(!location.active, "active: {} should be inactive", active);

        let scenario = Scenario::new("Sparse", ModelType::Traditional).with_location(location);
        let result = calculate_scenario(&scenario);
        assert!(result.location_results.is_empty());
        assert_eq!(result.consolidated.total_revenue, 0.0);
    }

    let missing: Location = serde_json::from_value(json!({ "name": "Mobile" })).unwrap();
    assert!(missing.active);
}
