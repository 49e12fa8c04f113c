//! Integration tests for scenario comparison
//!
//! Tests cover:
//! - Percent-change convention for zero baselines
//! - Deltas as second minus first
//! - Traditional vs AI-enabled comparison of the example scenario
//! - Best-in-class ranking and tie handling

use ship_agency_model_core::{
    apply_ai_reductions, best_in_class, calculate_scenario, compare_scenarios, percent_change,
    ConsolidatedResult, Location, LocationType, Metric, ModelType, Scenario, ShipTypeEntry,
};

const HOUSTON: &str = include_str!("../../demos/houston-traditional.json");

fn office_scenario(name: &str, calls: u32, fee: f64) -> Scenario {
    Scenario::new(name, ModelType::Traditional).with_location(
        Location::new("Tampa", LocationType::PortOffice)
            .with_ship_type(ShipTypeEntry::new("Grain", calls, fee, 0.0)),
    )
}

fn consolidated(scenario: &Scenario) -> ConsolidatedResult {
    calculate_scenario(scenario).consolidated
}

// ============================================================================
// Percent change
// ============================================================================

#[test]
fn test_percent_change_zero_baseline() {
    assert_eq!(percent_change(0.0, 0.0), 0.0);
    assert_eq!(percent_change(0.0, 500.0), 100.0);
    assert_eq!(percent_change(1_000.0, 1_500.0), 50.0);
    assert_eq!(percent_change(1_000.0, 0.0), -100.0);
}

#[test]
fn test_percent_change_negative_baseline() {
    // Loss shrinking from -400 to -100 is an improvement
    assert_eq!(percent_change(-400.0, -100.0), 75.0);
    assert_eq!(percent_change(-400.0, -800.0), -100.0);
}

// ============================================================================
// Two-scenario comparison
// ============================================================================

#[test]
fn test_deltas_are_second_minus_first() {
    let small = office_scenario("Small", 10, 10_000.0);
    let large = office_scenario("Large", 30, 10_000.0);

    let comparison = compare_scenarios(&small, &large);
    let a = &comparison.scenario1.results.consolidated;
    let b = &comparison.scenario2.results.consolidated;

    assert_eq!(comparison.scenario1.name, "Small");
    assert_eq!(comparison.scenario2.name, "Large");
    assert_eq!(comparison.deltas.total_calls, 20);
    assert_eq!(comparison.deltas.total_revenue, b.total_revenue - a.total_revenue);
    assert_eq!(comparison.deltas.ebitda, b.kpis.ebitda - a.kpis.ebitda);
    assert_eq!(
        comparison.percent_changes.total_revenue,
        percent_change(a.total_revenue, b.total_revenue)
    );

    let reversed = compare_scenarios(&large, &small);
    assert_eq!(reversed.deltas.total_calls, -20);
    assert_eq!(reversed.deltas.total_revenue, -comparison.deltas.total_revenue);
}

#[test]
fn test_identical_scenarios_have_zero_deltas() {
    let scenario: Scenario = serde_json::from_str(HOUSTON).unwrap();
    let comparison = compare_scenarios(&scenario, &scenario.branch(None));

    assert_eq!(comparison.deltas.total_revenue, 0.0);
    assert_eq!(comparison.deltas.total_costs, 0.0);
    assert_eq!(comparison.deltas.total_employees, 0);
    assert_eq!(comparison.percent_changes.ebitda, 0.0);
}

#[test]
fn test_traditional_vs_ai_enabled() {
    let traditional: Scenario = serde_json::from_str(HOUSTON).unwrap();
    let ai = apply_ai_reductions(&traditional);

    let comparison = compare_scenarios(&traditional, &ai);
    assert_eq!(comparison.scenario1.model_type, ModelType::Traditional);
    assert_eq!(comparison.scenario2.model_type, ModelType::AiEnabled);
    assert_eq!(comparison.deltas.total_employees, -3);
    assert_eq!(comparison.deltas.total_revenue, 0.0);
    assert_eq!(comparison.deltas.total_calls, 0);
    assert!(comparison.percent_changes.total_employees < 0.0);
}

// ============================================================================
// Best in class
// ============================================================================

#[test]
fn test_best_in_class_empty() {
    assert!(best_in_class(&[]).is_empty());
}

#[test]
fn test_best_in_class_picks_extremes() {
    let results = vec![
        ("Small".to_string(), consolidated(&office_scenario("Small", 10, 10_000.0))),
        ("Large".to_string(), consolidated(&office_scenario("Large", 100, 10_000.0))),
    ];

    let best = best_in_class(&results);
    assert_eq!(best.len(), Metric::ALL.len());

    let pick = |metric: Metric| {
        best.iter()
            .find(|b| b.metric == metric)
            .map(|b| b.scenario.as_str())
            .unwrap()
    };
    assert_eq!(pick(Metric::HighestRevenue), "Large");
    assert_eq!(pick(Metric::HighestEbitda), "Large");
    assert_eq!(pick(Metric::LowestCosts), "Small");
}

#[test]
fn test_best_in_class_ties_keep_first() {
    let result = consolidated(&office_scenario("Same", 10, 10_000.0));
    let results = vec![
        ("First".to_string(), result.clone()),
        ("Second".to_string(), result),
    ];

    for best in best_in_class(&results) {
        assert_eq!(best.scenario, "First", "{}", best.label);
    }
}
