//! Scenario comparison
//!
//! Deltas are always `second − first`. Percent changes follow
//! [`percent_change`]: a zero baseline gives 0 when both are zero and
//! 100 otherwise.

use serde::Serialize;

use crate::calc::kpi::percent_change;
use crate::calc::scenario::{calculate_scenario, ConsolidatedResult, ScenarioResult};
use crate::models::scenario::{ModelType, Scenario};

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedScenario {
    pub name: String,
    pub model_type: ModelType,
    pub results: ScenarioResult,
}

/// Absolute differences between two consolidations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDeltas {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_calls: i64,
    pub total_employees: i64,
    pub revenue_per_call: f64,
    pub total_cost_per_call: f64,
    pub total_delta_per_call: f64,
    pub direct_cost_per_call: f64,
    pub direct_delta_per_call: f64,
    pub ebitda: f64,
    pub ebitda_margin: f64,
}

impl MetricDeltas {
    pub fn between(a: &ConsolidatedResult, b: &ConsolidatedResult) -> Self {
        Self {
            total_revenue: b.total_revenue - a.total_revenue,
            total_costs: b.total_costs - a.total_costs,
            total_calls: i64::from(b.total_calls) - i64::from(a.total_calls),
            total_employees: i64::from(b.total_employees) - i64::from(a.total_employees),
            revenue_per_call: b.kpis.revenue_per_call - a.kpis.revenue_per_call,
            total_cost_per_call: b.kpis.total_cost_per_call - a.kpis.total_cost_per_call,
            total_delta_per_call: b.kpis.total_delta_per_call - a.kpis.total_delta_per_call,
            direct_cost_per_call: b.kpis.direct_cost_per_call - a.kpis.direct_cost_per_call,
            direct_delta_per_call: b.kpis.direct_delta_per_call - a.kpis.direct_delta_per_call,
            ebitda: b.kpis.ebitda - a.kpis.ebitda,
            ebitda_margin: b.kpis.ebitda_margin - a.kpis.ebitda_margin,
        }
    }
}

/// Percent changes between two consolidations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentChanges {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_employees: f64,
    pub revenue_per_call: f64,
    pub total_cost_per_call: f64,
    pub total_delta_per_call: f64,
    pub direct_cost_per_call: f64,
    pub direct_delta_per_call: f64,
    pub ebitda: f64,
}

impl PercentChanges {
    pub fn between(a: &ConsolidatedResult, b: &ConsolidatedResult) -> Self {
        Self {
            total_revenue: percent_change(a.total_revenue, b.total_revenue),
            total_costs: percent_change(a.total_costs, b.total_costs),
            total_employees: percent_change(a.total_employees as f64, b.total_employees as f64),
            revenue_per_call: percent_change(a.kpis.revenue_per_call, b.kpis.revenue_per_call),
            total_cost_per_call: percent_change(
                a.kpis.total_cost_per_call,
                b.kpis.total_cost_per_call,
            ),
            total_delta_per_call: percent_change(
                a.kpis.total_delta_per_call,
                b.kpis.total_delta_per_call,
            ),
            direct_cost_per_call: percent_change(
                a.kpis.direct_cost_per_call,
                b.kpis.direct_cost_per_call,
            ),
            direct_delta_per_call: percent_change(
                a.kpis.direct_delta_per_call,
                b.kpis.direct_delta_per_call,
            ),
            ebitda: percent_change(a.kpis.ebitda, b.kpis.ebitda),
        }
    }
}

/// Side-by-side results of two scenarios
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub scenario1: ComparedScenario,
    pub scenario2: ComparedScenario,
    pub deltas: MetricDeltas,
    pub percent_changes: PercentChanges,
}

/// Calculate both scenarios and diff their consolidations
pub fn compare_scenarios(first: &Scenario, second: &Scenario) -> ScenarioComparison {
    let results1 = calculate_scenario(first);
    let results2 = calculate_scenario(second);

    let deltas = MetricDeltas::between(&results1.consolidated, &results2.consolidated);
    let percent_changes = PercentChanges::between(&results1.consolidated, &results2.consolidated);

    ScenarioComparison {
        scenario1: ComparedScenario {
            name: first.name.clone(),
            model_type: first.model_type,
            results: results1,
        },
        scenario2: ComparedScenario {
            name: second.name.clone(),
            model_type: second.model_type,
            results: results2,
        },
        deltas,
        percent_changes,
    }
}

// ============================================================================
// Best in class
// ============================================================================

/// Metrics ranked across several scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    HighestRevenue,
    LowestCosts,
    HighestEbitda,
    BestEbitdaMargin,
    BestTotalDeltaPerCall,
    LowestBreakEven,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::HighestRevenue,
        Metric::LowestCosts,
        Metric::HighestEbitda,
        Metric::BestEbitdaMargin,
        Metric::BestTotalDeltaPerCall,
        Metric::LowestBreakEven,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::HighestRevenue => "Highest Revenue",
            Metric::LowestCosts => "Lowest Costs",
            Metric::HighestEbitda => "Highest EBITDA",
            Metric::BestEbitdaMargin => "Best EBITDA Margin",
            Metric::BestTotalDeltaPerCall => "Best Total Delta/Call",
            Metric::LowestBreakEven => "Lowest Break-Even",
        }
    }

    fn value(self, result: &ConsolidatedResult) -> f64 {
        match self {
            Metric::HighestRevenue => result.total_revenue,
            Metric::LowestCosts => result.total_costs,
            Metric::HighestEbitda => result.kpis.ebitda,
            Metric::BestEbitdaMargin => result.kpis.ebitda_margin,
            Metric::BestTotalDeltaPerCall => result.kpis.total_delta_per_call,
            Metric::LowestBreakEven => result.kpis.break_even_calls,
        }
    }

    fn lower_is_better(self) -> bool {
        matches!(self, Metric::LowestCosts | Metric::LowestBreakEven)
    }
}

/// The scenario holding the best value of one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestInClass {
    pub metric: Metric,
    pub label: &'static str,
    pub scenario: String,
    pub value: f64,
}

/// Best scenario per metric; ties keep the earlier scenario
///
/// Returns an empty list when `results` is empty.
pub fn best_in_class(results: &[(String, ConsolidatedResult)]) -> Vec<BestInClass> {
    let Some((first_name, first_result)) = results.first() else {
        return Vec::new();
    };

    Metric::ALL
        .iter()
        .map(|&metric| {
            let mut best_name = first_name;
            let mut best_value = metric.value(first_result);
            for (name, result) in &results[1..] {
                let value = metric.value(result);
                let better = if metric.lower_is_better() {
                    value < best_value
                } else {
                    value > best_value
                };
                if better {
                    best_name = name;
                    best_value = value;
                }
            }
            BestInClass {
                metric,
                label: metric.label(),
                scenario: best_name.clone(),
                value: best_value,
            }
        })
        .collect()
}
