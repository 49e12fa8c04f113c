//! Float income from client disbursement funds
//!
//! Client funds are held for a cycle of days between receipt and
//! disbursement. The time-weighted average balance earns interest:
//!
//! ```text
//! average_float = annual_funds_flow × cycle_days / 365
//! annual_income = average_float × interest_rate
//! ```
//!
//! Nothing here mutates a scenario.

use serde::Serialize;

use crate::calc::kpi::percent_change;
use crate::calc::scenario::{calculate_scenario, ScenarioResult};
use crate::config::{DAYS_PER_YEAR, DEFAULT_CYCLE_DAYS};
use crate::models::scenario::Scenario;

/// A named cycle-time case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePreset {
    pub key: &'static str,
    pub days: u32,
}

/// Standard cycle-time cases; `current_71_days` is the baseline
pub const CYCLE_PRESETS: &[CyclePreset] = &[
    CyclePreset { key: "instant_1_day", days: 1 },
    CyclePreset { key: "aggressive_30_days", days: 30 },
    CyclePreset { key: "optimized_45_days", days: 45 },
    CyclePreset { key: "current_71_days", days: 71 },
    CyclePreset { key: "slow_90_days", days: 90 },
    CyclePreset { key: "very_slow_120_days", days: 120 },
];

/// Float income for one cycle length
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTimeResult {
    pub key: String,
    pub cycle_days: u32,
    pub average_float: f64,
    pub annual_income: f64,
    pub monthly_income: f64,
    pub interest_rate: f64,
    pub income_vs_baseline: f64,
    pub percent_vs_baseline: f64,
}

/// Float income across cycle-time cases, compared to the 71-day baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleTimeAnalysis {
    pub scenarios: Vec<CycleTimeResult>,
    pub baseline: CycleTimeResult,
    pub interest_rate: f64,
    pub total_funds_flow: f64,
}

impl CycleTimeAnalysis {
    pub fn get(&self, key: &str) -> Option<&CycleTimeResult> {
        self.scenarios.iter().find(|s| s.key == key)
    }
}

fn float_case(key: &str, days: u32, total_funds_flow: f64, interest_rate: f64) -> CycleTimeResult {
    let average_float = total_funds_flow * (days as f64 / DAYS_PER_YEAR);
    let annual_income = average_float * interest_rate;
    CycleTimeResult {
        key: key.to_string(),
        cycle_days: days,
        average_float,
        annual_income,
        monthly_income: annual_income / 12.0,
        interest_rate,
        income_vs_baseline: 0.0,
        percent_vs_baseline: 0.0,
    }
}

/// Float income for the standard cycle-time cases
pub fn calculate_cycle_time_sensitivity(total_funds_flow: f64, interest_rate: f64) -> CycleTimeAnalysis {
    calculate_cycle_time_sensitivity_for(CYCLE_PRESETS, total_funds_flow, interest_rate)
}

/// Float income for arbitrary cases, in the order given
///
/// The baseline is always the 71-day cycle, whether or not `presets`
/// contains it and wherever it sits in the list.
pub fn calculate_cycle_time_sensitivity_for(
    presets: &[CyclePreset],
    total_funds_flow: f64,
    interest_rate: f64,
) -> CycleTimeAnalysis {
    let baseline = presets
        .iter()
        .find(|p| p.days == DEFAULT_CYCLE_DAYS)
        .map(|p| float_case(p.key, p.days, total_funds_flow, interest_rate))
        .unwrap_or_else(|| {
            float_case("current_71_days", DEFAULT_CYCLE_DAYS, total_funds_flow, interest_rate)
        });

    let scenarios = presets
        .iter()
        .map(|preset| {
            let mut case = float_case(preset.key, preset.days, total_funds_flow, interest_rate);
            case.income_vs_baseline = case.annual_income - baseline.annual_income;
            case.percent_vs_baseline = percent_change(baseline.annual_income, case.annual_income);
            case
        })
        .collect();

    CycleTimeAnalysis {
        scenarios,
        baseline,
        interest_rate,
        total_funds_flow,
    }
}

/// Float income of a whole scenario at one cycle length
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatIncome {
    pub total_funds_flow: f64,
    pub cycle_days: u32,
    pub average_float: f64,
    pub interest_rate: f64,
    pub annual_income: f64,
    pub monthly_income: f64,
    pub income_per_call: f64,
    pub total_calls: u32,
    pub scenario_results: ScenarioResult,
}

pub fn calculate_float_income(scenario: &Scenario, cycle_days: u32, interest_rate: f64) -> FloatIncome {
    let results = calculate_scenario(scenario);
    let total_funds_flow = results.consolidated.total_funds_flow;
    let total_calls = results.consolidated.total_calls;

    let average_float = total_funds_flow * (cycle_days as f64 / DAYS_PER_YEAR);
    let annual_income = average_float * interest_rate;

    FloatIncome {
        total_funds_flow,
        cycle_days,
        average_float,
        interest_rate,
        annual_income,
        monthly_income: annual_income / 12.0,
        income_per_call: if total_calls > 0 {
            annual_income / total_calls as f64
        } else {
            0.0
        },
        total_calls,
        scenario_results: results,
    }
}
