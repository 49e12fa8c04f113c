//! Per-call and margin KPIs
//!
//! Every division is guarded: a zero denominator yields 0, never NaN or
//! infinity.

use serde::Serialize;

/// Unit economics derived from revenue and cost totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub revenue_per_call: f64,
    /// All costs per call
    pub total_cost_per_call: f64,
    pub total_delta_per_call: f64,
    /// Port-level direct costs per call
    pub direct_cost_per_call: f64,
    /// Revenue per call minus direct cost per call; the headline KPI
    pub direct_delta_per_call: f64,
    pub ebitda: f64,
    /// Percent of revenue
    pub ebitda_margin: f64,
    pub break_even_calls: f64,
}

impl Kpis {
    pub fn calculate(total_revenue: f64, total_costs: f64, direct_costs: f64, total_calls: u32) -> Self {
        let calls = total_calls as f64;
        let per_call = |amount: f64| if total_calls > 0 { amount / calls } else { 0.0 };

        let revenue_per_call = per_call(total_revenue);
        let total_cost_per_call = per_call(total_costs);
        let direct_cost_per_call = per_call(direct_costs);
        let ebitda = total_revenue - total_costs;

        Self {
            revenue_per_call,
            total_cost_per_call,
            total_delta_per_call: revenue_per_call - total_cost_per_call,
            direct_cost_per_call,
            direct_delta_per_call: revenue_per_call - direct_cost_per_call,
            ebitda,
            ebitda_margin: if total_revenue > 0.0 {
                ebitda / total_revenue * 100.0
            } else {
                0.0
            },
            break_even_calls: if revenue_per_call > 0.0 {
                total_costs / revenue_per_call
            } else {
                0.0
            },
        }
    }
}

/// Percent change from `old_value` to `new_value`
///
/// A zero baseline yields 0 when the new value is also zero and 100
/// otherwise. A negative baseline divides by its magnitude so the sign
/// follows the direction of change.
pub fn percent_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        if new_value == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        (new_value - old_value) / old_value.abs() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_calls() {
        let kpis = Kpis::calculate(100_000.0, 80_000.0, 30_000.0, 0);
        assert_eq!(kpis.revenue_per_call, 0.0);
        assert_eq!(kpis.total_cost_per_call, 0.0);
        assert_eq!(kpis.direct_cost_per_call, 0.0);
        assert_eq!(kpis.break_even_calls, 0.0);
        assert_eq!(kpis.ebitda, 20_000.0);
        assert_eq!(kpis.ebitda_margin, 20.0);
    }

    #[test]
    fn test_per_call_metrics() {
        let kpis = Kpis::calculate(100_000.0, 80_000.0, 30_000.0, 10);
        assert_eq!(kpis.revenue_per_call, 10_000.0);
        assert_eq!(kpis.total_cost_per_call, 8_000.0);
        assert_eq!(kpis.total_delta_per_call, 2_000.0);
        assert_eq!(kpis.direct_cost_per_call, 3_000.0);
        assert_eq!(kpis.direct_delta_per_call, 7_000.0);
        assert_eq!(kpis.break_even_calls, 8.0);
    }

    #[test]
    fn test_zero_revenue_margin() {
        let kpis = Kpis::calculate(0.0, 50_000.0, 0.0, 5);
        assert_eq!(kpis.ebitda, -50_000.0);
        assert_eq!(kpis.ebitda_margin, 0.0);
        assert_eq!(kpis.break_even_calls, 0.0);
    }

    #[test]
    fn test_percent_change_conventions() {
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(0.0, 500.0), 100.0);
        assert_eq!(percent_change(0.0, -500.0), 100.0);
        assert_eq!(percent_change(200.0, 250.0), 25.0);
        assert_eq!(percent_change(-200.0, -100.0), 50.0);
    }
}
