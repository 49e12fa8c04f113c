//! Sensitivity analysis
//!
//! Scales the four main drivers of a scenario by a percentage and
//! reports how the consolidated results move. Adjusted scenarios are
//! deep copies; the baseline is never modified.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calc::kpi::percent_change;
use crate::calc::scenario::{calculate_scenario, ConsolidatedResult};
use crate::models::overhead::OverheadKind;
use crate::models::scenario::Scenario;

/// Percentage adjustments per driver (`10.0` means +10%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensitivityAdjustments {
    /// Port calls per ship type (rounded to whole calls)
    pub calls: f64,
    /// Fee per call
    pub fees: f64,
    /// Salary or hourly rate of every staff entry
    pub payroll: f64,
    /// Rent per sqft and every itemised overhead line
    pub overhead: f64,
}

/// A single sensitivity driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    Calls,
    Fees,
    Payroll,
    Overhead,
}

impl Driver {
    pub const ALL: [Driver; 4] = [Driver::Calls, Driver::Fees, Driver::Payroll, Driver::Overhead];
}

impl SensitivityAdjustments {
    /// Adjust one driver, leave the others at zero
    pub fn only(driver: Driver, percent: f64) -> Self {
        let mut adjustments = Self::default();
        match driver {
            Driver::Calls => adjustments.calls = percent,
            Driver::Fees => adjustments.fees = percent,
            Driver::Payroll => adjustments.payroll = percent,
            Driver::Overhead => adjustments.overhead = percent,
        }
        adjustments
    }

    pub fn is_zero(&self) -> bool {
        self.calls == 0.0 && self.fees == 0.0 && self.payroll == 0.0 && self.overhead == 0.0
    }
}

fn factor(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Deep copy of `scenario` with the adjustments applied to every location
///
/// A zero adjustment leaves its driver bit-for-bit unchanged. Variable
/// costs per call are not scaled by the overhead driver.
pub fn apply_sensitivity(scenario: &Scenario, adjustments: &SensitivityAdjustments) -> Scenario {
    let mut adjusted = scenario.branch(Some(&format!("{} - Sensitivity", scenario.name)));

    for location in &mut adjusted.locations {
        if adjustments.calls != 0.0 {
            let f = factor(adjustments.calls);
            for ship_type in &mut location.revenue.ship_types {
                let scaled = (ship_type.calls as f64 * f).round();
                ship_type.calls = if scaled > 0.0 { scaled as u32 } else { 0 };
            }
        }

        if adjustments.fees != 0.0 {
            let f = factor(adjustments.fees);
            for ship_type in &mut location.revenue.ship_types {
                ship_type.fee_per_call *= f;
            }
        }

        if adjustments.payroll != 0.0 {
            let f = factor(adjustments.payroll);
            for staff in location
                .corporate_staff
                .iter_mut()
                .chain(location.port_staff.iter_mut())
            {
                staff.salary *= f;
            }
        }

        if adjustments.overhead != 0.0 {
            let f = factor(adjustments.overhead);
            location.overhead.office_space.cost_per_sqft *= f;
            for kind in OverheadKind::ALL {
                location.overhead.category_mut(kind).scale(f);
            }
        }
    }

    debug!(scenario = %scenario.id, ?adjustments, "applied sensitivity adjustments");
    adjusted
}

/// Baseline against adjusted value of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    pub baseline: f64,
    pub adjusted: f64,
    pub delta: f64,
    pub percent_change: f64,
}

impl MetricChange {
    pub fn new(baseline: f64, adjusted: f64) -> Self {
        Self {
            baseline,
            adjusted,
            delta: adjusted - baseline,
            percent_change: percent_change(baseline, adjusted),
        }
    }
}

/// Consolidated results before and after a sensitivity adjustment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityReport {
    pub adjustments: SensitivityAdjustments,
    pub baseline: ConsolidatedResult,
    pub adjusted: ConsolidatedResult,
    pub total_revenue: MetricChange,
    pub total_costs: MetricChange,
    pub total_calls: MetricChange,
    pub direct_delta_per_call: MetricChange,
    pub total_delta_per_call: MetricChange,
    pub ebitda: MetricChange,
    pub ebitda_margin: MetricChange,
    pub break_even_calls: MetricChange,
}

pub fn sensitivity_report(scenario: &Scenario, adjustments: &SensitivityAdjustments) -> SensitivityReport {
    let baseline = calculate_scenario(scenario).consolidated;
    let adjusted = calculate_scenario(&apply_sensitivity(scenario, adjustments)).consolidated;

    SensitivityReport {
        adjustments: *adjustments,
        total_revenue: MetricChange::new(baseline.total_revenue, adjusted.total_revenue),
        total_costs: MetricChange::new(baseline.total_costs, adjusted.total_costs),
        total_calls: MetricChange::new(baseline.total_calls as f64, adjusted.total_calls as f64),
        direct_delta_per_call: MetricChange::new(
            baseline.kpis.direct_delta_per_call,
            adjusted.kpis.direct_delta_per_call,
        ),
        total_delta_per_call: MetricChange::new(
            baseline.kpis.total_delta_per_call,
            adjusted.kpis.total_delta_per_call,
        ),
        ebitda: MetricChange::new(baseline.kpis.ebitda, adjusted.kpis.ebitda),
        ebitda_margin: MetricChange::new(baseline.kpis.ebitda_margin, adjusted.kpis.ebitda_margin),
        break_even_calls: MetricChange::new(
            baseline.kpis.break_even_calls,
            adjusted.kpis.break_even_calls,
        ),
        baseline,
        adjusted,
    }
}

/// EBITDA impact of one driver at ±swing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TornadoBar {
    pub driver: Driver,
    pub positive_impact: f64,
    pub negative_impact: f64,
    pub total_range: f64,
}

/// Rank drivers by EBITDA range at ±`swing` percent, widest first
///
/// Drivers with equal range keep their `Driver::ALL` order.
pub fn tornado(scenario: &Scenario, swing: f64) -> Vec<TornadoBar> {
    let baseline_ebitda = calculate_scenario(scenario).consolidated.kpis.ebitda;
    let ebitda_at = |driver: Driver, percent: f64| {
        let adjusted = apply_sensitivity(scenario, &SensitivityAdjustments::only(driver, percent));
        calculate_scenario(&adjusted).consolidated.kpis.ebitda
    };

    let mut bars: Vec<TornadoBar> = Driver::ALL
        .iter()
        .map(|&driver| {
            let positive = ebitda_at(driver, swing);
            let negative = ebitda_at(driver, -swing);
            TornadoBar {
                driver,
                positive_impact: positive - baseline_ebitda,
                negative_impact: negative - baseline_ebitda,
                total_range: (positive - negative).abs(),
            }
        })
        .collect();

    bars.sort_by(|a, b| b.total_range.total_cmp(&a.total_range));
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::{Location, LocationType, StaffGroup};
    use crate::models::ship_type::ShipTypeEntry;
    use crate::models::staff::StaffEntry;

    fn scenario() -> Scenario {
        Scenario::new("Base", Default::default()).with_location(
            Location::new("Tampa", LocationType::PortOffice)
                .with_ship_type(ShipTypeEntry::new("Grain", 15, 12_000.0, 135_000.0))
                .with_staff(StaffGroup::Port, StaffEntry::salaried("Ship Agent", 100_000.0, 1)),
        )
    }

    #[test]
    fn test_zero_adjustments_are_identity() {
        let base = scenario();
        let adjusted = apply_sensitivity(&base, &SensitivityAdjustments::default());
        assert_eq!(adjusted.locations, base.locations);
    }

    #[test]
    fn test_calls_are_rounded() {
        let adjusted = apply_sensitivity(&scenario(), &SensitivityAdjustments::only(Driver::Calls, 10.0));
        // 15 × 1.1 = 16.5 → 17
        assert_eq!(adjusted.locations[0].revenue.ship_types[0].calls, 17);
    }

    #[test]
    fn test_overhead_scales_items_and_rent_not_variable() {
        let base = scenario();
        let adjusted = apply_sensitivity(&base, &SensitivityAdjustments::only(Driver::Overhead, 50.0));
        let before = &base.locations[0].overhead;
        let after = &adjusted.locations[0].overhead;
        assert_eq!(after.office_space.cost_per_sqft, 30.0);
        assert_eq!(after.insurance.get("longshoremen"), Some(37_500.0));
        assert_eq!(after.variable_costs, before.variable_costs);
    }

    #[test]
    fn test_tornado_sorted_by_range() {
        let bars = tornado(&scenario(), 20.0);
        assert_eq!(bars.len(), 4);
        for pair in bars.windows(2) {
            assert!(pair[0].total_range >= pair[1].total_range);
        }
    }
}
