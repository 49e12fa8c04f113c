//! Location costs
//!
//! # Critical Invariants
//!
//! 1. `total = total_payroll + total_benefits + total_overhead + total_variable_costs`
//! 2. `total == direct_costs + location_admin_cost` (up to float rounding)
//! 3. Benefits are computed per group from that group's own payroll and
//!    headcount, never pooled and split by ratio
//! 4. Only enabled staff and enabled ship types are counted

use serde::Serialize;
use std::ops::AddAssign;

use crate::calc::overhead::OverheadTotals;
use crate::calc::staff::{group_payroll, GroupPayroll};
use crate::models::location::{Location, StaffGroup};
use crate::models::scenario::GlobalAssumptions;

/// Full cost breakdown of one location (or a sum of locations)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    // Payroll
    pub corporate_payroll: f64,
    pub port_payroll: f64,
    pub total_payroll: f64,

    // Headcount
    pub employee_count: u32,
    pub corporate_employee_count: u32,
    pub port_employee_count: u32,

    // Benefits
    #[serde(rename = "retirement401k")]
    pub retirement_401k: f64,
    pub health_insurance: f64,
    pub total_benefits: f64,
    pub corporate_benefits: f64,
    pub port_benefits: f64,

    // Overhead
    #[serde(flatten)]
    pub overhead: OverheadTotals,
    pub total_overhead: f64,

    // Variable
    /// Per-call rate; for summed breakdowns the call-weighted average
    pub variable_cost_per_call: f64,
    pub total_variable_costs: f64,

    /// Port payroll + port benefits + variable costs
    pub direct_costs: f64,

    /// Corporate payroll + corporate benefits + overhead
    ///
    /// HQ and administrative cost carried by this location. Unrelated to
    /// the scenario-level enterprise indirect overhead.
    pub location_admin_cost: f64,

    pub total: f64,
}

impl AddAssign<&CostBreakdown> for CostBreakdown {
    /// Field-wise sum; `variable_cost_per_call` is left for the caller
    /// to re-derive since rates do not add
    fn add_assign(&mut self, other: &CostBreakdown) {
        self.corporate_payroll += other.corporate_payroll;
        self.port_payroll += other.port_payroll;
        self.total_payroll += other.total_payroll;

        self.employee_count = self.employee_count.saturating_add(other.employee_count);
        self.corporate_employee_count = self
            .corporate_employee_count
            .saturating_add(other.corporate_employee_count);
        self.port_employee_count = self
            .port_employee_count
            .saturating_add(other.port_employee_count);

        self.retirement_401k += other.retirement_401k;
        self.health_insurance += other.health_insurance;
        self.total_benefits += other.total_benefits;
        self.corporate_benefits += other.corporate_benefits;
        self.port_benefits += other.port_benefits;

        let o = &other.overhead;
        self.overhead.office_space_cost += o.office_space_cost;
        self.overhead.insurance_cost += o.insurance_cost;
        self.overhead.technology_cost += o.technology_cost;
        self.overhead.regulatory_cost += o.regulatory_cost;
        self.overhead.professional_services_cost += o.professional_services_cost;
        self.overhead.office_operations_cost += o.office_operations_cost;
        self.overhead.communications_cost += o.communications_cost;
        self.overhead.employee_related_cost += o.employee_related_cost;
        self.overhead.vehicle_transport_cost += o.vehicle_transport_cost;
        self.overhead.other_cost += o.other_cost;
        self.total_overhead += other.total_overhead;

        self.total_variable_costs += other.total_variable_costs;
        self.direct_costs += other.direct_costs;
        self.location_admin_cost += other.location_admin_cost;
        self.total += other.total;
    }
}

/// 401(k) match plus health insurance for one staff group
fn group_benefits(group: GroupPayroll, assumptions: &GlobalAssumptions) -> f64 {
    group.payroll * (assumptions.retirement_401k_percent / 100.0)
        + group.headcount as f64 * assumptions.health_insurance_per_employee
}

/// Costs of one location under the given benefit assumptions
///
/// Ignores `location.active`; the location aggregator decides whether a
/// location is costed at all.
pub fn calculate_costs(location: &Location, assumptions: &GlobalAssumptions) -> CostBreakdown {
    let corporate = group_payroll(location.staff(StaffGroup::Corporate));
    let port = group_payroll(location.staff(StaffGroup::Port));

    let total_payroll = corporate.payroll + port.payroll;
    let employee_count = corporate.headcount.saturating_add(port.headcount);

    let retirement_401k = total_payroll * (assumptions.retirement_401k_percent / 100.0);
    let health_insurance = employee_count as f64 * assumptions.health_insurance_per_employee;
    let total_benefits = retirement_401k + health_insurance;
    let corporate_benefits = group_benefits(corporate, assumptions);
    let port_benefits = group_benefits(port, assumptions);

    let overhead = OverheadTotals::from_overhead(&location.overhead);
    let total_overhead = overhead.total();

    let total_calls = location.total_calls();
    let variable_cost_per_call = location.overhead.variable_costs.cost_per_call;
    let total_variable_costs = total_calls as f64 * variable_cost_per_call;

    let direct_costs = port.payroll + port_benefits + total_variable_costs;
    let location_admin_cost = corporate.payroll + corporate_benefits + total_overhead;

    CostBreakdown {
        corporate_payroll: corporate.payroll,
        port_payroll: port.payroll,
        total_payroll,
        employee_count,
        corporate_employee_count: corporate.headcount,
        port_employee_count: port.headcount,
        retirement_401k,
        health_insurance,
        total_benefits,
        corporate_benefits,
        port_benefits,
        overhead,
        total_overhead,
        variable_cost_per_call,
        total_variable_costs,
        direct_costs,
        location_admin_cost,
        total: total_payroll + total_benefits + total_overhead + total_variable_costs,
    }
}
