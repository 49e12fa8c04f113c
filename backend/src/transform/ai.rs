//! AI-enabled staffing
//!
//! Derives an AI-enabled scenario from a traditional one. Staff entries
//! are reduced by role tag, never by position text:
//!
//! | role               | group     | factor                |
//! |--------------------|-----------|-----------------------|
//! | `Documentation`    | corporate | `documentation_staff` |
//! | `AccountingClerk`  | corporate | `accounting_clerks`   |
//! | `OpsAdminClerk`    | port      | `ops_admin_clerks`    |
//!
//! Remaining headcount is `ceil(count × (1 − factor))`, so a partial
//! reduction never takes a staffed line to zero. Each entry has a single
//! role and is therefore reduced at most once. A position title naming
//! several roles is reduced under its tagged role only and reported by
//! [`ambiguous_role_entries`] and a warning.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::scenario::{AiReductionFactors, ModelType, Scenario};
use crate::models::staff::{StaffEntry, StaffRole};

/// Technology line item that absorbs the AI tooling cost at HQ
pub const AI_TECHNOLOGY_ITEM: &str = "specializedSaaS";

/// Product noise below this is not a fraction of a person (10 × 0.3)
const HEADCOUNT_EPSILON: f64 = 1e-9;

/// Headcount left after removing `factor` of `count`
///
/// Rounds up, but products within 1e-9 of a whole number count as that
/// number, so `10 × (1 − 0.7)` keeps 3 staff rather than the 4 a plain
/// floating-point ceiling yields.
pub fn reduced_count(count: u32, factor: f64) -> u32 {
    let remaining = (count as f64 * (1.0 - factor) - HEADCOUNT_EPSILON).ceil();
    if remaining <= 0.0 {
        0
    } else if remaining >= count as f64 {
        count
    } else {
        remaining as u32
    }
}

fn reduce_group(location_id: &str, staff: &mut [StaffEntry], rules: &[(StaffRole, f64)]) -> u32 {
    let mut removed = 0u32;
    for entry in staff.iter_mut() {
        if let Some(&(_, factor)) = rules.iter().find(|(role, _)| *role == entry.role) {
            if entry.has_ambiguous_role() {
                warn!(
                    location = location_id,
                    position = %entry.position,
                    role = ?entry.role,
                    "position matches several AI reduction roles"
                );
            }
            let remaining = reduced_count(entry.count, factor);
            removed = removed.saturating_add(entry.count - remaining);
            entry.count = remaining;
        }
    }
    removed
}

/// Branch `scenario` into an AI-enabled copy named "<name> - AI Enabled"
///
/// The source scenario is left untouched. Every location is transformed,
/// active or not. Only locations of type `hq` receive the technology
/// increase.
pub fn apply_ai_reductions(scenario: &Scenario) -> Scenario {
    let mut ai = scenario.branch(Some(&format!("{} - AI Enabled", scenario.name)));
    ai.model_type = ModelType::AiEnabled;

    let AiReductionFactors {
        documentation_staff,
        accounting_clerks,
        ops_admin_clerks,
        technology_increase,
    } = ai.global_assumptions.ai_reduction_factors.clone();

    let corporate_rules = [
        (StaffRole::Documentation, documentation_staff),
        (StaffRole::AccountingClerk, accounting_clerks),
    ];
    let port_rules = [(StaffRole::OpsAdminClerk, ops_admin_clerks)];

    for location in &mut ai.locations {
        let removed = reduce_group(&location.id, &mut location.corporate_staff, &corporate_rules)
            .saturating_add(reduce_group(&location.id, &mut location.port_staff, &port_rules));

        if location.is_hq() {
            location
                .overhead
                .technology
                .increase(AI_TECHNOLOGY_ITEM, technology_increase);
        }

        debug!(location = %location.id, removed, "applied AI staffing reductions");
    }

    ai
}

/// Staff entry whose title names more than one reducible role
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbiguousRoleEntry {
    pub location_id: String,
    pub position: String,
    /// Role the entry is reduced under
    pub role: StaffRole,
    pub matching_roles: Vec<StaffRole>,
}

/// Entries the AI transform would reduce under one of several matching roles
pub fn ambiguous_role_entries(scenario: &Scenario) -> Vec<AmbiguousRoleEntry> {
    scenario
        .locations
        .iter()
        .flat_map(|location| {
            location
                .corporate_staff
                .iter()
                .chain(&location.port_staff)
                .filter(|entry| entry.has_ambiguous_role())
                .map(move |entry| AmbiguousRoleEntry {
                    location_id: location.id.clone(),
                    position: entry.position.clone(),
                    role: entry.role,
                    matching_roles: StaffRole::matching_roles(&entry.position),
                })
        })
        .collect()
}
