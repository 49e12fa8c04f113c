//! Location aggregation: revenue, costs and KPIs for one office

use serde::Serialize;
use tracing::debug;

use crate::calc::costs::{calculate_costs, CostBreakdown};
use crate::calc::kpi::Kpis;
use crate::calc::revenue::{calculate_revenue, RevenueBreakdown};
use crate::models::location::{Location, LocationType};
use crate::models::scenario::GlobalAssumptions;

/// Financial results of one location
///
/// Inactive locations produce the same shape with every number zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    pub location_id: String,
    pub location_name: String,
    pub location_type: LocationType,
    pub revenue: RevenueBreakdown,
    pub costs: CostBreakdown,
    pub total_calls: u32,
    #[serde(flatten)]
    pub kpis: Kpis,
}

impl LocationResult {
    /// All-zero result carrying the location's identity
    pub fn empty(location: &Location) -> Self {
        Self {
            location_id: location.id.clone(),
            location_name: location.name.clone(),
            location_type: location.location_type,
            revenue: RevenueBreakdown::default(),
            costs: CostBreakdown::default(),
            total_calls: 0,
            kpis: Kpis::default(),
        }
    }
}

/// Revenue, costs and KPIs of one location
pub fn calculate_location(location: &Location, assumptions: &GlobalAssumptions) -> LocationResult {
    if !location.active {
        debug!(location = %location.id, "inactive location, zeroed result");
        return LocationResult::empty(location);
    }

    let revenue = calculate_revenue(location);
    let costs = calculate_costs(location, assumptions);
    let total_calls = location.total_calls();
    let kpis = Kpis::calculate(revenue.total, costs.total, costs.direct_costs, total_calls);

    debug!(
        location = %location.id,
        revenue = revenue.total,
        costs = costs.total,
        calls = total_calls,
        "location calculated"
    );

    LocationResult {
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        location_type: location.location_type,
        revenue,
        costs,
        total_calls,
        kpis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ship_type::ShipTypeEntry;
    use crate::models::staff::StaffEntry;
    use crate::models::location::StaffGroup;

    #[test]
    fn test_inactive_location_is_zeroed() {
        let location = Location::new("Portland", LocationType::PortOffice)
            .with_ship_type(ShipTypeEntry::new("Grain", 40, 12_000.0, 135_000.0))
            .with_staff(StaffGroup::Port, StaffEntry::salaried("Ship Agent", 107_500.0, 2))
            .inactive();

        let result = calculate_location(&location, &GlobalAssumptions::default());
        assert_eq!(result, LocationResult::empty(&location));
        assert_eq!(result.location_name, "Portland");
        assert_eq!(result.costs.total, 0.0);
        assert_eq!(result.kpis.ebitda, 0.0);
    }

    #[test]
    fn test_result_serializes_flat_kpis() {
        let location = Location::new("Tampa", LocationType::PortOffice)
            .with_ship_type(ShipTypeEntry::new("Grain", 10, 12_000.0, 0.0));
        let result = calculate_location(&location, &GlobalAssumptions::default());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("directDeltaPerCall").is_some());
        assert!(value["costs"].get("locationAdminCost").is_some());
        assert!(value["costs"].get("officeSpaceCost").is_some());
        assert_eq!(value["locationType"], "port-office");
    }
}
