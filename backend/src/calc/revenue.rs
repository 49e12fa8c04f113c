//! Location revenue
//!
//! Commission is charged on agency fees plus husbandry revenue, so
//! husbandry must be computed first.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::models::location::Location;

/// Revenue of one location (or a sum of locations)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub base_agency_fees: f64,
    pub husbandry_revenue: f64,
    pub commission_revenue: f64,
    pub documentation_revenue: f64,
    pub total: f64,
    /// Client disbursement funds passing through; not revenue
    pub funds_flow: f64,
}

impl AddAssign<&RevenueBreakdown> for RevenueBreakdown {
    fn add_assign(&mut self, other: &RevenueBreakdown) {
        self.base_agency_fees += other.base_agency_fees;
        self.husbandry_revenue += other.husbandry_revenue;
        self.commission_revenue += other.commission_revenue;
        self.documentation_revenue += other.documentation_revenue;
        self.total += other.total;
        self.funds_flow += other.funds_flow;
    }
}

/// Revenue from enabled ship types, markups and documentation
pub fn calculate_revenue(location: &Location) -> RevenueBreakdown {
    let revenue = &location.revenue;

    let base_agency_fees: f64 = location.enabled_ship_types().map(|st| st.fees()).sum();
    let funds_flow: f64 = location.enabled_ship_types().map(|st| st.funds_flow()).sum();

    let husbandry_revenue = if revenue.husbandry.enabled {
        base_agency_fees * (revenue.husbandry.margin_percent / 100.0)
    } else {
        0.0
    };

    let commission_revenue = if revenue.commission.enabled {
        (base_agency_fees + husbandry_revenue) * (revenue.commission.margin_percent / 100.0)
    } else {
        0.0
    };

    let documentation_revenue = revenue.documentation.manual_amount;

    RevenueBreakdown {
        base_agency_fees,
        husbandry_revenue,
        commission_revenue,
        documentation_revenue,
        total: base_agency_fees + husbandry_revenue + commission_revenue + documentation_revenue,
        funds_flow,
    }
}
