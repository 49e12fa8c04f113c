//! Overhead category totals

use serde::Serialize;

use crate::models::overhead::{Overhead, OverheadCategory};

/// Sum of every line item in a category
pub fn category_total(category: &OverheadCategory) -> f64 {
    category.iter().map(|(_, amount)| amount).sum()
}

/// Per-category overhead costs of one location
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadTotals {
    pub office_space_cost: f64,
    pub insurance_cost: f64,
    pub technology_cost: f64,
    pub regulatory_cost: f64,
    pub professional_services_cost: f64,
    pub office_operations_cost: f64,
    pub communications_cost: f64,
    pub employee_related_cost: f64,
    pub vehicle_transport_cost: f64,
    pub other_cost: f64,
}

impl OverheadTotals {
    pub fn from_overhead(overhead: &Overhead) -> Self {
        Self {
            office_space_cost: overhead.office_space.cost(),
            insurance_cost: category_total(&overhead.insurance),
            technology_cost: category_total(&overhead.technology),
            regulatory_cost: category_total(&overhead.regulatory),
            professional_services_cost: category_total(&overhead.professional_services),
            office_operations_cost: category_total(&overhead.office_operations),
            communications_cost: category_total(&overhead.communications),
            employee_related_cost: category_total(&overhead.employee_related),
            vehicle_transport_cost: category_total(&overhead.vehicle_transport),
            other_cost: category_total(&overhead.other),
        }
    }

    /// Office space plus the nine itemised categories
    pub fn total(&self) -> f64 {
        self.office_space_cost
            + self.insurance_cost
            + self.technology_cost
            + self.regulatory_cost
            + self.professional_services_cost
            + self.office_operations_cost
            + self.communications_cost
            + self.employee_related_cost
            + self.vehicle_transport_cost
            + self.other_cost
    }
}
