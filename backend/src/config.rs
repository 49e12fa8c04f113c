//! Model Defaults and Catalogues
//!
//! Single home for every default the model applies when a field is
//! absent from input. Model structs reference these constants from
//! their `Default` impls and serde default functions, so defaulting
//! happens once, at construction or deserialization, and nowhere in the
//! calculation engine.
//!
//! All monetary values are annual US dollars.

use crate::models::location::LocationType;

// ============================================================================
// Staffing
// ============================================================================

/// Standard full-time hours per year (40h × 52 weeks)
pub const DEFAULT_ANNUAL_HOURS: u32 = 2080;

/// Default bonus as a percent of base pay
pub const DEFAULT_BONUS_PERCENT: f64 = 10.0;

/// Overtime premium applied to the hourly rate
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Positions that are paid hourly unless the input says otherwise
pub const HOURLY_POSITION_KEYWORDS: &[&str] = &[
    "boarding agent",
    "runner",
    "ops admin clerk",
    "accounting clerk",
    "document clerk",
    "hr clerk",
];

// ============================================================================
// Global assumptions
// ============================================================================

pub const DEFAULT_HEALTH_INSURANCE_PER_EMPLOYEE: f64 = 15_000.0;
pub const DEFAULT_RETIREMENT_401K_PERCENT: f64 = 4.0;

pub const DEFAULT_HUSBANDRY_MARGIN_PERCENT: f64 = 9.0;
pub const DEFAULT_COMMISSION_MARGIN_PERCENT: f64 = 1.5;

// AI reduction factors (fractions of headcount removed)
pub const DEFAULT_AI_DOCUMENTATION_REDUCTION: f64 = 0.60;
pub const DEFAULT_AI_ACCOUNTING_CLERK_REDUCTION: f64 = 0.50;
pub const DEFAULT_AI_OPS_ADMIN_CLERK_REDUCTION: f64 = 0.70;
/// Added to HQ specialised SaaS spend for AI tooling
pub const DEFAULT_AI_TECHNOLOGY_INCREASE: f64 = 150_000.0;

// ============================================================================
// Enterprise indirect overhead (scenario level, never allocated)
// ============================================================================

pub const DEFAULT_EXECUTIVE_COMPENSATION: f64 = 0.0;
pub const DEFAULT_CORPORATE_LEGAL: f64 = 50_000.0;
pub const DEFAULT_CORPORATE_ACCOUNTING: f64 = 75_000.0;
pub const DEFAULT_CORPORATE_INSURANCE: f64 = 100_000.0;
pub const DEFAULT_CORPORATE_TECHNOLOGY: f64 = 150_000.0;

// ============================================================================
// Office space and vehicles
// ============================================================================

pub const DEFAULT_OFFICE_SQFT: f64 = 2_500.0;
pub const DEFAULT_COST_PER_SQFT: f64 = 20.0;
pub const DEFAULT_MILES_PER_CALL: f64 = 25.0;

/// Sedan total cost of ownership per mile
pub const SEDAN_COST_PER_MILE: f64 = 0.55;
/// SUV total cost of ownership per mile
pub const SUV_COST_PER_MILE: f64 = 0.75;
/// IRS standard mileage rate (2024)
pub const MILEAGE_REIMBURSEMENT_PER_MILE: f64 = 0.67;

/// Rent range per square foot for one building class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentRange {
    pub min: f64,
    pub typical: f64,
    pub max: f64,
    pub description: &'static str,
}

pub const CLASS_A_RENT: RentRange = RentRange {
    min: 30.0,
    typical: 40.0,
    max: 50.0,
    description: "Class A - Premium downtown, new construction, high-end finishes",
};

pub const CLASS_B_RENT: RentRange = RentRange {
    min: 15.0,
    typical: 20.0,
    max: 25.0,
    description: "Class B - Mid-range, suburban/secondary, standard finishes",
};

// Space planning
pub const EXECUTIVE_SQFT: u32 = 150;
pub const MANAGER_SQFT: u32 = 100;
pub const STAFF_SQFT: u32 = 75;
pub const COMMON_AREA_FACTOR: f64 = 0.4;

// ============================================================================
// Float / cycle time
// ============================================================================

pub const DEFAULT_INTEREST_RATE: f64 = 0.02;
pub const DEFAULT_CYCLE_DAYS: u32 = 71;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Swing used by the tornado chart (percent)
pub const DEFAULT_SENSITIVITY_SWING: f64 = 20.0;

// ============================================================================
// Catalogues
// ============================================================================

/// Default per-call economics for one ship category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTypePreset {
    pub name: &'static str,
    pub fee_per_call: f64,
    pub funds_per_call: f64,
}

const fn ship(name: &'static str, fee_per_call: f64, funds_per_call: f64) -> ShipTypePreset {
    ShipTypePreset {
        name,
        fee_per_call,
        funds_per_call,
    }
}

pub const SHIP_TYPE_CATALOG: &[ShipTypePreset] = &[
    ship("Break-bulk", 4_500.0, 15_000.0),
    ship("Coal", 9_800.0, 100_000.0),
    ship("Petcoke", 10_500.0, 100_000.0),
    ship("Grain", 12_000.0, 135_000.0),
    ship("Cement", 10_500.0, 75_000.0),
    ship("Fertilizer", 10_500.0, 120_000.0),
    ship("Misc Bulk", 9_500.0, 54_000.0),
    ship("Belt Ship Bulkers", 3_500.0, 12_000.0),
    ship("Cruise Ships", 1_500.0, 12_000.0),
    ship("Container", 500.0, 5_000.0),
    ship("RoRo", 750.0, 5_000.0),
    ship("Misc Port Calls", 1_500.0, 25_000.0),
    ship("Parcel Tanker", 3_750.0, 25_000.0),
    ship("Gas Carrier", 3_750.0, 25_000.0),
    ship("LNG Carrier", 4_500.0, 35_000.0),
    ship("Product Tankers", 3_500.0, 35_000.0),
    ship("Crude Tankers", 4_000.0, 35_000.0),
];

/// Salary band for a catalogue position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPreset {
    pub position: &'static str,
    pub salary_min: f64,
    pub salary_max: f64,
    pub salary_default: f64,
}

const fn position(
    position: &'static str,
    salary_min: f64,
    salary_max: f64,
    salary_default: f64,
) -> PositionPreset {
    PositionPreset {
        position,
        salary_min,
        salary_max,
        salary_default,
    }
}

pub const CORPORATE_POSITIONS: &[PositionPreset] = &[
    position("CEO/President", 225_000.0, 500_000.0, 350_000.0),
    position("CFO", 275_000.0, 275_000.0, 275_000.0),
    position("Controller", 165_000.0, 165_000.0, 165_000.0),
    position("VP Ops", 225_000.0, 225_000.0, 225_000.0),
    position("VP Commercial", 225_000.0, 225_000.0, 225_000.0),
    position("Commercial Manager", 125_000.0, 175_000.0, 150_000.0),
    position("Executive Admin", 90_000.0, 90_000.0, 90_000.0),
    position("Marketing Manager", 175_000.0, 175_000.0, 175_000.0),
    position("HR Manager", 200_000.0, 200_000.0, 200_000.0),
    position("HR Clerk/Payroll", 85_000.0, 85_000.0, 85_000.0),
    position("IT Manager", 175_000.0, 175_000.0, 175_000.0),
    position("Desktop Support", 95_000.0, 95_000.0, 95_000.0),
    position("Accounting Manager", 125_000.0, 125_000.0, 125_000.0),
    position("Accounting Supervisor", 80_000.0, 80_000.0, 80_000.0),
    position("Accounting Clerk", 65_000.0, 65_000.0, 65_000.0),
    position("Documentation Manager", 95_000.0, 95_000.0, 95_000.0),
    position("Document Clerk", 65_000.0, 65_000.0, 65_000.0),
];

pub const PORT_POSITIONS: &[PositionPreset] = &[
    position("Regional Manager Ops", 125_000.0, 175_000.0, 150_000.0),
    position("Port Ops Manager", 120_000.0, 165_000.0, 142_500.0),
    position("Asst Ops Manager", 95_000.0, 120_000.0, 107_500.0),
    position("Ship Agent", 95_000.0, 120_000.0, 107_500.0),
    position("Boarding Agent/Runner", 65_000.0, 95_000.0, 80_000.0),
    position("Ops Admin Clerk", 65_000.0, 65_000.0, 65_000.0),
];

/// Identity of one office in the standard network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub location_type: LocationType,
    pub state: &'static str,
}

const fn office(
    id: &'static str,
    name: &'static str,
    location_type: LocationType,
    state: &'static str,
) -> LocationPreset {
    LocationPreset {
        id,
        name,
        location_type,
        state,
    }
}

/// Houston HQ plus eleven port offices
pub const PREDEFINED_LOCATIONS: &[LocationPreset] = &[
    office("houston-hq", "Houston", LocationType::Hq, "TX"),
    office("new-york", "New York", LocationType::PortOffice, "NY"),
    office("philadelphia", "Philadelphia", LocationType::PortOffice, "PA"),
    office("norfolk", "Norfolk", LocationType::PortOffice, "VA"),
    office("savannah", "Savannah", LocationType::PortOffice, "GA"),
    office("jacksonville", "Jacksonville", LocationType::PortOffice, "FL"),
    office("port-everglades", "Port Everglades", LocationType::PortOffice, "FL"),
    office("tampa", "Tampa", LocationType::PortOffice, "FL"),
    office("mobile", "Mobile", LocationType::PortOffice, "AL"),
    office("new-orleans", "New Orleans", LocationType::PortOffice, "LA"),
    office("long-beach", "Long Beach", LocationType::PortOffice, "CA"),
    office("portland", "Portland", LocationType::PortOffice, "OR"),
];

/// Look up a ship type preset by exact name
pub fn ship_type_preset(name: &str) -> Option<&'static ShipTypePreset> {
    SHIP_TYPE_CATALOG.iter().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(SHIP_TYPE_CATALOG.len(), 17);
        assert_eq!(CORPORATE_POSITIONS.len(), 17);
        assert_eq!(PORT_POSITIONS.len(), 6);
        assert_eq!(PREDEFINED_LOCATIONS.len(), 12);
    }

    #[test]
    fn test_exactly_one_predefined_hq() {
        let hq_count = PREDEFINED_LOCATIONS
            .iter()
            .filter(|l| l.location_type == LocationType::Hq)
            .count();
        assert_eq!(hq_count, 1);
    }

    #[test]
    fn test_ship_type_lookup() {
        let grain = ship_type_preset("Grain").unwrap();
        assert_eq!(grain.fee_per_call, 12_000.0);
        assert_eq!(grain.funds_per_call, 135_000.0);
        assert!(ship_type_preset("Submarine").is_none());
    }
}
