//! Domain models for the ship agency financial model

pub mod lenient;
pub mod location;
pub mod overhead;
pub mod scenario;
pub mod ship_type;
pub mod staff;

// Re-exports
pub use location::{Location, LocationRevenue, LocationType, MarginSetting, StaffGroup};
pub use overhead::{Overhead, OverheadCategory, OverheadKind, VariableCosts, VehicleType};
pub use scenario::{EnterpriseIndirectOverhead, GlobalAssumptions, ModelType, Scenario, TeItem};
pub use ship_type::ShipTypeEntry;
pub use staff::{StaffEntry, StaffRole};
