//! Integration tests for the AI-enabled staffing transform
//!
//! Tests cover:
//! - Role-based reductions with ceiling rounding
//! - Technology increase at HQ only
//! - Source scenario left untouched
//! - Explicit role tags overriding position text
//! - Inactive locations transformed too
//! - Positions naming several roles reduced once and reported

use serde_json::json;
use ship_agency_model_core::{
    ambiguous_role_entries, apply_ai_reductions, calculate_scenario, Location, LocationType, ModelType, Scenario,
    StaffEntry, StaffGroup, StaffRole,
};

const HOUSTON: &str = include_str!("../../demos/houston-traditional.json");

fn counts(location: &Location, group: StaffGroup) -> Vec<(String, u32)> {
    location
        .staff(group)
        .iter()
        .map(|s| (s.position.clone(), s.count))
        .collect()
}

fn count_of(location: &Location, group: StaffGroup, position: &str) -> u32 {
    location
        .staff(group)
        .iter()
        .find(|s| s.position == position)
        .map(|s| s.count)
        .unwrap()
}

// ============================================================================
// Reductions
// ============================================================================

#[test]
fn test_document_clerks_reduced_with_ceiling() {
    let hq = Location::new("Houston", LocationType::Hq)
        .with_staff(StaffGroup::Corporate, StaffEntry::hourly("Document Clerk", 31.25, 5));
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(hq);

    let ai = apply_ai_reductions(&scenario);
    // ceil(5 × 0.4) = 2
    assert_eq!(count_of(&ai.locations[0], StaffGroup::Corporate, "Document Clerk"), 2);
}

#[test]
fn test_houston_example_reductions() {
    let scenario: Scenario = serde_json::from_str(HOUSTON).unwrap();
    let ai = apply_ai_reductions(&scenario);
    let hq = &ai.locations[0];

    assert_eq!(count_of(hq, StaffGroup::Corporate, "Document Clerk"), 1);
    assert_eq!(count_of(hq, StaffGroup::Corporate, "Documentation Manager"), 1);
    assert_eq!(count_of(hq, StaffGroup::Corporate, "Accounting Clerk"), 1);
    assert_eq!(count_of(hq, StaffGroup::Corporate, "Accounting Manager"), 1);
    assert_eq!(count_of(hq, StaffGroup::Port, "Ops Admin Clerk"), 1);
    assert_eq!(count_of(hq, StaffGroup::Port, "Ship Agent"), 3);

    // 30,000 + 150,000
    assert_eq!(hq.overhead.technology.get("specializedSaaS"), Some(180_000.0));

    let before = calculate_scenario(&scenario).consolidated;
    let after = calculate_scenario(&ai).consolidated;
    // one document clerk, one accounting clerk, one ops admin clerk
    assert_eq!(after.total_employees, before.total_employees - 3);
    assert_eq!(after.total_revenue, before.total_revenue);
}

#[test]
fn test_ops_admin_clerk_only_in_port_group() {
    let hq = Location::new("Houston", LocationType::Hq)
        .with_staff(StaffGroup::Corporate, StaffEntry::hourly("Ops Admin Clerk", 31.25, 4))
        .with_staff(StaffGroup::Port, StaffEntry::hourly("Ops Admin Clerk", 31.25, 4));
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(hq);

    let ai = apply_ai_reductions(&scenario);
    assert_eq!(ai.locations[0].corporate_staff[0].count, 4);
    // ceil(4 × 0.3) = 2
    assert_eq!(ai.locations[0].port_staff[0].count, 2);
}

// ============================================================================
// Technology increase
// ============================================================================

#[test]
fn test_technology_increase_only_at_hq() {
    let scenario = Scenario::new("Network", ModelType::Traditional)
        .with_location(Location::new("Houston", LocationType::Hq))
        .with_location(Location::new("Tampa", LocationType::PortOffice));

    let ai = apply_ai_reductions(&scenario);
    assert_eq!(
        ai.locations[0].overhead.technology.get("specializedSaaS"),
        Some(180_000.0)
    );
    assert_eq!(
        ai.locations[1].overhead.technology.get("specializedSaaS"),
        Some(30_000.0)
    );
}

#[test]
fn test_technology_item_created_when_missing() {
    let hq: Location = serde_json::from_value(json!({
        "name": "Houston",
        "type": "hq",
        "overhead": { "technology": {} }
    }))
    .unwrap();
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(hq);

    let ai = apply_ai_reductions(&scenario);
    assert_eq!(
        ai.locations[0].overhead.technology.get("specializedSaaS"),
        Some(150_000.0)
    );
}

// ============================================================================
// Branching
// ============================================================================

#[test]
fn test_source_scenario_unchanged() {
    let scenario: Scenario = serde_json::from_str(HOUSTON).unwrap();
    let snapshot = scenario.clone();

    let ai = apply_ai_reductions(&scenario);

    assert_eq!(scenario, snapshot);
    assert_ne!(ai.id, scenario.id);
    assert_eq!(ai.name, "Example - Traditional Model - AI Enabled");
    assert_eq!(ai.model_type, ModelType::AiEnabled);
    assert_eq!(ai.enterprise_indirect, scenario.enterprise_indirect);
}

#[test]
fn test_inactive_locations_transformed() {
    let office = Location::new("Tampa", LocationType::PortOffice)
        .with_staff(StaffGroup::Port, StaffEntry::hourly("Ops Admin Clerk", 31.25, 10))
        .inactive();
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(office);

    let ai = apply_ai_reductions(&scenario);
    assert!(!ai.locations[0].active);
    assert_eq!(ai.locations[0].port_staff[0].count, 3);
}

// ============================================================================
// Role tags
// ============================================================================

#[test]
fn test_explicit_role_overrides_position() {
    let hq = Location::new("Houston", LocationType::Hq)
        .with_staff(
            StaffGroup::Corporate,
            StaffEntry::salaried("Records Specialist", 70_000.0, 4)
                .with_role(StaffRole::Documentation),
        )
        .with_staff(
            StaffGroup::Corporate,
            StaffEntry::hourly("Document Clerk", 31.25, 4).with_role(StaffRole::Other),
        );
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(hq);

    let ai = apply_ai_reductions(&scenario);
    assert_eq!(
        counts(&ai.locations[0], StaffGroup::Corporate),
        vec![
            ("Records Specialist".to_string(), 2),
            ("Document Clerk".to_string(), 4)
        ]
    );
}

#[test]
fn test_custom_factors_from_assumptions() {
    let mut scenario = Scenario::new("Base", ModelType::Traditional).with_location(
        Location::new("Houston", LocationType::Hq)
            .with_staff(StaffGroup::Corporate, StaffEntry::hourly("Accounting Clerk", 31.25, 10)),
    );
    scenario.global_assumptions.ai_reduction_factors.accounting_clerks = 0.25;
    scenario.global_assumptions.ai_reduction_factors.technology_increase = 0.0;

    let ai = apply_ai_reductions(&scenario);
    // ceil(10 × 0.75) = 8
    assert_eq!(ai.locations[0].corporate_staff[0].count, 8);
    assert_eq!(
        ai.locations[0].overhead.technology.get("specializedSaaS"),
        Some(30_000.0)
    );
}

#[test]
fn test_position_with_two_roles_reduced_once_and_reported() {
    let hq = Location::new("Houston", LocationType::Hq)
        .with_id("loc-hq")
        .with_staff(
            StaffGroup::Corporate,
            StaffEntry::hourly("Accounting Clerk - Documents", 30.0, 5),
        )
        .with_staff(StaffGroup::Corporate, StaffEntry::hourly("Accounting Clerk", 30.0, 4));
    let scenario = Scenario::new("Base", ModelType::Traditional).with_location(hq);

    let flagged = ambiguous_role_entries(&scenario);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].location_id, "loc-hq");
    assert_eq!(flagged[0].position, "Accounting Clerk - Documents");
    assert_eq!(flagged[0].role, StaffRole::Documentation);
    assert_eq!(
        flagged[0].matching_roles,
        vec![StaffRole::Documentation, StaffRole::AccountingClerk]
    );

    let ai = apply_ai_reductions(&scenario);
    // documentation factor only: ceil(5 × 0.4) = 2, not a second cut to 1
    assert_eq!(
        counts(&ai.locations[0], StaffGroup::Corporate),
        vec![
            ("Accounting Clerk - Documents".to_string(), 2),
            ("Accounting Clerk".to_string(), 2)
        ]
    );
    assert_eq!(ambiguous_role_entries(&ai).len(), 1);
}
