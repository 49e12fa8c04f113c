//! Staff entries
//!
//! One `StaffEntry` describes `count` identical positions at a location.
//! `salary` is the annual salary for salaried staff and the hourly rate
//! for hourly staff.
//!
//! Each entry carries an explicit [`StaffRole`]. The role drives the
//! AI-enabled staffing transform; it is stored with the entry and only
//! inferred from the position title when older data omits it.

use serde::{Deserialize, Serialize};

use crate::config::{
    PositionPreset, DEFAULT_ANNUAL_HOURS, DEFAULT_BONUS_PERCENT, HOURLY_POSITION_KEYWORDS,
};
use crate::models::lenient;

/// Functional role used by the staffing transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    /// Document clerks and documentation management
    Documentation,
    AccountingClerk,
    OpsAdminClerk,
    #[default]
    Other,
}

/// Position keywords of the roles the AI transform reduces, in match order
const ROLE_KEYWORDS: &[(&str, StaffRole)] = &[
    ("document", StaffRole::Documentation),
    ("accounting clerk", StaffRole::AccountingClerk),
    ("ops admin clerk", StaffRole::OpsAdminClerk),
];

impl StaffRole {
    /// Infer a role from a free-text position title
    ///
    /// Checks run in a fixed order: "document", then "accounting clerk",
    /// then "ops admin clerk". A title matching several keywords gets
    /// the first role only; see [`StaffRole::matching_roles`].
    pub fn infer_from_position(position: &str) -> Self {
        Self::matching_roles(position)
            .first()
            .copied()
            .unwrap_or(StaffRole::Other)
    }

    /// Every reducible role whose keyword appears in a position title
    pub fn matching_roles(position: &str) -> Vec<StaffRole> {
        let position = position.to_lowercase();
        ROLE_KEYWORDS
            .iter()
            .filter(|(keyword, _)| position.contains(keyword))
            .map(|&(_, role)| role)
            .collect()
    }
}

/// Whether a position title is paid hourly by default
pub fn is_hourly_position(position: &str) -> bool {
    let position = position.to_lowercase();
    HOURLY_POSITION_KEYWORDS
        .iter()
        .any(|keyword| position.contains(keyword))
}

/// One staffing line at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StaffRecord")]
pub struct StaffEntry {
    pub position: String,
    pub role: StaffRole,
    pub count: u32,
    /// Annual salary, or hourly rate when `is_hourly`
    pub salary: f64,
    pub is_hourly: bool,
    pub annual_hours: u32,
    pub overtime_hours: u32,
    pub bonus_percent: f64,
    pub enabled: bool,
}

impl StaffEntry {
    /// Create a salaried entry with default bonus
    ///
    /// # Example
    /// ```
    /// use ship_agency_model_core::{StaffEntry, StaffRole};
    ///
    /// let clerk = StaffEntry::salaried("Document Clerk", 65_000.0, 2);
    /// assert_eq!(clerk.role, StaffRole::Documentation);
    /// assert!(!clerk.is_hourly);
    /// ```
    pub fn salaried(position: impl Into<String>, salary: f64, count: u32) -> Self {
        let position = position.into();
        Self {
            role: StaffRole::infer_from_position(&position),
            position,
            count,
            salary,
            is_hourly: false,
            annual_hours: DEFAULT_ANNUAL_HOURS,
            overtime_hours: 0,
            bonus_percent: DEFAULT_BONUS_PERCENT,
            enabled: true,
        }
    }

    /// Create an hourly entry with standard hours and no overtime
    pub fn hourly(position: impl Into<String>, hourly_rate: f64, count: u32) -> Self {
        Self {
            is_hourly: true,
            ..Self::salaried(position, hourly_rate, count)
        }
    }

    /// Build an entry at the catalogue default salary
    ///
    /// Hourly positions store the default salary spread over a standard
    /// year as their hourly rate.
    pub fn from_preset(preset: &PositionPreset, count: u32) -> Self {
        if is_hourly_position(preset.position) {
            Self::hourly(
                preset.position,
                preset.salary_default / DEFAULT_ANNUAL_HOURS as f64,
                count,
            )
        } else {
            Self::salaried(preset.position, preset.salary_default, count)
        }
    }

    pub fn with_overtime(mut self, overtime_hours: u32) -> Self {
        self.overtime_hours = overtime_hours;
        self
    }

    pub fn with_bonus_percent(mut self, bonus_percent: f64) -> Self {
        self.bonus_percent = bonus_percent;
        self
    }

    pub fn with_role(mut self, role: StaffRole) -> Self {
        self.role = role;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Position title names more than one reducible role
    pub fn has_ambiguous_role(&self) -> bool {
        StaffRole::matching_roles(&self.position).len() > 1
    }
}

/// Wire shape of a staff entry; every field optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StaffRecord {
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    role: Option<StaffRole>,
    #[serde(default, deserialize_with = "lenient::count")]
    count: u32,
    #[serde(default, deserialize_with = "lenient::amount")]
    salary: f64,
    #[serde(default)]
    is_hourly: Option<bool>,
    #[serde(default = "default_annual_hours", deserialize_with = "lenient::count")]
    annual_hours: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    overtime_hours: u32,
    #[serde(default = "default_bonus_percent", deserialize_with = "lenient::amount")]
    bonus_percent: f64,
    #[serde(default = "default_enabled", deserialize_with = "lenient::flag")]
    enabled: bool,
}

fn default_annual_hours() -> u32 {
    DEFAULT_ANNUAL_HOURS
}

fn default_bonus_percent() -> f64 {
    DEFAULT_BONUS_PERCENT
}

fn default_enabled() -> bool {
    true
}

impl From<StaffRecord> for StaffEntry {
    fn from(record: StaffRecord) -> Self {
        let position = record
            .position
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "Unknown Position".to_string());
        let role = record
            .role
            .unwrap_or_else(|| StaffRole::infer_from_position(&position));
        let is_hourly = record
            .is_hourly
            .unwrap_or_else(|| is_hourly_position(&position));

        StaffEntry {
            position,
            role,
            count: record.count,
            salary: record.salary,
            is_hourly,
            annual_hours: record.annual_hours,
            overtime_hours: record.overtime_hours,
            bonus_percent: record.bonus_percent,
            enabled: record.enabled,
        }
    }
}
