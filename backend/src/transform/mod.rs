//! Scenario transformers
//!
//! Each transformer branches its input into a new, independent scenario
//! and leaves the source untouched.

pub mod ai;
pub mod sensitivity;

pub use ai::{ambiguous_role_entries, apply_ai_reductions, reduced_count, AmbiguousRoleEntry};
pub use sensitivity::{
    apply_sensitivity, sensitivity_report, tornado, Driver, MetricChange, SensitivityAdjustments,
    SensitivityReport, TornadoBar,
};
