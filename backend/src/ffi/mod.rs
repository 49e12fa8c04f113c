//! Python bindings
//!
//! JSON strings in, JSON strings out. Scenario documents use the same
//! camelCase layout as exported scenarios.

pub mod functions;
