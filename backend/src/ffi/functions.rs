//! PyO3 functions over scenario JSON
//!
//! # Example (from Python)
//!
//! ```python
//! import json
//! from ship_agency_model_core import calculate_scenario, apply_ai_reductions
//!
//! base = open("scenario.json").read()
//! ai = apply_ai_reductions(base)
//! print(json.loads(calculate_scenario(ai))["consolidated"]["ebitda"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::Serialize;

use crate::calc::float::calculate_cycle_time_sensitivity;
use crate::calc::scenario::calculate_scenario;
use crate::comparison::compare_scenarios;
use crate::config::DEFAULT_INTEREST_RATE;
use crate::models::scenario::Scenario;
use crate::transform::ai::apply_ai_reductions;

fn parse_scenario(json: &str) -> PyResult<Scenario> {
    serde_json::from_str(json)
        .map_err(|e| PyValueError::new_err(format!("Invalid scenario JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
}

/// Location results and consolidation of a scenario
#[pyfunction]
#[pyo3(name = "calculate_scenario")]
pub fn py_calculate_scenario(scenario_json: &str) -> PyResult<String> {
    let scenario = parse_scenario(scenario_json)?;
    to_json(&calculate_scenario(&scenario))
}

/// Deltas and percent changes from the first scenario to the second
#[pyfunction]
#[pyo3(name = "compare_scenarios")]
pub fn py_compare_scenarios(first_json: &str, second_json: &str) -> PyResult<String> {
    let first = parse_scenario(first_json)?;
    let second = parse_scenario(second_json)?;
    to_json(&compare_scenarios(&first, &second))
}

/// AI-enabled branch of a scenario, as scenario JSON
#[pyfunction]
#[pyo3(name = "apply_ai_reductions")]
pub fn py_apply_ai_reductions(scenario_json: &str) -> PyResult<String> {
    let scenario = parse_scenario(scenario_json)?;
    to_json(&apply_ai_reductions(&scenario))
}

#[pyfunction]
#[pyo3(name = "cycle_time_sensitivity", signature = (total_funds_flow, interest_rate = DEFAULT_INTEREST_RATE))]
pub fn py_cycle_time_sensitivity(total_funds_flow: f64, interest_rate: f64) -> PyResult<String> {
    to_json(&calculate_cycle_time_sensitivity(total_funds_flow, interest_rate))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_calculate_scenario, m)?)?;
    m.add_function(wrap_pyfunction!(py_compare_scenarios, m)?)?;
    m.add_function(wrap_pyfunction!(py_apply_ai_reductions, m)?)?;
    m.add_function(wrap_pyfunction!(py_cycle_time_sensitivity, m)?)?;
    Ok(())
}
