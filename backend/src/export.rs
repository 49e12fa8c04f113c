//! CSV summary export
//!
//! One sheet: a header block, the KPI block and the financial summary.
//! Monetary cells carry two decimals and the EBITDA margin one; there is
//! no currency symbol or thousands separator. Rows have different
//! widths, so the writer runs in flexible mode.

use chrono::{DateTime, NaiveDate, Utc};

use crate::calc::scenario::ConsolidatedResult;
use crate::error::ModelError;
use crate::models::scenario::Scenario;

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Build the summary sheet as CSV text, one `\n`-terminated line per row
pub fn export_csv(
    scenario: &Scenario,
    consolidated: &ConsolidatedResult,
    exported_on: NaiveDate,
) -> Result<String, ModelError> {
    let kpis = &consolidated.kpis;
    let rows: Vec<Vec<String>> = vec![
        vec!["Ship Agency Financial Model - CSV Export".into()],
        vec!["Scenario:".into(), scenario.name.clone()],
        vec!["Model Type:".into(), scenario.model_type.label().into()],
        vec!["Export Date:".into(), exported_on.format("%Y-%m-%d").to_string()],
        vec![],
        vec!["KEY PERFORMANCE INDICATORS".into()],
        vec!["Metric".into(), "Value".into()],
        vec!["Total Port Calls".into(), consolidated.total_calls.to_string()],
        vec!["Total Employees".into(), consolidated.total_employees.to_string()],
        vec!["Revenue per Call".into(), money(kpis.revenue_per_call)],
        vec!["Cost per Call".into(), money(kpis.total_cost_per_call)],
        vec!["Delta per Call".into(), money(kpis.total_delta_per_call)],
        vec!["Direct Delta per Call (KEY KPI)".into(), money(kpis.direct_delta_per_call)],
        vec![],
        vec!["FINANCIAL SUMMARY".into()],
        vec!["Category".into(), "Amount".into()],
        vec!["Total Revenue".into(), money(consolidated.total_revenue)],
        vec!["Total Costs".into(), money(consolidated.total_costs)],
        vec!["EBITDA".into(), money(kpis.ebitda)],
        vec!["EBITDA Margin".into(), format!("{:.1}%", kpis.ebitda_margin)],
    ];

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in &rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ModelError::Serialization(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ModelError::Serialization(e.to_string()))
}

/// Download name: scenario name with whitespace runs replaced by `_`,
/// then the export time in epoch milliseconds
pub fn csv_file_name(scenario: &Scenario, exported_at: DateTime<Utc>) -> String {
    let stem = scenario.name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_{}.csv", stem, exported_at.timestamp_millis())
}
