//! agency-model: command-line front end for the ship agency model
//!
//! Reads scenario JSON files, runs the calculation core and prints JSON
//! (or CSV for `export-csv`) to stdout. Logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ship_agency_model_core::config::{
    DEFAULT_CYCLE_DAYS, DEFAULT_INTEREST_RATE, DEFAULT_SENSITIVITY_SWING,
};
use ship_agency_model_core::{
    apply_ai_reductions, calculate_cycle_time_sensitivity, calculate_float_income,
    calculate_scenario, compare_scenarios, export_csv, export_scenario, scenario_fingerprint,
    sensitivity_report, tornado, Scenario, SensitivityAdjustments,
};

#[derive(Parser, Debug)]
#[command(name = "agency-model")]
#[command(about = "Ship agency financial model calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log calculation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Location results and consolidation of a scenario
    Calculate {
        scenario: PathBuf,
    },

    /// Compare two scenarios (deltas are second minus first)
    Compare {
        first: PathBuf,
        second: PathBuf,
    },

    /// Derive the AI-enabled scenario
    AiEnable {
        scenario: PathBuf,

        /// Write the new scenario here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Float income across standard cash-cycle lengths
    CycleTime {
        scenario: PathBuf,

        /// Annual interest rate as a fraction (0.02 = 2%)
        #[arg(long, env = "AGENCY_MODEL_INTEREST_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
        rate: f64,
    },

    /// Float income of a scenario at one cycle length
    FloatIncome {
        scenario: PathBuf,

        #[arg(long, default_value_t = DEFAULT_CYCLE_DAYS)]
        days: u32,

        #[arg(long, env = "AGENCY_MODEL_INTEREST_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
        rate: f64,
    },

    /// Baseline vs adjusted results for percentage driver changes
    Sensitivity {
        scenario: PathBuf,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        calls: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        fees: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        payroll: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        overhead: f64,
    },

    /// EBITDA impact of each driver at plus/minus a swing, widest first
    Tornado {
        scenario: PathBuf,

        /// Swing in percent
        #[arg(long, default_value_t = DEFAULT_SENSITIVITY_SWING)]
        swing: f64,
    },

    /// CSV summary sheet of a scenario
    ExportCsv {
        scenario: PathBuf,
    },

    /// Content fingerprint of a scenario (ignores id, name and timestamps)
    Fingerprint {
        scenario: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_scenario(path: &Path) -> Result<Scenario> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&json)
        .with_context(|| format!("invalid scenario JSON in {}", path.display()))?;
    debug!(path = %path.display(), scenario = %scenario.id, "loaded scenario");
    Ok(scenario)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Calculate { scenario } => {
            let scenario = read_scenario(&scenario)?;
            print_json(&calculate_scenario(&scenario))
        }
        Commands::Compare { first, second } => {
            let first = read_scenario(&first)?;
            let second = read_scenario(&second)?;
            print_json(&compare_scenarios(&first, &second))
        }
        Commands::AiEnable { scenario, out } => {
            let ai = apply_ai_reductions(&read_scenario(&scenario)?);
            let json = export_scenario(&ai)?;
            match out {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display())),
                None => {
                    println!("{}", json);
                    Ok(())
                }
            }
        }
        Commands::CycleTime { scenario, rate } => {
            let scenario = read_scenario(&scenario)?;
            let funds = calculate_scenario(&scenario).consolidated.total_funds_flow;
            print_json(&calculate_cycle_time_sensitivity(funds, rate))
        }
        Commands::FloatIncome {
            scenario,
            days,
            rate,
        } => {
            let scenario = read_scenario(&scenario)?;
            print_json(&calculate_float_income(&scenario, days, rate))
        }
        Commands::Sensitivity {
            scenario,
            calls,
            fees,
            payroll,
            overhead,
        } => {
            let scenario = read_scenario(&scenario)?;
            let adjustments = SensitivityAdjustments {
                calls,
                fees,
                payroll,
                overhead,
            };
            print_json(&sensitivity_report(&scenario, &adjustments))
        }
        Commands::Tornado { scenario, swing } => {
            let scenario = read_scenario(&scenario)?;
            print_json(&tornado(&scenario, swing))
        }
        Commands::ExportCsv { scenario } => {
            let scenario = read_scenario(&scenario)?;
            let consolidated = calculate_scenario(&scenario).consolidated;
            let csv = export_csv(&scenario, &consolidated, Utc::now().date_naive())?;
            print!("{}", csv);
            Ok(())
        }
        Commands::Fingerprint { scenario } => {
            let scenario = read_scenario(&scenario)?;
            println!("{}", scenario_fingerprint(&scenario)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sensitivity_negative_percent() {
        let cli = Cli::parse_from([
            "agency-model",
            "sensitivity",
            "base.json",
            "--calls",
            "-10",
            "--overhead",
            "5",
        ]);
        match cli.command {
            Commands::Sensitivity {
                calls,
                fees,
                overhead,
                ..
            } => {
                assert_eq!(calls, -10.0);
                assert_eq!(fees, 0.0);
                assert_eq!(overhead, 5.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_float_income_defaults() {
        let cli = Cli::parse_from(["agency-model", "float-income", "base.json"]);
        match cli.command {
            Commands::FloatIncome { days, .. } => assert_eq!(days, 71),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
