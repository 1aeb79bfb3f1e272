//! Retail KPI Reporter CLI
//!
//! Computes KPIs from a retail sales CSV and writes a markdown summary report.
//!
//! # Usage
//!
//! ```bash
//! cargo run                            # data/sales_data.csv -> reports/summary_report.md
//! cargo run -- sales.csv report.md     # explicit paths
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::debug;
use retail_kpi::config::{DEFAULT_INPUT_PATH, DEFAULT_REPORT_PATH};
use retail_kpi::{calculate_metrics, loader, report, KpiError, Result};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        return Err(KpiError::Usage);
    }

    let input_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));
    let report_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

    let records = loader::load_records_from_path(&input_path)?;
    debug!(
        "Loaded {} records from {}",
        records.len(),
        input_path.display()
    );

    let metrics = calculate_metrics(&records);
    debug!(
        "Computed metrics: {} orders, total revenue {:.2}",
        metrics.order_count, metrics.total_revenue
    );

    report::write_report(&metrics, &report_path)?;
    println!("Analysis complete. Report saved to: {}", report_path.display());

    Ok(())
}
