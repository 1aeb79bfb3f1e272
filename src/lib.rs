//! # Retail KPI Reporter
//!
//! A batch KPI pipeline that reads retail sales records from CSV, aggregates
//! net revenue along several dimensions, and renders a markdown summary report.
//!
//! ## Design Principles
//!
//! - **Safe-default parsing**: malformed numeric fields coerce to zero, never error
//! - **Total core**: metrics calculation cannot fail, including on empty input
//! - **Deterministic output**: rankings tie-break on key text for byte-identical reruns
//! - **Single pass**: records are loaded into memory, aggregated once, reported once
//!
//! ## Example
//!
//! ```no_run
//! use retail_kpi::{calculate_metrics, loader, report};
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let csv = "units_sold,unit_price,discount_pct,category\n2,10,0,Electronics\n";
//! let records = loader::load_records(Cursor::new(csv)).unwrap();
//! let metrics = calculate_metrics(&records);
//! report::write_report(&metrics, Path::new("reports/summary_report.md")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod record;
pub mod report;

pub use error::{KpiError, Result};
pub use metrics::{calculate_metrics, Metrics};
pub use record::SalesRecord;
