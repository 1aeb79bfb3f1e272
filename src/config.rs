//! Fixed pipeline configuration.
//!
//! The binary runs without arguments against these defaults; both paths can be
//! overridden positionally on the command line.

/// Default location of the sales dataset, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/sales_data.csv";

/// Default location of the generated report.
pub const DEFAULT_REPORT_PATH: &str = "reports/summary_report.md";

/// Currency symbol prefixed to every monetary value in the report.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Number of entries kept in the product ranking.
pub const TOP_PRODUCT_LIMIT: usize = 5;
