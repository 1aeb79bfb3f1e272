//! Core KPI calculation engine.
//!
//! Transforms a loaded record set into aggregated, ranked revenue metrics.
//! The engine is total over its input: malformed numeric fields coerce to
//! zero, absent categorical fields group under `Unknown`, and an empty record
//! set produces an all-zero snapshot. Nothing in here can fail.

use crate::config::TOP_PRODUCT_LIMIT;
use crate::record::SalesRecord;
use std::collections::HashMap;

/// Computed KPI snapshot, immutable once built.
///
/// # Ranking Order
///
/// Ranked lists are sorted by revenue descending with an explicit tie-break
/// on key text ascending, so repeated runs over the same input produce
/// byte-identical reports.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Number of input records; one record is one order regardless of units.
    pub order_count: usize,

    /// Sum of per-record net revenues.
    pub total_revenue: f64,

    /// `total_revenue / order_count`, or 0.0 for an empty record set.
    pub average_order_value: f64,

    /// Revenue per category, descending, all entries.
    pub top_categories: Vec<(String, f64)>,

    /// Revenue per city, descending, all entries.
    pub top_cities: Vec<(String, f64)>,

    /// Revenue per channel, unranked; the renderer orders this at render time.
    pub channel_revenue: HashMap<String, f64>,

    /// Revenue per product, descending, truncated to the top 5.
    pub top_products: Vec<(String, f64)>,
}

/// Parses numeric text with a safe default.
///
/// Missing, empty, unparseable, or non-finite values coerce to `0.0` rather
/// than raising. This is a deliberate business rule: a malformed quantity is
/// indistinguishable from a true zero, and is never rejected or logged.
pub fn parse_number_or_zero(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Net revenue for a single record: `units * price * (1 - discount_pct / 100)`.
///
/// No clamping is applied. A discount over 100 produces negative revenue, and
/// negative units or price propagate their sign.
pub fn net_revenue(record: &SalesRecord) -> f64 {
    let units = parse_number_or_zero(record.units_sold.as_deref());
    let price = parse_number_or_zero(record.unit_price.as_deref());
    let discount_fraction = parse_number_or_zero(record.discount_pct.as_deref()) / 100.0;

    units * price * (1.0 - discount_fraction)
}

/// Running revenue totals for the four grouping dimensions.
#[derive(Debug, Default)]
struct RevenueAggregates {
    by_category: HashMap<String, f64>,
    by_city: HashMap<String, f64>,
    by_channel: HashMap<String, f64>,
    by_product: HashMap<String, f64>,
}

impl RevenueAggregates {
    fn accumulate(&mut self, record: &SalesRecord, revenue: f64) {
        add_revenue(&mut self.by_category, record.category_key(), revenue);
        add_revenue(&mut self.by_city, record.city_key(), revenue);
        add_revenue(&mut self.by_channel, record.channel_key(), revenue);
        add_revenue(&mut self.by_product, record.product_key(), revenue);
    }
}

fn add_revenue(totals: &mut HashMap<String, f64>, key: &str, amount: f64) {
    *totals.entry(key.to_string()).or_insert(0.0) += amount;
}

/// Sorts a dimension's totals by revenue descending, then key ascending.
fn ranked_descending(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = totals
        .iter()
        .map(|(key, revenue)| (key.clone(), *revenue))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Calculates the full KPI snapshot for a record set.
pub fn calculate_metrics(records: &[SalesRecord]) -> Metrics {
    let mut aggregates = RevenueAggregates::default();
    let mut total_revenue = 0.0;

    for record in records {
        let revenue = net_revenue(record);
        total_revenue += revenue;
        aggregates.accumulate(record, revenue);
    }

    let order_count = records.len();
    let average_order_value = if order_count > 0 {
        total_revenue / order_count as f64
    } else {
        0.0
    };

    let mut top_products = ranked_descending(&aggregates.by_product);
    top_products.truncate(TOP_PRODUCT_LIMIT);

    Metrics {
        order_count,
        total_revenue,
        average_order_value,
        top_categories: ranked_descending(&aggregates.by_category),
        top_cities: ranked_descending(&aggregates.by_city),
        channel_revenue: aggregates.by_channel,
        top_products,
    }
}
