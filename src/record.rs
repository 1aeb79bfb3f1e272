//! Sales record model for CSV parsing.

use serde::Deserialize;

/// Label substituted for categorical fields that are absent from a row.
pub const UNKNOWN_KEY: &str = "Unknown";

/// Raw sales record as read from CSV.
///
/// Every field is optional: a column may be missing from the header entirely,
/// or empty for a given row, and both deserialize to `None`. Columns outside
/// this set are ignored. Values are kept exactly as they appear in the input;
/// no trimming or case normalization is applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesRecord {
    /// Quantity sold, as text (parsed leniently downstream)
    pub units_sold: Option<String>,

    /// Price per unit, as text
    pub unit_price: Option<String>,

    /// Discount percentage (0-100 expected, not enforced), as text
    pub discount_pct: Option<String>,

    /// Product category
    pub category: Option<String>,

    /// City of sale
    pub city: Option<String>,

    /// Sales channel
    pub channel: Option<String>,

    /// Product name
    pub product: Option<String>,
}

impl SalesRecord {
    /// Category grouping key, defaulting to [`UNKNOWN_KEY`].
    pub fn category_key(&self) -> &str {
        dimension_key(&self.category)
    }

    /// City grouping key, defaulting to [`UNKNOWN_KEY`].
    pub fn city_key(&self) -> &str {
        dimension_key(&self.city)
    }

    /// Channel grouping key, defaulting to [`UNKNOWN_KEY`].
    pub fn channel_key(&self) -> &str {
        dimension_key(&self.channel)
    }

    /// Product grouping key, defaulting to [`UNKNOWN_KEY`].
    pub fn product_key(&self) -> &str {
        dimension_key(&self.product)
    }
}

fn dimension_key(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN_KEY)
}
