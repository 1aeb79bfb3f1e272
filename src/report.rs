//! Report renderer: formats the KPI snapshot as a markdown document.
//!
//! Section order is fixed: overall performance, revenue by category, by city,
//! by channel, then the top-5 product ranking. Ranked sections come
//! pre-ordered from the metrics engine; the channel section is the one place
//! ordering happens at render time, by channel name ascending.

use crate::config::CURRENCY_SYMBOL;
use crate::error::Result;
use crate::metrics::Metrics;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats a monetary value with the currency symbol, thousands separators,
/// and exactly two decimal places. The sign sits between symbol and digits.
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    format!(
        "{}{}{}.{}",
        CURRENCY_SYMBOL,
        sign,
        group_thousands(digits),
        frac_part
    )
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Renders the report document to any writer.
///
/// The document is newline-terminated and sections are separated by a single
/// blank line, so rerunning the pipeline on unchanged input reproduces the
/// output byte for byte.
pub fn render_report<W: Write>(metrics: &Metrics, mut writer: W) -> Result<()> {
    writeln!(writer, "# Retail Sales KPI Summary")?;
    writeln!(writer)?;

    writeln!(writer, "## Overall Performance")?;
    writeln!(writer, "- Total Orders: **{}**", metrics.order_count)?;
    writeln!(
        writer,
        "- Total Revenue: **{}**",
        format_currency(metrics.total_revenue)
    )?;
    writeln!(
        writer,
        "- Average Order Value: **{}**",
        format_currency(metrics.average_order_value)
    )?;
    writeln!(writer)?;

    writeln!(writer, "## Revenue by Category")?;
    for (category, revenue) in &metrics.top_categories {
        writeln!(writer, "- {}: **{}**", category, format_currency(*revenue))?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Revenue by City")?;
    for (city, revenue) in &metrics.top_cities {
        writeln!(writer, "- {}: **{}**", city, format_currency(*revenue))?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Revenue by Channel")?;
    let mut channels: Vec<(&String, &f64)> = metrics.channel_revenue.iter().collect();
    channels.sort_by(|a, b| a.0.cmp(b.0));
    for (channel, revenue) in channels {
        writeln!(writer, "- {}: **{}**", channel, format_currency(*revenue))?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Top 5 Products by Revenue")?;
    for (product, revenue) in &metrics.top_products {
        writeln!(writer, "- {}: **{}**", product, format_currency(*revenue))?;
    }

    Ok(())
}

/// Writes the report to `destination`, creating missing parent directories.
///
/// Output goes through a `BufWriter` with an explicit flush so the document
/// is complete on every successful return.
pub fn write_report(metrics: &Metrics, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(destination)?;
    let mut writer = BufWriter::new(file);
    render_report(metrics, &mut writer)?;
    writer.flush()?;

    Ok(())
}
