//! Record loader: reads delimited text into an ordered sequence of sales records.

use crate::error::Result;
use crate::record::SalesRecord;
use csv::{ReaderBuilder, Trim};
use log::warn;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads sales records from a CSV reader, preserving input row order.
///
/// The first line is treated as the header row. Headers are trimmed but field
/// values are not. Rows with fewer fields than the header are tolerated; the
/// missing fields come back as `None`. Rows that fail to deserialize are
/// logged at warn level and skipped.
///
/// An entirely empty source yields an empty vector, keeping downstream logic
/// defined on the empty-input boundary.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for (row_idx, result) in csv_reader.deserialize::<SalesRecord>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
        }
    }

    Ok(records)
}

/// Opens `path` and reads all sales records from it.
pub fn load_records_from_path(path: &Path) -> Result<Vec<SalesRecord>> {
    let file = File::open(path)?;
    load_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_preserves_row_order() {
        let csv = "product,unit_price\nWidget,10\nGadget,20\nDoohickey,30\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].product.as_deref(), Some("Widget"));
        assert_eq!(records[1].product.as_deref(), Some("Gadget"));
        assert_eq!(records[2].product.as_deref(), Some("Doohickey"));
    }

    #[test]
    fn test_headers_trimmed_but_values_preserved() {
        let csv = " product , channel \nWidget, Online\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product.as_deref(), Some("Widget"));
        // The value keeps its leading space; " Online" is not "Online".
        assert_eq!(records[0].channel.as_deref(), Some(" Online"));
    }

    #[test]
    fn test_empty_field_reads_as_none() {
        let csv = "product,category\nWidget,\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].category.is_none());
    }

    #[test]
    fn test_missing_column_reads_as_none() {
        let csv = "product\nWidget\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].category.is_none());
        assert!(records[0].units_sold.is_none());
    }

    #[test]
    fn test_short_rows_tolerated() {
        let csv = "product,category,city\nWidget,Electronics\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category.as_deref(), Some("Electronics"));
        assert!(records[0].city.is_none());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "order_id,product,warehouse\n1001,Widget,East\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product.as_deref(), Some("Widget"));
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let csv = "product,unit_price\n\"Widget, Deluxe\",10\n";
        let records = load_records(Cursor::new(csv)).unwrap();

        assert_eq!(records[0].product.as_deref(), Some("Widget, Deluxe"));
    }

    #[test]
    fn test_entirely_empty_source_yields_no_records() {
        let records = load_records(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_header_only_source_yields_no_records() {
        let csv = "units_sold,unit_price,category\n";
        let records = load_records(Cursor::new(csv)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_records_from_path(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, crate::error::KpiError::Io(_)));
    }
}
