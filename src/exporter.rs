use crate::errors::{AppError, AppResult};
use crate::models::AddressRecord;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Sorts records by the composite `(name, source, address)` key, byte-wise
/// ascending on each component. Not a deduplication: records with equal
/// keys all survive, adjacent in the result.
pub fn sort_records(records: &mut [AddressRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Sorts the records and writes them as a CSV file with the fixed header
/// `Name,Address,Source,XmlTag,RawName`.
///
/// Values are written as their literal string form; addresses are never
/// parsed or reformatted. Fields containing the delimiter, quote character,
/// or line breaks are quoted. Returns the number of data rows written.
pub fn write_csv(mut records: Vec<AddressRecord>, output: &Path) -> AppResult<usize> {
    sort_records(&mut records);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let addresses: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
    let sources: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
    let xml_tags: Vec<&str> = records.iter().map(|r| r.xml_tag.as_str()).collect();
    let raw_names: Vec<&str> = records.iter().map(|r| r.raw_name.as_str()).collect();

    let mut df = DataFrame::new(vec![
        Series::new("Name", names),
        Series::new("Address", addresses),
        Series::new("Source", sources),
        Series::new("XmlTag", xml_tags),
        Series::new("RawName", raw_names),
    ])
    .map_err(|e| AppError::ExportError(format!("Failed to build output table: {e}")))?;

    let mut file = File::create(output)
        .map_err(|e| AppError::IoError(format!("Failed to create {}: {e}", output.display())))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| AppError::ExportError(format!("Failed to write CSV: {e}")))?;

    info!(rows = records.len(), output = %output.display(), "CSV export completed");

    Ok(records.len())
}
