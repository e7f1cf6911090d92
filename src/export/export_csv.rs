use crate::scraper::Listing;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    CsvError(String),
    IoError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::CsvError(msg) => write!(f, "CSV error: {msg}"),
            ExportError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl Error for ExportError {}

/// Write the accumulated listings to `path` as CSV, one header row plus one
/// row per listing. The header comes from the first record's field names;
/// category is fixed for a run, so every record shares the same schema.
///
/// Callers with an empty dataset report "no listings found" instead of
/// calling this. Returns the path actually written.
pub fn export_listings_csv(listings: &[Listing], path: &str) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| ExportError::IoError(format!("Failed to create '{}': {}", path, e)))?;

    for listing in listings {
        match listing {
            Listing::RealEstate(row) => writer
                .serialize(row)
                .map_err(|e| ExportError::CsvError(format!("Failed to write row: {}", e)))?,
            Listing::Vehicle(row) => writer
                .serialize(row)
                .map_err(|e| ExportError::CsvError(format!("Failed to write row: {}", e)))?,
        }
    }

    writer
        .flush()
        .map_err(|e| ExportError::IoError(format!("Failed to flush '{}': {}", path, e)))?;

    Ok(path.to_string())
}
