//! CSV business listing.

use std::io::BufReader;

use camino::Utf8Path;
use log::{debug, warn};
use serde::Deserialize;
use sitescore_core::{Business, BusinessKind};

use crate::{LoadError, fs::open_file};

const REQUIRED_COLUMNS: [&str; 4] = ["name", "type", "latitude", "longitude"];

#[derive(Debug, Deserialize)]
struct BusinessRow {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    latitude: f64,
    longitude: f64,
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Self::new(row.name, BusinessKind::from(row.kind), row.latitude, row.longitude)
    }
}

/// Load businesses from a CSV file with `name`, `type`, `latitude` and
/// `longitude` columns.
///
/// Extra columns are ignored. Rows whose coordinates are not finite are
/// skipped.
///
/// # Errors
/// Returns [`LoadError::MissingColumn`] when a required header is absent
/// and [`LoadError::Csv`] when a row cannot be decoded.
pub fn load_businesses(path: &Utf8Path) -> Result<Vec<Business>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = open_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(csv_error)?;
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        });
    }

    let mut businesses = Vec::new();
    for record in reader.deserialize::<BusinessRow>() {
        let row = record.map_err(csv_error)?;
        if !(row.latitude.is_finite() && row.longitude.is_finite()) {
            warn!("Skipped business {:?} in {path}: coordinates are not finite", row.name);
            continue;
        }
        businesses.push(Business::from(row));
    }
    debug!("Loaded {} businesses from {path}", businesses.len());
    Ok(businesses)
}
