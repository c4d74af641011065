use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a layer from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid GeoJSON.
    #[error("failed to parse GeoJSON in {path}: {source}")]
    ParseGeoJson {
        /// File that was parsed.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: Box<geojson::Error>,
    },
    /// The GeoJSON document was not a `FeatureCollection`.
    #[error("{path} is not a GeoJSON FeatureCollection: {source}")]
    NotFeatureCollection {
        /// File that was parsed.
        path: Utf8PathBuf,
        /// Conversion error.
        #[source]
        source: Box<geojson::Error>,
    },
    /// A CSV record could not be read or decoded.
    #[error("failed to read business listing {path}: {source}")]
    Csv {
        /// File that was read.
        path: Utf8PathBuf,
        /// Reader error, including the record position.
        #[source]
        source: csv::Error,
    },
    /// The CSV header row lacks a required column.
    #[error("business listing {path} has no `{column}` column")]
    MissingColumn {
        /// File that was read.
        path: Utf8PathBuf,
        /// Column that was expected.
        column: &'static str,
    },
}
