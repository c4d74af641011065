//! Error types emitted by the sitescore CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sitescore_core::{ScoreError, SitePointError, ThresholdError};
use sitescore_data::LoadError;
use thiserror::Error;

/// Errors emitted by the sitescore CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The query point is not a valid WGS 84 coordinate.
    #[error("invalid site: {0}")]
    InvalidSite(#[from] SitePointError),
    /// A scoring threshold was rejected.
    #[error("invalid threshold: {0}")]
    InvalidThreshold(#[from] ThresholdError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading one of the layers failed.
    #[error("failed to load layers: {0}")]
    LoadLayers(#[from] LoadError),
    /// The scorer rejected the layers.
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
    /// Serialising the JSON report failed.
    #[error("failed to serialise score report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write score report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
