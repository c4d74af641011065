//! Command-line interface for scoring candidate supermarket sites.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod render;
mod score;

pub use error::CliError;
use score::{ScoreArgs, run_score};

pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_COMPETITOR_RADIUS_KM: &str = "competitor-radius-km";
pub(crate) const ARG_CORRELATED_RADIUS_KM: &str = "correlated-radius-km";
pub(crate) const ARG_MIN_DENSITY: &str = "min-density";
pub(crate) const ARG_MIN_INCOME: &str = "min-income";
pub(crate) const ARG_LAYERS_DIR: &str = "layers-dir";
pub(crate) const ARG_BUSINESSES: &str = "businesses";
pub(crate) const ARG_DENSITY: &str = "density";
pub(crate) const ARG_INCOME: &str = "income";
pub(crate) const ARG_ROADS: &str = "roads";
pub(crate) const ARG_DENSITY_PROPERTY: &str = "density-property";
pub(crate) const ARG_INCOME_PROPERTY: &str = "income-property";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_OUTPUT: &str = "output";

/// Run the sitescore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs or scoring
/// fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sitescore",
    about = "Score candidate supermarket sites against local map layers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one site and print its scorecard.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
