//! Scorecard rendering for the `score` command.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sitescore_core::{NearbyBusiness, ScoreCard, SiteMeasurements, SitePoint, Thresholds};

use crate::CliError;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// One line per criterion.
    #[default]
    Text,
    /// A JSON-encoded [`ScoreReport`].
    Json,
}

/// Everything the `score` command reports about one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) site: SitePoint,
    pub(crate) thresholds: Thresholds,
    pub(crate) scores: ScoreCard,
    pub(crate) measurements: SiteMeasurements,
    pub(crate) competitors: Vec<NearbyBusiness>,
    pub(crate) correlated: Vec<NearbyBusiness>,
}

pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &ScoreReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, report).map_err(CliError::WriteOutput),
        OutputFormat::Json => write_json(writer, report),
    }
}

fn write_text(writer: &mut dyn Write, report: &ScoreReport) -> io::Result<()> {
    writeln!(
        writer,
        "Site: {:.6}, {:.6}",
        report.site.latitude, report.site.longitude
    )?;
    for (criterion, score) in report.scores.iter() {
        writeln!(writer, "{}: {score:.2}/10", criterion.label())?;
    }
    writeln!(writer, "Final score: {:.2}/10", report.scores.final_score())?;
    write_measurements(writer, report)?;

    write_nearby(
        writer,
        "Competitors",
        report.thresholds.competitor_radius_km(),
        &report.competitors,
    )?;
    write_nearby(
        writer,
        "Correlated businesses",
        report.thresholds.correlated_radius_km(),
        &report.correlated,
    )
}

fn write_measurements(writer: &mut dyn Write, report: &ScoreReport) -> io::Result<()> {
    let measured = &report.measurements;
    let thresholds = &report.thresholds;
    writeln!(writer, "Measurements:")?;
    writeln!(
        writer,
        "  Competitors within {:.2} km: {}",
        thresholds.competitor_radius_km(),
        measured.competitors
    )?;
    writeln!(
        writer,
        "  Correlated businesses within {:.2} km: {}",
        thresholds.correlated_radius_km(),
        measured.correlated
    )?;
    writeln!(
        writer,
        "  Population density: {:.2} (minimum {:.2}, {})",
        measured.density,
        thresholds.min_density(),
        verdict(measured.meets_min_density(thresholds))
    )?;
    writeln!(
        writer,
        "  Income per capita: {:.2} (minimum {:.2}, {})",
        measured.income,
        thresholds.min_income(),
        verdict(measured.meets_min_income(thresholds))
    )?;
    writeln!(
        writer,
        "  Nearest access road: {:.0} m",
        measured.road_distance_m
    )
}

const fn verdict(met: bool) -> &'static str {
    if met { "met" } else { "not met" }
}

fn write_nearby(
    writer: &mut dyn Write,
    what: &str,
    radius_km: f64,
    nearby: &[NearbyBusiness],
) -> io::Result<()> {
    if nearby.is_empty() {
        return writeln!(writer, "No {} within {radius_km:.2} km", what.to_lowercase());
    }
    writeln!(writer, "{what} within {radius_km:.2} km:")?;
    for business in nearby {
        writeln!(
            writer,
            "  {} [{}] ({:.0} m)",
            business.name, business.kind, business.distance_m
        )?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, report: &ScoreReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
