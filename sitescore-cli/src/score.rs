//! Score command implementation for the sitescore CLI.

use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescore_core::{
    LayerSource, SitePoint, Thresholds, competitors_within, correlated_within, measure_site,
};
use sitescore_data::{
    DEFAULT_BUSINESSES_FILE, DEFAULT_DENSITY_FILE, DEFAULT_DENSITY_PROPERTY, DEFAULT_INCOME_FILE,
    DEFAULT_INCOME_PROPERTY, DEFAULT_ROADS_FILE, FileLayerSource, fs,
};
use tracing::{debug, info};

use crate::{
    ARG_BUSINESSES, ARG_COMPETITOR_RADIUS_KM, ARG_CORRELATED_RADIUS_KM, ARG_DENSITY,
    ARG_DENSITY_PROPERTY, ARG_FORMAT, ARG_INCOME, ARG_INCOME_PROPERTY, ARG_LATITUDE,
    ARG_LAYERS_DIR, ARG_LONGITUDE, ARG_MIN_DENSITY, ARG_MIN_INCOME, ARG_OUTPUT, ARG_ROADS,
    CliError,
    render::{OutputFormat, ScoreReport, write_report},
};

/// Latitude scored when none is configured.
pub(crate) const DEFAULT_LATITUDE: f64 = -22.3145;
/// Longitude scored when none is configured.
pub(crate) const DEFAULT_LONGITUDE: f64 = -49.058;

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a candidate supermarket site from a business listing \
                 and density, income and road layers. Every option can also \
                 come from the `[cmds.score]` table of a configuration file or \
                 from SITESCORE_CMDS_SCORE_* environment variables.",
    about = "Score a candidate site"
)]
#[ortho_config(prefix = "SITESCORE")]
pub(crate) struct ScoreArgs {
    /// Site latitude in degrees (default -22.3145).
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Site longitude in degrees (default -49.058).
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Radius for counting competing supermarkets, in kilometres.
    #[arg(long = ARG_COMPETITOR_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) competitor_radius_km: Option<f64>,
    /// Radius for counting correlated businesses, in kilometres.
    #[arg(long = ARG_CORRELATED_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) correlated_radius_km: Option<f64>,
    /// Population density that earns a full density score.
    #[arg(long = ARG_MIN_DENSITY, value_name = "people/km2")]
    #[serde(default)]
    pub(crate) min_density: Option<f64>,
    /// Minimum income per capita for a non-zero income score.
    #[arg(long = ARG_MIN_INCOME, value_name = "amount")]
    #[serde(default)]
    pub(crate) min_income: Option<f64>,
    /// Directory containing the default layer file names.
    #[arg(long = ARG_LAYERS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) layers_dir: Option<Utf8PathBuf>,
    /// Override the business listing (`businesses.csv`).
    #[arg(long = ARG_BUSINESSES, value_name = "path")]
    #[serde(default)]
    pub(crate) businesses: Option<Utf8PathBuf>,
    /// Override the density layer (`density.geojson`).
    #[arg(long = ARG_DENSITY, value_name = "path")]
    #[serde(default)]
    pub(crate) density: Option<Utf8PathBuf>,
    /// Override the income layer (`income.geojson`).
    #[arg(long = ARG_INCOME, value_name = "path")]
    #[serde(default)]
    pub(crate) income: Option<Utf8PathBuf>,
    /// Override the road layer (`roads.geojson`).
    #[arg(long = ARG_ROADS, value_name = "path")]
    #[serde(default)]
    pub(crate) roads: Option<Utf8PathBuf>,
    /// Feature property holding population density.
    #[arg(long = ARG_DENSITY_PROPERTY, value_name = "name")]
    #[serde(default)]
    pub(crate) density_property: Option<String>,
    /// Feature property holding income per capita.
    #[arg(long = ARG_INCOME_PROPERTY, value_name = "name")]
    #[serde(default)]
    pub(crate) income_property: Option<String>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) site: SitePoint,
    pub(crate) thresholds: Thresholds,
    pub(crate) businesses: Utf8PathBuf,
    pub(crate) density: Utf8PathBuf,
    pub(crate) income: Utf8PathBuf,
    pub(crate) roads: Utf8PathBuf,
    pub(crate) density_property: String,
    pub(crate) income_property: String,
    pub(crate) format: OutputFormat,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.businesses, ARG_BUSINESSES)?;
        Self::require_existing(&self.density, ARG_DENSITY)?;
        Self::require_existing(&self.income, ARG_INCOME)?;
        Self::require_existing(&self.roads, ARG_ROADS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn layer_source(&self) -> FileLayerSource {
        FileLayerSource::new(
            self.businesses.clone(),
            self.density.clone(),
            self.income.clone(),
            self.roads.clone(),
        )
        .with_density_property(self.density_property.clone())
        .with_income_property(self.income_property.clone())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let site = SitePoint::new(
            args.latitude.unwrap_or(DEFAULT_LATITUDE),
            args.longitude.unwrap_or(DEFAULT_LONGITUDE),
        )
        .validated()?;

        let defaults = Thresholds::default();
        let thresholds = Thresholds::new(
            args.competitor_radius_km
                .unwrap_or(defaults.competitor_radius_km()),
            args.correlated_radius_km
                .unwrap_or(defaults.correlated_radius_km()),
            args.min_density.unwrap_or(defaults.min_density()),
            args.min_income.unwrap_or(defaults.min_income()),
        )?;

        let layers_dir = args.layers_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let businesses = args
            .businesses
            .unwrap_or_else(|| layers_dir.join(DEFAULT_BUSINESSES_FILE));
        let density = args
            .density
            .unwrap_or_else(|| layers_dir.join(DEFAULT_DENSITY_FILE));
        let income = args
            .income
            .unwrap_or_else(|| layers_dir.join(DEFAULT_INCOME_FILE));
        let roads = args
            .roads
            .unwrap_or_else(|| layers_dir.join(DEFAULT_ROADS_FILE));

        Ok(Self {
            site,
            thresholds,
            businesses,
            density,
            income,
            roads,
            density_property: args
                .density_property
                .unwrap_or_else(|| DEFAULT_DENSITY_PROPERTY.to_owned()),
            income_property: args
                .income_property
                .unwrap_or_else(|| DEFAULT_INCOME_PROPERTY.to_owned()),
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

/// Score the configured site and write the report to `--output`, or to
/// `stdout` when no output file is set.
pub(crate) fn run_score_with(args: ScoreArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let report = execute_score(&config)?;
    match &config.output {
        Some(path) => write_report_file(path, &report, config.format),
        None => write_report(stdout, &report, config.format),
    }
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let layers = config.layer_source().load()?;
    debug!(
        businesses = layers.businesses().len(),
        roads = layers.roads().len(),
        "loaded site layers"
    );
    let measurements = measure_site(config.site, &layers, &config.thresholds)?;
    let scores = measurements.score(&config.thresholds);
    let competitors = competitors_within(
        config.site,
        layers.businesses(),
        config.thresholds.competitor_radius_km(),
    );
    let correlated = correlated_within(
        config.site,
        layers.businesses(),
        config.thresholds.correlated_radius_km(),
    );
    info!(
        latitude = config.site.latitude,
        longitude = config.site.longitude,
        final_score = scores.final_score(),
        "scored site"
    );
    Ok(ScoreReport {
        site: config.site,
        thresholds: config.thresholds,
        scores,
        measurements,
        competitors,
        correlated,
    })
}

fn write_report_file(
    path: &Utf8Path,
    report: &ScoreReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    let create_error = |source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    };
    fs::ensure_parent_dir(path).map_err(create_error)?;
    let file = fs::create_file(path).map_err(create_error)?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, report, format)?;
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
