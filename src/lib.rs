//! Facade crate for the supermarket site scorer.
//!
//! This crate re-exports the scoring core and, behind the `files` feature,
//! the GeoJSON and CSV layer loaders.

#![forbid(unsafe_code)]

pub use sitescore_core::{
    ACCESS_ROAD_CLASSES, Business, BusinessKind, Criterion, LayerCache, LayerSource,
    NearbyBusiness, Road, RoadClass, RoadError, RoadIndex, RoadLayer, ScoreCard, ScoreError,
    SiteLayers, SiteMeasurements, SitePoint, SitePointError, ThresholdError, Thresholds, Zone,
    ZoneKey, ZoneLayer, accessibility_score, competitor_score, competitors_within,
    correlated_score, correlated_within, density_score, income_score, measure_site,
    nearest_road_distance, score_site,
};

#[cfg(feature = "files")]
pub use sitescore_data::{FileLayerSource, LoadError};
