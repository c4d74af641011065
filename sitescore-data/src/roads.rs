//! Road centreline layers.

use camino::Utf8Path;
use geo::{LineString, MultiLineString};
use geojson::Value;
use log::{debug, warn};
use sitescore_core::{Road, RoadClass, RoadLayer};

use crate::{
    LoadError,
    features::{read_feature_collection, text_property},
};

/// Property holding the OpenStreetMap road classification.
pub const DEFAULT_ROAD_CLASS_PROPERTY: &str = "highway";

fn line_strings(value: &Value) -> Vec<LineString<f64>> {
    match value {
        Value::LineString(_) => LineString::try_from(value).into_iter().collect(),
        Value::MultiLineString(_) => MultiLineString::try_from(value)
            .map(|lines| lines.0)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Load roads of the `accepted` classes from a GeoJSON `FeatureCollection`.
///
/// The class is read from `class_property`. Features without a class, with
/// a class outside `accepted`, or without line geometry are left out;
/// `MultiLineString` features contribute one road per part. Parts with fewer
/// than two vertices are skipped.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or is not a GeoJSON
/// `FeatureCollection`.
pub fn load_road_layer(
    path: &Utf8Path,
    class_property: &str,
    accepted: &[RoadClass],
) -> Result<RoadLayer, LoadError> {
    let collection = read_feature_collection(path)?;
    let mut roads = Vec::new();
    for (ordinal, feature) in collection.features.iter().enumerate() {
        let Some(tag) = text_property(feature.property(class_property)) else {
            debug!("Skipped feature {ordinal} in {path}: no `{class_property}` tag");
            continue;
        };
        let class = match tag.parse::<RoadClass>() {
            Ok(class) => class,
            Err(never) => match never {},
        };
        if !accepted.contains(&class) {
            continue;
        }
        let lines = feature
            .geometry
            .as_ref()
            .map(|geometry| line_strings(&geometry.value))
            .unwrap_or_default();
        if lines.is_empty() {
            warn!("Skipped feature {ordinal} in {path}: geometry is not a line");
        }
        for line in lines {
            match Road::new(class.clone(), line) {
                Ok(road) => roads.push(road),
                Err(err) => warn!("Skipped part of feature {ordinal} in {path}: {err}"),
            }
        }
    }
    debug!("Loaded {} qualifying roads from {path}", roads.len());
    Ok(RoadLayer::new(roads))
}
