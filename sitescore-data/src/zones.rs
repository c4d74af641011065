//! Density and income polygon layers.

use camino::Utf8Path;
use geo::{MultiPolygon, Polygon};
use geojson::Value;
use log::{debug, warn};
use sitescore_core::{Zone, ZoneKey, ZoneLayer};

use crate::{
    LoadError,
    features::{numeric_property, read_feature_collection},
};

fn zone_geometry(value: &Value) -> Option<MultiPolygon<f64>> {
    match value {
        Value::Polygon(_) => Polygon::try_from(value)
            .ok()
            .map(|polygon| MultiPolygon::new(vec![polygon])),
        Value::MultiPolygon(_) => MultiPolygon::try_from(value).ok(),
        _ => None,
    }
}

/// Load a polygon layer from a GeoJSON `FeatureCollection`.
///
/// Each `Polygon` or `MultiPolygon` feature becomes a zone keyed by its
/// position in the collection. The zone's value is read from `attribute`;
/// a missing or non-numeric value is kept as `None` and scores as zero.
/// Features of any other geometry type are skipped.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or is not a GeoJSON
/// `FeatureCollection`.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use sitescore_data::load_zone_layer;
///
/// let density = load_zone_layer(Utf8Path::new("layers/density.geojson"), "densidade")?;
/// println!("{} density zones", density.len());
/// # Ok::<(), sitescore_data::LoadError>(())
/// ```
pub fn load_zone_layer(path: &Utf8Path, attribute: &str) -> Result<ZoneLayer, LoadError> {
    let collection = read_feature_collection(path)?;
    let mut zones = Vec::with_capacity(collection.features.len());
    for (ordinal, feature) in (0_u64..).zip(&collection.features) {
        let Some(geometry) = feature
            .geometry
            .as_ref()
            .and_then(|geometry| zone_geometry(&geometry.value))
        else {
            warn!("Skipped feature {ordinal} in {path}: geometry is not a polygon");
            continue;
        };
        let value = numeric_property(feature.property(attribute));
        if value.is_none() {
            debug!("Feature {ordinal} in {path} has no numeric `{attribute}`; scoring it as 0");
        }
        zones.push(Zone::new(ZoneKey(ordinal), geometry, value));
    }
    debug!("Loaded {} zones from {path}", zones.len());
    Ok(ZoneLayer::new(zones))
}
