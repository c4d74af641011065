//! Shared GeoJSON reading.

use std::io::BufReader;

use camino::Utf8Path;
use geojson::{FeatureCollection, GeoJson, JsonValue};

use crate::{LoadError, fs::open_file};

/// Read `path` as a GeoJSON `FeatureCollection`.
pub(crate) fn read_feature_collection(path: &Utf8Path) -> Result<FeatureCollection, LoadError> {
    let file = open_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let document =
        GeoJson::from_reader(BufReader::new(file)).map_err(|source| LoadError::ParseGeoJson {
            path: path.to_path_buf(),
            source: Box::new(geojson::Error::from(source)),
        })?;
    FeatureCollection::try_from(document).map_err(|source| LoadError::NotFeatureCollection {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Read a numeric property, accepting JSON numbers and numeric strings.
///
/// Missing, null, and unparseable values all yield `None`, as do values that
/// are not finite.
pub(crate) fn numeric_property(value: Option<&JsonValue>) -> Option<f64> {
    let number = match value? {
        JsonValue::Number(number) => number.as_f64(),
        JsonValue::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Read a string property, rendering numbers as text.
pub(crate) fn text_property(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(text) => Some(text.clone()),
        JsonValue::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(4200), Some(4200.0))]
    #[case(json!(12.5), Some(12.5))]
    #[case(json!(" 1500.25 "), Some(1500.25))]
    #[case(json!("n/a"), None)]
    #[case(json!("NaN"), None)]
    #[case(json!(null), None)]
    #[case(json!(true), None)]
    fn parses_numeric_properties(#[case] value: JsonValue, #[case] expected: Option<f64>) {
        assert_eq!(numeric_property(Some(&value)), expected);
    }

    #[rstest]
    fn missing_property_is_none() {
        assert_eq!(numeric_property(None), None);
        assert_eq!(text_property(None), None);
    }
}
