//! Spherical Web Mercator (EPSG:3857) projection.
//!
//! Road distances are measured in projected metres rather than degrees.
//! Latitudes are clamped to the projection's valid band before projecting.

use geo::{Coord, LineString, MapCoords};

/// Sphere radius used by EPSG:3857, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Largest latitude representable in Web Mercator, in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Project a WGS84 coordinate (`x = longitude`, `y = latitude`) into
/// Web Mercator metres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescore_core::projection::to_web_mercator;
///
/// let origin = to_web_mercator(Coord { x: 0.0, y: 0.0 });
/// assert!(origin.x.abs() < 1e-6 && origin.y.abs() < 1e-6);
///
/// let east = to_web_mercator(Coord { x: 180.0, y: 0.0 });
/// assert!((east.x - 20_037_508.342_789_244).abs() < 1e-6);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "projection is trigonometry over degrees"
)]
#[must_use]
pub fn to_web_mercator(coord: Coord<f64>) -> Coord<f64> {
    let latitude = coord.y.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS_M * coord.x.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + latitude.to_radians() / 2.0).tan().ln();
    Coord { x, y }
}

/// Project every vertex of a WGS84 line string.
#[must_use]
pub fn project_line_string(line: &LineString<f64>) -> LineString<f64> {
    line.map_coords(to_web_mercator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare projected metres")]
    fn one_degree_of_longitude_at_equator() {
        let projected = to_web_mercator(Coord { x: 1.0, y: 0.0 });
        assert!((projected.x - 111_319.490_793_273_57).abs() < 1e-6);
        assert!(projected.y.abs() < 1e-6);
    }

    #[rstest]
    fn clamps_polar_latitudes() {
        let pole = to_web_mercator(Coord { x: 0.0, y: 90.0 });
        let edge = to_web_mercator(Coord {
            x: 0.0,
            y: MAX_LATITUDE,
        });
        assert!(pole.y.is_finite());
        assert_eq!(pole, edge);
    }

    #[rstest]
    fn southern_latitudes_project_south() {
        let projected = to_web_mercator(Coord { x: -49.0, y: -22.0 });
        assert!(projected.x < 0.0);
        assert!(projected.y < 0.0);
    }
}
