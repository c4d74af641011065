//! Candidate site coordinates.

use geo::{Coord, Point};

use crate::SitePointError;

/// A candidate site in WGS84 (EPSG:4326) degrees.
///
/// # Examples
/// ```
/// use sitescore_core::SitePoint;
///
/// let site = SitePoint::new(-22.3145, -49.058);
/// let point = site.to_geo();
///
/// assert_eq!(point.x(), -49.058);
/// assert_eq!(point.y(), -22.3145);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SitePoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl SitePoint {
    /// Construct a point without validating it.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Return the point if both coordinates are finite and in range.
    ///
    /// The scorer itself accepts any coordinates; callers that take user
    /// input use this to reject nonsense before scoring.
    ///
    /// # Errors
    /// Returns [`SitePointError::Latitude`] or [`SitePointError::Longitude`]
    /// for the first coordinate that is out of range.
    ///
    /// # Examples
    /// ```
    /// use sitescore_core::{SitePoint, SitePointError};
    ///
    /// assert!(SitePoint::new(10.0, 20.0).validated().is_ok());
    /// assert_eq!(
    ///     SitePoint::new(91.0, 0.0).validated(),
    ///     Err(SitePointError::Latitude(91.0)),
    /// );
    /// ```
    pub fn validated(self) -> Result<Self, SitePointError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SitePointError::Latitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SitePointError::Longitude(self.longitude));
        }
        Ok(self)
    }

    /// Convert into a `geo` point with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn to_geo(self) -> Point<f64> {
        Point(Coord {
            x: self.longitude,
            y: self.latitude,
        })
    }
}

impl From<SitePoint> for Point<f64> {
    fn from(site: SitePoint) -> Self {
        site.to_geo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(-90.5, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    fn rejects_bad_latitude(#[case] latitude: f64, #[case] longitude: f64) {
        let result = SitePoint::new(latitude, longitude).validated();
        assert!(matches!(result, Err(SitePointError::Latitude(_))));
    }

    #[rstest]
    #[case(0.0, 180.5)]
    #[case(0.0, f64::NEG_INFINITY)]
    fn rejects_bad_longitude(#[case] latitude: f64, #[case] longitude: f64) {
        let result = SitePoint::new(latitude, longitude).validated();
        assert!(matches!(result, Err(SitePointError::Longitude(_))));
    }

    #[rstest]
    fn accepts_boundaries() {
        assert!(SitePoint::new(90.0, -180.0).validated().is_ok());
    }
}
