//! Road geometries and their OpenStreetMap `highway` classes.

use geo::{CoordsIter, LineString};

use crate::RoadError;

/// Road classes that count towards accessibility by default.
pub const ACCESS_ROAD_CLASSES: [RoadClass; 2] = [RoadClass::Secondary, RoadClass::Tertiary];

/// OpenStreetMap `highway` classification.
///
/// # Examples
/// ```
/// use sitescore_core::RoadClass;
///
/// let class: RoadClass = "tertiary".parse().unwrap_or(RoadClass::Primary);
/// assert_eq!(class, RoadClass::Tertiary);
/// assert_eq!(RoadClass::Other("track".into()).as_str(), "track");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoadClass {
    /// `motorway`.
    Motorway,
    /// `trunk`.
    Trunk,
    /// `primary`.
    Primary,
    /// `secondary`.
    Secondary,
    /// `tertiary`.
    Tertiary,
    /// `residential`.
    Residential,
    /// `unclassified`.
    Unclassified,
    /// `service`.
    Service,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl RoadClass {
    /// Return the OSM tag for this class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Motorway => "motorway",
            Self::Trunk => "trunk",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Residential => "residential",
            Self::Unclassified => "unclassified",
            Self::Service => "service",
            Self::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoadClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "motorway" => Self::Motorway,
            "trunk" => Self::Trunk,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "tertiary" => Self::Tertiary,
            "residential" => Self::Residential,
            "unclassified" => Self::Unclassified,
            "service" => Self::Service,
            _ => Self::Other(s.to_owned()),
        })
    }
}

/// A road centreline in WGS84 degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    class: RoadClass,
    geometry: LineString<f64>,
}

impl Road {
    /// Construct a road, rejecting geometries with fewer than two vertices.
    ///
    /// # Errors
    /// Returns [`RoadError::Degenerate`] when the line string cannot form a
    /// segment.
    ///
    /// # Examples
    /// ```
    /// use geo::LineString;
    /// use sitescore_core::{Road, RoadClass, RoadError};
    ///
    /// let line = LineString::from(vec![(0.0, 0.0), (0.0, 1.0)]);
    /// assert!(Road::new(RoadClass::Secondary, line).is_ok());
    ///
    /// let point = LineString::from(vec![(0.0, 0.0)]);
    /// assert_eq!(
    ///     Road::new(RoadClass::Secondary, point),
    ///     Err(RoadError::Degenerate { count: 1 }),
    /// );
    /// ```
    pub fn new(class: RoadClass, geometry: LineString<f64>) -> Result<Self, RoadError> {
        let count = geometry.coords_count();
        if count < 2 {
            return Err(RoadError::Degenerate { count });
        }
        Ok(Self { class, geometry })
    }

    /// Road classification.
    #[must_use]
    pub const fn class(&self) -> &RoadClass {
        &self.class
    }

    /// Centreline geometry.
    #[must_use]
    pub const fn geometry(&self) -> &LineString<f64> {
        &self.geometry
    }
}

/// Read-only set of roads eligible for accessibility scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadLayer {
    roads: Vec<Road>,
}

impl RoadLayer {
    /// Wrap roads without filtering.
    #[must_use]
    pub const fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// Keep only roads whose class appears in `accepted`.
    ///
    /// # Examples
    /// ```
    /// use geo::LineString;
    /// use sitescore_core::{ACCESS_ROAD_CLASSES, Road, RoadClass, RoadLayer};
    ///
    /// let line = || LineString::from(vec![(0.0, 0.0), (1.0, 0.0)]);
    /// let roads = [RoadClass::Primary, RoadClass::Tertiary]
    ///     .into_iter()
    ///     .filter_map(|class| Road::new(class, line()).ok());
    /// let layer = RoadLayer::with_classes(roads, &ACCESS_ROAD_CLASSES);
    ///
    /// assert_eq!(layer.len(), 1);
    /// ```
    pub fn with_classes<I>(roads: I, accepted: &[RoadClass]) -> Self
    where
        I: IntoIterator<Item = Road>,
    {
        Self {
            roads: roads
                .into_iter()
                .filter(|road| accepted.contains(road.class()))
                .collect(),
        }
    }

    /// Roads in the layer.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Number of roads.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.roads.len()
    }

    /// Whether the layer holds no roads.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

impl FromIterator<Road> for RoadLayer {
    fn from_iter<I: IntoIterator<Item = Road>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("secondary", RoadClass::Secondary)]
    #[case("tertiary", RoadClass::Tertiary)]
    #[case("track", RoadClass::Other("track".into()))]
    #[case("Secondary", RoadClass::Other("Secondary".into()))]
    #[case("TERTIARY", RoadClass::Other("TERTIARY".into()))]
    fn parses_highway_tags(#[case] tag: &str, #[case] expected: RoadClass) {
        assert_eq!(RoadClass::from_str(tag), Ok(expected));
    }

    #[rstest]
    fn empty_geometry_is_degenerate() {
        let result = Road::new(RoadClass::Secondary, LineString::new(Vec::new()));
        assert_eq!(result, Err(RoadError::Degenerate { count: 0 }));
    }

    #[rstest]
    fn filtering_keeps_accepted_classes_only() {
        let line = LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
        let roads = [
            RoadClass::Secondary,
            RoadClass::Residential,
            RoadClass::Tertiary,
            RoadClass::Other("path".into()),
        ]
        .into_iter()
        .filter_map(|class| Road::new(class, line.clone()).ok());

        let layer = RoadLayer::with_classes(roads, &ACCESS_ROAD_CLASSES);

        let classes: Vec<_> = layer.roads().iter().map(Road::class).cloned().collect();
        assert_eq!(classes, vec![RoadClass::Secondary, RoadClass::Tertiary]);
    }
}
