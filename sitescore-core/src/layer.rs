//! Polygon layers carrying one scalar attribute per zone.
//!
//! Density and income are both modelled as a [`ZoneLayer`]. Zones may
//! overlap; lookups return the attribute of the first containing zone in
//! ascending [`ZoneKey`] order, so a given layer and point always agree.

use geo::{Contains, MultiPolygon, Point};

/// Stable ordering key of a zone inside its layer.
///
/// Loaders use the feature's ordinal position in the source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneKey(pub u64);

/// One polygon of a zone layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Ordering key within the layer.
    pub key: ZoneKey,
    /// Zone outline in WGS84 degrees.
    pub geometry: MultiPolygon<f64>,
    /// Attribute value; `None` when the source had no usable value.
    pub value: Option<f64>,
}

impl Zone {
    /// Construct a zone.
    #[must_use]
    pub const fn new(key: ZoneKey, geometry: MultiPolygon<f64>, value: Option<f64>) -> Self {
        Self {
            key,
            geometry,
            value,
        }
    }

    /// Attribute value with a missing value read as `0.0`.
    #[must_use]
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Read-only collection of zones kept sorted by [`ZoneKey`].
///
/// # Examples
/// ```
/// use geo::{MultiPolygon, Point, Rect};
/// use sitescore_core::{Zone, ZoneKey, ZoneLayer};
///
/// let square = |x0: f64, value: f64, key: u64| {
///     let rect = Rect::new((x0, 0.0), (x0 + 1.0, 1.0));
///     Zone::new(ZoneKey(key), MultiPolygon::new(vec![rect.to_polygon()]), Some(value))
/// };
/// let layer = ZoneLayer::new(vec![square(0.0, 10.0, 1), square(5.0, 20.0, 0)]);
///
/// assert_eq!(layer.attribute_at(Point::new(0.5, 0.5)), 10.0);
/// assert_eq!(layer.attribute_at(Point::new(5.5, 0.5)), 20.0);
/// assert_eq!(layer.attribute_at(Point::new(3.0, 0.5)), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneLayer {
    zones: Vec<Zone>,
}

impl ZoneLayer {
    /// Build a layer, ordering zones by key.
    ///
    /// The sort is stable, so zones sharing a key keep their input order.
    #[must_use]
    pub fn new(mut zones: Vec<Zone>) -> Self {
        zones.sort_by_key(|zone| zone.key);
        Self { zones }
    }

    /// Zones in lookup order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of zones in the layer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the layer holds no zones.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// First zone, in key order, whose interior contains `point`.
    ///
    /// Points exactly on a zone boundary are not contained.
    #[must_use]
    pub fn containing_zone(&self, point: Point<f64>) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|zone| zone.geometry.contains(&point))
    }

    /// Attribute at `point`; `0.0` when no zone contains it or the
    /// containing zone has no value.
    #[must_use]
    pub fn attribute_at(&self, point: Point<f64>) -> f64 {
        self.containing_zone(point).map_or(0.0, Zone::value_or_zero)
    }
}

impl FromIterator<Zone> for ZoneLayer {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
