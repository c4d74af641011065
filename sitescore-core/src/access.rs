//! Distance from a candidate site to the nearest qualifying road.
//!
//! Both the site and the roads are projected into Web Mercator before
//! measuring, so distances come out in planar metres. [`nearest_road_distance`]
//! scans every segment; [`RoadIndex`] answers the same question from an
//! R\*-tree of projected segments and is what [`crate::SiteLayers`] holds.

use geo::{Distance, Euclidean, Line, Point};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::{
    RoadLayer, SitePoint,
    projection::{project_line_string, to_web_mercator},
};

fn projected_point(site: SitePoint) -> Point<f64> {
    Point(to_web_mercator(site.to_geo().0))
}

fn projected_segments(roads: &RoadLayer) -> impl Iterator<Item = Line<f64>> + '_ {
    roads
        .roads()
        .iter()
        .flat_map(|road| project_line_string(road.geometry()).lines().collect::<Vec<_>>())
}

fn segment_distance(point: &Point<f64>, segment: &Line<f64>) -> f64 {
    Euclidean.distance(point, segment)
}

/// Minimum planar distance in metres from `site` to any road, scanning every
/// segment.
///
/// Returns `None` when the layer holds no roads.
///
/// # Examples
/// ```
/// use geo::LineString;
/// use sitescore_core::{Road, RoadClass, RoadLayer, SitePoint, nearest_road_distance};
///
/// let road = Road::new(
///     RoadClass::Secondary,
///     LineString::from(vec![(0.0, -1.0), (0.0, 1.0)]),
/// );
/// let layer: RoadLayer = road.into_iter().collect();
///
/// let on_road = nearest_road_distance(SitePoint::new(0.0, 0.0), &layer);
/// assert!(on_road.is_some_and(|metres| metres < 1e-6));
/// assert_eq!(nearest_road_distance(SitePoint::new(0.0, 0.0), &RoadLayer::default()), None);
/// ```
#[must_use]
pub fn nearest_road_distance(site: SitePoint, roads: &RoadLayer) -> Option<f64> {
    let point = projected_point(site);
    projected_segments(roads)
        .map(|segment| segment_distance(&point, &segment))
        .reduce(f64::min)
}

/// Projected road segment stored in the R\*-tree.
#[derive(Debug, Clone, PartialEq)]
struct IndexedSegment {
    line: Line<f64>,
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.line.start.x, self.line.start.y],
            [self.line.end.x, self.line.end.y],
        )
    }
}

impl PointDistance for IndexedSegment {
    #[expect(
        clippy::float_arithmetic,
        reason = "the tree ranks candidates by squared distance"
    )]
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let [x, y] = *point;
        let distance = segment_distance(&Point::new(x, y), &self.line);
        distance * distance
    }
}

/// Spatial index over projected road segments.
///
/// Answers the same query as [`nearest_road_distance`] without visiting
/// every segment.
///
/// # Examples
/// ```
/// use geo::LineString;
/// use sitescore_core::{
///     Road, RoadClass, RoadIndex, RoadLayer, SitePoint, nearest_road_distance,
/// };
///
/// let layer: RoadLayer = [
///     LineString::from(vec![(0.0, 0.0), (0.01, 0.0)]),
///     LineString::from(vec![(1.0, 1.0), (1.0, 1.01)]),
/// ]
/// .into_iter()
/// .filter_map(|line| Road::new(RoadClass::Tertiary, line).ok())
/// .collect();
/// let index = RoadIndex::new(&layer);
/// let site = SitePoint::new(0.005, 0.005);
///
/// assert_eq!(index.nearest_distance(site), nearest_road_distance(site, &layer));
/// ```
#[derive(Debug, Clone)]
pub struct RoadIndex {
    tree: RTree<IndexedSegment>,
}

impl RoadIndex {
    /// Project and index every segment of `roads`.
    #[must_use]
    pub fn new(roads: &RoadLayer) -> Self {
        let segments = projected_segments(roads)
            .map(|line| IndexedSegment { line })
            .collect();
        Self {
            tree: RTree::bulk_load(segments),
        }
    }

    /// Number of indexed segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Minimum planar distance in metres from `site` to any indexed road.
    ///
    /// Returns `None` when nothing is indexed.
    #[must_use]
    pub fn nearest_distance(&self, site: SitePoint) -> Option<f64> {
        let point = projected_point(site);
        self.tree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|segment| segment_distance(&point, &segment.line))
    }
}
