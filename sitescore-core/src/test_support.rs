//! Test-only builders and an in-memory `LayerSource` used by unit and
//! behaviour tests.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use geo::{LineString, MultiPolygon, Rect};

use crate::{
    Business, BusinessKind, LayerSource, Road, RoadClass, RoadLayer, SiteLayers, Zone, ZoneKey,
    ZoneLayer, projection::EARTH_RADIUS_M,
};

/// Axis-aligned square zone with its south-west corner at `(x, y)`.
#[expect(clippy::float_arithmetic, reason = "corner offsets are additions")]
pub fn square_zone(key: u64, x: f64, y: f64, size: f64, value: Option<f64>) -> Zone {
    let rect = Rect::new((x, y), (x + size, y + size));
    Zone::new(
        ZoneKey(key),
        MultiPolygon::new(vec![rect.to_polygon()]),
        value,
    )
}

/// Secondary road through `(longitude, latitude)` vertices.
///
/// # Panics
/// Panics when fewer than two vertices are supplied.
#[expect(clippy::panic, reason = "test helpers fail fast on bad fixtures")]
pub fn secondary_road(vertices: &[(f64, f64)]) -> Road {
    let line = LineString::from(vertices.to_vec());
    match Road::new(RoadClass::Secondary, line) {
        Ok(road) => road,
        Err(err) => panic!("invalid test road: {err}"),
    }
}

/// Longitude lying `metres` east of `longitude` along the equator, measured
/// in Web Mercator metres.
#[expect(clippy::float_arithmetic, reason = "converts metres to degrees")]
pub fn metres_east(longitude: f64, metres: f64) -> f64 {
    longitude + (metres / EARTH_RADIUS_M).to_degrees()
}

/// `count` businesses of `kind` clustered a few metres north of the origin.
#[expect(clippy::float_arithmetic, reason = "spreads businesses along a meridian")]
pub fn businesses_near_origin(kind: &BusinessKind, count: usize) -> Vec<Business> {
    (0..count)
        .map(|n| {
            let offset = f64::from(u32::try_from(n).unwrap_or(u32::MAX)) * 0.000_01;
            Business::new(format!("{kind} {n}"), kind.clone(), offset, 0.0)
        })
        .collect()
}

/// In-memory `LayerSource` that counts how often it is loaded.
///
/// Every load returns a supermarket next to the origin, one square density
/// zone and one secondary road along the prime meridian.
#[derive(Debug, Default)]
pub struct MemorySource {
    loads: AtomicUsize,
}

impl MemorySource {
    /// Number of completed loads.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl LayerSource for MemorySource {
    type Error = Infallible;

    fn load(&self) -> Result<SiteLayers, Self::Error> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(SiteLayers::new(
            vec![Business::new(
                "Origin Mart",
                BusinessKind::Supermarket,
                0.0,
                0.001,
            )],
            ZoneLayer::new(vec![square_zone(0, -1.0, -1.0, 2.0, Some(5000.0))]),
            ZoneLayer::default(),
            [secondary_road(&[(0.0, -1.0), (0.0, 1.0)])]
                .into_iter()
                .collect::<RoadLayer>(),
        ))
    }
}
