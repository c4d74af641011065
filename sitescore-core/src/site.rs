//! The bundle of layers a site is scored against.

use crate::{Business, RoadIndex, RoadLayer, ZoneLayer};

/// Read-only snapshot of every layer the scorer consults.
///
/// Construction indexes the road layer once so repeated queries avoid a
/// linear scan.
#[derive(Debug, Clone)]
pub struct SiteLayers {
    businesses: Vec<Business>,
    density: ZoneLayer,
    income: ZoneLayer,
    roads: RoadLayer,
    road_index: RoadIndex,
}

impl SiteLayers {
    /// Bundle the layers and index the roads.
    ///
    /// `roads` should already be restricted to the accepted road classes.
    #[must_use]
    pub fn new(
        businesses: Vec<Business>,
        density: ZoneLayer,
        income: ZoneLayer,
        roads: RoadLayer,
    ) -> Self {
        let road_index = RoadIndex::new(&roads);
        log::debug!(
            "indexed {} road segments from {} roads",
            road_index.segment_count(),
            roads.len()
        );
        Self {
            businesses,
            density,
            income,
            roads,
            road_index,
        }
    }

    /// Business listing.
    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    /// Population density layer.
    #[must_use]
    pub const fn density(&self) -> &ZoneLayer {
        &self.density
    }

    /// Income layer.
    #[must_use]
    pub const fn income(&self) -> &ZoneLayer {
        &self.income
    }

    /// Qualifying roads.
    #[must_use]
    pub const fn roads(&self) -> &RoadLayer {
        &self.roads
    }

    /// Spatial index over [`Self::roads`].
    #[must_use]
    pub const fn road_index(&self) -> &RoadIndex {
        &self.road_index
    }
}
