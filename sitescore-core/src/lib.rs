//! Core domain types for scoring candidate supermarket sites.
//!
//! A candidate site is scored against five criteria: nearby competitors,
//! nearby correlated businesses, population density, income, and road
//! accessibility. Each criterion yields a sub-score in `0.0..=10.0`; the
//! final score is their unweighted mean.
//!
//! The crate works over read-only, pre-loaded layers bundled in
//! [`SiteLayers`]. Loading those layers from files is the job of a
//! [`LayerSource`] implementation such as the one in `sitescore-data`;
//! [`LayerCache`] keeps a loaded snapshot around until it is refreshed.
//!
//! # Examples
//!
//! ```
//! use sitescore_core::{
//!     Business, BusinessKind, RoadLayer, SiteLayers, SitePoint, Thresholds, ZoneLayer,
//!     score_site,
//! };
//!
//! let layers = SiteLayers::new(
//!     vec![Business::new("Corner Bakery", BusinessKind::Bakery, 0.0, 0.001)],
//!     ZoneLayer::default(),
//!     ZoneLayer::default(),
//!     RoadLayer::default(),
//! );
//! let site = SitePoint::new(0.0, 0.0);
//!
//! // Without qualifying roads accessibility is unknown, so scoring refuses.
//! assert!(score_site(site, &layers, &Thresholds::default()).is_err());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod access;
pub mod business;
pub mod cache;
mod error;
pub mod layer;
pub mod point;
pub mod projection;
pub mod road;
pub mod score;
pub mod site;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use access::{RoadIndex, nearest_road_distance};
pub use business::{Business, BusinessKind};
pub use cache::{LayerCache, LayerSource};
pub use error::{RoadError, ScoreError, SitePointError, ThresholdError};
pub use layer::{Zone, ZoneKey, ZoneLayer};
pub use point::SitePoint;
pub use road::{ACCESS_ROAD_CLASSES, Road, RoadClass, RoadLayer};
pub use score::{
    Criterion, NearbyBusiness, ScoreCard, SiteMeasurements, Thresholds, accessibility_score,
    competitor_score, competitors_within, correlated_score, correlated_within, density_score,
    income_score, measure_site, score_site,
};
pub use site::SiteLayers;
