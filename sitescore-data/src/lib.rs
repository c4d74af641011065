//! File-backed layer loading for the site scorer.
//!
//! Responsibilities:
//! - Read density and income zones from GeoJSON polygon layers.
//! - Read road centrelines from a GeoJSON line layer, keeping accepted
//!   classes only.
//! - Read the business listing from CSV.
//! - Bundle the four files behind [`FileLayerSource`] so a
//!   [`sitescore_core::LayerCache`] can load and refresh them.
//!
//! Boundaries:
//! - No scoring rules live here (see `sitescore-core`).
//! - Files are opened through `cap-std` with UTF-8 `camino` paths.
//!
//! Invariants:
//! - Zone keys follow feature order in the source file, so reloading the
//!   same file yields the same lookup order.

#![forbid(unsafe_code)]

mod businesses;
mod error;
mod features;
pub mod fs;
mod roads;
mod source;
mod zones;

pub use businesses::load_businesses;
pub use error::LoadError;
pub use roads::{DEFAULT_ROAD_CLASS_PROPERTY, load_road_layer};
pub use source::{
    DEFAULT_BUSINESSES_FILE, DEFAULT_DENSITY_FILE, DEFAULT_DENSITY_PROPERTY, DEFAULT_INCOME_FILE,
    DEFAULT_INCOME_PROPERTY, DEFAULT_ROADS_FILE, FileLayerSource,
};
pub use zones::load_zone_layer;
