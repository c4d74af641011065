//! `LayerSource` over the four layer files.

use camino::{Utf8Path, Utf8PathBuf};
use sitescore_core::{ACCESS_ROAD_CLASSES, LayerSource, RoadClass, SiteLayers};

use crate::{
    DEFAULT_ROAD_CLASS_PROPERTY, LoadError, load_businesses, load_road_layer, load_zone_layer,
};

/// Default business listing file name.
pub const DEFAULT_BUSINESSES_FILE: &str = "businesses.csv";
/// Default density layer file name.
pub const DEFAULT_DENSITY_FILE: &str = "density.geojson";
/// Default income layer file name.
pub const DEFAULT_INCOME_FILE: &str = "income.geojson";
/// Default road layer file name.
pub const DEFAULT_ROADS_FILE: &str = "roads.geojson";
/// Density property used by the census tract layers.
pub const DEFAULT_DENSITY_PROPERTY: &str = "densidade";
/// Income property used by the census tract layers.
pub const DEFAULT_INCOME_PROPERTY: &str = "Categoria";

/// Loads [`SiteLayers`] from a business CSV and three GeoJSON layers.
///
/// # Examples
/// ```no_run
/// use sitescore_core::{LayerCache, SitePoint, Thresholds, score_site};
/// use sitescore_data::FileLayerSource;
///
/// let cache = LayerCache::new(FileLayerSource::in_dir("layers"));
/// let layers = cache.layers()?;
/// let _card = score_site(SitePoint::new(-22.3145, -49.058), &layers, &Thresholds::default());
/// # Ok::<(), sitescore_data::LoadError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayerSource {
    businesses: Utf8PathBuf,
    density: Utf8PathBuf,
    income: Utf8PathBuf,
    roads: Utf8PathBuf,
    density_property: String,
    income_property: String,
    road_class_property: String,
    road_classes: Vec<RoadClass>,
}

impl FileLayerSource {
    /// Source reading the given files with the default property names and
    /// road classes.
    pub fn new(
        businesses: impl Into<Utf8PathBuf>,
        density: impl Into<Utf8PathBuf>,
        income: impl Into<Utf8PathBuf>,
        roads: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            businesses: businesses.into(),
            density: density.into(),
            income: income.into(),
            roads: roads.into(),
            density_property: DEFAULT_DENSITY_PROPERTY.to_owned(),
            income_property: DEFAULT_INCOME_PROPERTY.to_owned(),
            road_class_property: DEFAULT_ROAD_CLASS_PROPERTY.to_owned(),
            road_classes: ACCESS_ROAD_CLASSES.to_vec(),
        }
    }

    /// Source reading the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Utf8Path>) -> Self {
        let root = dir.as_ref();
        Self::new(
            root.join(DEFAULT_BUSINESSES_FILE),
            root.join(DEFAULT_DENSITY_FILE),
            root.join(DEFAULT_INCOME_FILE),
            root.join(DEFAULT_ROADS_FILE),
        )
    }

    /// Read density from `property` instead of the default.
    #[must_use]
    pub fn with_density_property(mut self, property: impl Into<String>) -> Self {
        self.density_property = property.into();
        self
    }

    /// Read income from `property` instead of the default.
    #[must_use]
    pub fn with_income_property(mut self, property: impl Into<String>) -> Self {
        self.income_property = property.into();
        self
    }

    /// Read road classes from `property` instead of `highway`.
    #[must_use]
    pub fn with_road_class_property(mut self, property: impl Into<String>) -> Self {
        self.road_class_property = property.into();
        self
    }

    /// Accept `classes` instead of secondary and tertiary roads.
    #[must_use]
    pub fn with_road_classes(mut self, classes: Vec<RoadClass>) -> Self {
        self.road_classes = classes;
        self
    }

    /// Business listing path.
    #[must_use]
    pub fn businesses_path(&self) -> &Utf8Path {
        &self.businesses
    }

    /// Density layer path.
    #[must_use]
    pub fn density_path(&self) -> &Utf8Path {
        &self.density
    }

    /// Income layer path.
    #[must_use]
    pub fn income_path(&self) -> &Utf8Path {
        &self.income
    }

    /// Road layer path.
    #[must_use]
    pub fn roads_path(&self) -> &Utf8Path {
        &self.roads
    }
}

impl LayerSource for FileLayerSource {
    type Error = LoadError;

    fn load(&self) -> Result<SiteLayers, Self::Error> {
        let businesses = load_businesses(&self.businesses)?;
        let density = load_zone_layer(&self.density, &self.density_property)?;
        let income = load_zone_layer(&self.income, &self.income_property)?;
        let roads = load_road_layer(&self.roads, &self.road_class_property, &self.road_classes)?;
        Ok(SiteLayers::new(businesses, density, income, roads))
    }
}
