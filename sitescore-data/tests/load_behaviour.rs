//! Behavioural coverage for loading and refreshing file-backed layers.

use std::{cell::RefCell, fmt::Write as _, sync::Arc};

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sitescore_core::{LayerCache, SiteLayers};
use sitescore_data::{
    DEFAULT_BUSINESSES_FILE, DEFAULT_DENSITY_FILE, DEFAULT_INCOME_FILE, DEFAULT_ROADS_FILE,
    FileLayerSource, LoadError,
};
use tempfile::TempDir;

const EMPTY_COLLECTION: &str = r#"{"type": "FeatureCollection", "features": []}"#;

const ONE_ROAD: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "highway": "secondary" },
      "geometry": { "type": "LineString", "coordinates": [[-49.058, -22.32], [-49.058, -22.31]] }
    }
  ]
}"#;

/// Layer directory plus the cache and outcome under test.
pub struct LoadWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    cache: LayerCache<FileLayerSource>,
    result: RefCell<Option<Result<Arc<SiteLayers>, LoadError>>>,
}

impl LoadWorld {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 temp dir {}", path.display()));
        let cache = LayerCache::new(FileLayerSource::in_dir(&root));
        Self {
            _tmp: tmp,
            root,
            cache,
            result: RefCell::new(None),
        }
    }

    fn write(&self, name: &str, contents: &str) {
        let path = self.root.join(name);
        std::fs::write(&path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
    }

    fn write_businesses(&self, count: u32) {
        let mut csv = String::from("name,type,latitude,longitude\n");
        for n in 0..count {
            writeln!(csv, "Shop {n},supermarket,-22.31{n},-49.058")
                .unwrap_or_else(|err| panic!("format row: {err}"));
        }
        self.write(DEFAULT_BUSINESSES_FILE, &csv);
    }

    fn layers(&self) -> Arc<SiteLayers> {
        match self.result.borrow().as_ref() {
            Some(Ok(layers)) => Arc::clone(layers),
            Some(Err(err)) => panic!("loading failed: {err}"),
            None => panic!("loading must be attempted"),
        }
    }
}

/// Fresh layer directory for each scenario.
#[fixture]
pub fn world() -> LoadWorld {
    LoadWorld::new()
}

#[given("a layer directory with {businesses:u32} businesses and 1 qualifying road")]
fn layer_directory(world: &LoadWorld, businesses: u32) {
    world.write_businesses(businesses);
    world.write(DEFAULT_DENSITY_FILE, EMPTY_COLLECTION);
    world.write(DEFAULT_INCOME_FILE, EMPTY_COLLECTION);
    world.write(DEFAULT_ROADS_FILE, ONE_ROAD);
}

#[given("the road layer has been deleted")]
fn delete_roads(world: &LoadWorld) {
    std::fs::remove_file(world.root.join(DEFAULT_ROADS_FILE))
        .unwrap_or_else(|err| panic!("remove roads: {err}"));
}

#[given("the layers have been loaded into a cache")]
fn prime_cache(world: &LoadWorld) {
    if let Err(err) = world.cache.layers() {
        panic!("initial load failed: {err}");
    }
}

#[when("I load the layers")]
fn load_layers(world: &LoadWorld) {
    *world.result.borrow_mut() = Some(world.cache.layers());
}

#[when("the business listing gains a supermarket")]
fn add_supermarket(world: &LoadWorld) {
    world.write_businesses(3);
    let cached = world
        .cache
        .layers()
        .unwrap_or_else(|err| panic!("cached layers: {err}"));
    assert_eq!(cached.businesses().len(), 2, "cache must not reload on its own");
}

#[when("I refresh the cache")]
fn refresh(world: &LoadWorld) {
    *world.result.borrow_mut() = Some(world.cache.refresh());
}

#[then("{count:usize} businesses are loaded")]
fn businesses_loaded(world: &LoadWorld, count: usize) {
    assert_eq!(world.layers().businesses().len(), count);
}

#[then("{count:usize} road is loaded")]
fn roads_loaded(world: &LoadWorld, count: usize) {
    assert_eq!(world.layers().roads().len(), count);
}

#[then("loading fails to open the road layer")]
fn roads_missing(world: &LoadWorld) {
    let outcome = world.result.borrow();
    match outcome.as_ref() {
        Some(Err(LoadError::Open { path, .. })) => {
            assert_eq!(path, &world.root.join(DEFAULT_ROADS_FILE));
        }
        Some(Err(other)) => panic!("expected Open error, got {other}"),
        Some(Ok(_)) => panic!("expected loading to fail"),
        None => panic!("loading must be attempted"),
    }
}

#[scenario(path = "tests/features/layer_loading.feature", index = 0)]
fn complete_directory(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/layer_loading.feature", index = 1)]
fn missing_road_layer(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/layer_loading.feature", index = 2)]
fn refresh_after_edit(world: LoadWorld) {
    let _ = world;
}
