//! Layer directories written to a temporary workspace for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Census tract around the default site with density 6000 and income 1500.
const TRACT: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "densidade": 6000, "Categoria": 1500, "renda": 400 },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-49.07, -22.32], [-49.05, -22.32], [-49.05, -22.30], [-49.07, -22.30], [-49.07, -22.32]]]
      }
    }
  ]
}"#;

/// Secondary road running north to south through the default site.
const ROADS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "highway": "secondary" },
      "geometry": { "type": "LineString", "coordinates": [[-49.058, -22.33], [-49.058, -22.30]] }
    }
  ]
}"#;

/// Two competitors and one pharmacy near the default site.
const BUSINESSES: &str = "\
name,type,latitude,longitude
Super Bom,supermarket,-22.3150,-49.0580
Mercado Dois,supermarket,-22.3100,-49.0580
Farmacia Central,pharmacy,-22.3146,-49.0581
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding the four default layer files.
pub(super) struct LayerFiles {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl LayerFiles {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let files = Self { _tmp: tmp, root };
        write_utf8(&files.path("businesses.csv"), BUSINESSES.as_bytes());
        write_utf8(&files.path("density.geojson"), TRACT.as_bytes());
        write_utf8(&files.path("income.geojson"), TRACT.as_bytes());
        write_utf8(&files.path("roads.geojson"), ROADS.as_bytes());
        files
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}
