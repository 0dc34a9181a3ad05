use crate::GtfsBuildError;
use geojson::GeoJson;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use trufi_osm::model::route::RouteFeature;

/// serializes `value` as compact JSON to `filepath`.
pub fn write_json<T: Serialize + ?Sized>(filepath: &Path, value: &T) -> Result<(), GtfsBuildError> {
    let file = File::create(filepath).map_err(|e| GtfsBuildError::IoError {
        filepath: filepath.to_string_lossy().to_string(),
        source: e,
    })?;
    serde_json::to_writer(BufWriter::new(file), value).map_err(|e| GtfsBuildError::JsonError {
        filepath: filepath.to_string_lossy().to_string(),
        source: e,
    })
}

/// writes `<directory>/<route id>.geojson` for every route.
pub fn write_route_geojson(
    directory: &Path,
    features: &[RouteFeature],
) -> Result<(), GtfsBuildError> {
    for feature in features.iter() {
        let filepath = directory.join(format!("{}.geojson", feature.id));
        let geojson = GeoJson::from(feature.to_geojson());
        write_json(&filepath, &geojson)?;
    }
    log::info!(
        "wrote {} route files to {}",
        features.len(),
        directory.display()
    );
    Ok(())
}
