use crate::{
    config::{OutputFiles, RouteHooks},
    output::{self, GtfsWriter},
    planner::{build_planner_data, PlannerData},
    schedule::feed::{build_gtfs, GtfsFeed},
    GtfsBuildError,
};
use std::path::Path;
use trufi_osm::{
    algorithm::{
        classification::{osm_to_features, ClassifiedRoutes},
        extraction::RouteExtractor,
    },
    model::osm::{element::OsmRelation, source::OsmDataSource},
};

/// everything a build derives, before anything is written.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub classified: ClassifiedRoutes,
    pub gtfs: Option<GtfsFeed>,
    pub planner: Option<PlannerData>,
}

/// runs the pipeline in memory: load and classify routes, then derive the
/// GTFS feed and trip planner data when requested. GTFS rejections are added
/// to the classification log.
pub fn build(
    source: Option<&dyn OsmDataSource>,
    extractor: &dyn RouteExtractor,
    hooks: &dyn RouteHooks,
    with_gtfs: bool,
    with_planner: bool,
) -> Result<BuildResult, GtfsBuildError> {
    let config = hooks.config();
    config.validate()?;
    let include = |relation: &OsmRelation| hooks.include_route(relation);
    let mut classified = osm_to_features(
        source,
        &config.transform_types,
        extractor,
        &config.ignored_route_ids,
        &include,
    )?;
    let gtfs = if with_gtfs {
        Some(build_gtfs(
            &classified.features,
            &classified.stop_names,
            hooks,
            &mut classified.log,
        )?)
    } else {
        None
    };
    let planner = if with_planner {
        Some(build_planner_data(&classified.features))
    } else {
        None
    };
    Ok(BuildResult {
        classified,
        gtfs,
        planner,
    })
}

/// writes the selected artifacts. the output directory is deleted and
/// recreated first.
pub fn write_outputs(
    result: &BuildResult,
    outputs: &OutputFiles,
    city_name: &str,
) -> Result<(), GtfsBuildError> {
    outputs.validate()?;
    let out_dir = outputs.output_directory.as_path();
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).map_err(|e| io_error(out_dir, e))?;
    }
    create_dir(out_dir)?;

    if outputs.routes {
        let routes_dir = out_dir.join("routes");
        create_dir(&routes_dir)?;
        output::write_route_geojson(&routes_dir, &result.classified.features)?;
    }
    if outputs.log {
        output::write_json(&out_dir.join("log.json"), &result.classified.log)?;
    }
    if outputs.readme {
        output::write_readme(
            &out_dir.join("README.md"),
            city_name,
            &result.classified.log,
            result.gtfs.as_ref(),
        )?;
    }
    if outputs.stops {
        output::write_json(&out_dir.join("stops.json"), &result.classified.stop_names)?;
    }
    if let (true, Some(feed)) = (outputs.requires_gtfs(), &result.gtfs) {
        let gtfs_dir = out_dir.join("gtfs");
        create_dir(&gtfs_dir)?;
        GtfsWriter::new(&gtfs_dir).write_feed(feed)?;
        if outputs.zip {
            let zip_path = out_dir.join(format!("{city_name}.gtfs.zip"));
            output::zip_directory(&gtfs_dir, &zip_path)?;
        }
    }
    if let (true, Some(planner)) = (outputs.trip_planner, &result.planner) {
        let tp_dir = out_dir.join("trufiTPData");
        create_dir(&tp_dir)?;
        output::write_json(&tp_dir.join("routes.json"), &planner.routes)?;
        output::write_json(&tp_dir.join("stops.json"), &planner.stops)?;
        output::write_json(&tp_dir.join("search.json"), &result.classified.stop_names)?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), GtfsBuildError> {
    std::fs::create_dir(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> GtfsBuildError {
    GtfsBuildError::IoError {
        filepath: path.to_string_lossy().to_string(),
        source,
    }
}
