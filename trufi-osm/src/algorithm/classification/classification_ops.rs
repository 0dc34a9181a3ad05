use super::ClassifiedRoutes;
use crate::{
    algorithm::extraction::RouteExtractor,
    model::{
        osm::{
            element::{OsmRelation, OsmRelationId},
            source::{load_osm_data, OsmDataSource},
            OsmData, OsmError,
        },
        route::{DiagnosticLog, RouteError, RouteFeature, StopNameTable},
    },
};
use kdam::tqdm;
use std::collections::HashSet;

/// loads a source and classifies its routes. fails only when the source is
/// missing or unreadable; per-route failures land in the diagnostic log.
pub fn osm_to_features(
    source: Option<&dyn OsmDataSource>,
    transform_types: &[String],
    extractor: &dyn RouteExtractor,
    ignored: &HashSet<OsmRelationId>,
    include: &dyn Fn(&OsmRelation) -> bool,
) -> Result<ClassifiedRoutes, OsmError> {
    let data = load_osm_data(source, transform_types)?;
    Ok(classify_routes(&data, extractor, ignored, include))
}

/// runs each route relation through the filters in order:
///
/// 1. relations in `ignored` are skipped silently
/// 2. relations for which `include` returns false are skipped silently
/// 3. relations without a `ref` tag are rejected
/// 4. relations the extractor cannot stitch are rejected
///
/// accepted routes have consecutive duplicate points removed and contribute
/// their stop name observations to the shared stop name table.
pub fn classify_routes(
    data: &OsmData,
    extractor: &dyn RouteExtractor,
    ignored: &HashSet<OsmRelationId>,
    include: &dyn Fn(&OsmRelation) -> bool,
) -> ClassifiedRoutes {
    let mut features: Vec<RouteFeature> = vec![];
    let mut stop_names = StopNameTable::new();
    let mut log = DiagnosticLog::new();

    let routes_iter = tqdm!(
        data.routes.values(),
        total = data.routes.len(),
        desc = "classify routes"
    );
    for relation in routes_iter {
        if ignored.contains(&relation.id) {
            log::debug!("route {} is on the ignore list", relation.id);
            continue;
        }
        if !include(relation) {
            log::debug!("route {} excluded by include hook", relation.id);
            continue;
        }
        if relation.reference().is_none() {
            log.reject(relation.id, &relation.tags, &RouteError::NoRefDefined);
            continue;
        }
        match extractor.extract(relation, &data.ways, &data.stops) {
            Err(e) => {
                log.reject(relation.id, &relation.tags, &RouteError::from(e));
            }
            Ok(extraction) => {
                log.accept(relation.id, &relation.tags);
                stop_names.merge(&extraction.stop_names);
                features.push(RouteFeature::new(
                    relation.id,
                    relation.tags.clone(),
                    extraction.points,
                    extraction.nodes,
                    extraction.route_stops,
                ));
            }
        }
    }
    eprintln!();

    stop_names.finalize();
    log.sort();
    log::info!(
        "classified {} routes: {} accepted, {} rejected",
        log.len(),
        features.len(),
        log.error_count()
    );
    ClassifiedRoutes {
        features,
        stop_names,
        log,
    }
}
