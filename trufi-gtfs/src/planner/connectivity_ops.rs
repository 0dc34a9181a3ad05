use super::{PlannerConnection, PlannerData, PlannerRoute, PlannerStop, StopRouteRef};
use kdam::{tqdm, BarExt};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use trufi_osm::{
    model::{osm::element::OsmNodeId, route::RouteFeature},
    util::{geo_ops, ref_ordering},
};

/// builds the trip planner graph from the accepted routes.
///
/// every ordered pair of distinct routes is compared; each node of route A
/// that also appears on route B yields a connection on A pointing at the
/// first position of that node on B. the pair scan runs in parallel and is
/// merged in input order, so the result matches a sequential scan.
pub fn build_planner_data(features: &[RouteFeature]) -> PlannerData {
    let mut stops: BTreeMap<OsmNodeId, PlannerStop> = BTreeMap::new();
    for feature in features.iter() {
        for (index, (node, coord)) in feature
            .nodes
            .iter()
            .zip(feature.coordinates.iter())
            .enumerate()
        {
            stops
                .entry(*node)
                .or_insert_with(|| PlannerStop {
                    id: *node,
                    lng: coord.x,
                    lat: coord.y,
                    routes: vec![],
                })
                .routes
                .push(StopRouteRef {
                    route: feature.id,
                    index,
                });
        }
    }

    let positions: Vec<HashMap<OsmNodeId, usize>> = features
        .iter()
        .map(|f| {
            let mut first_index = HashMap::with_capacity(f.nodes.len());
            for (idx, node) in f.nodes.iter().enumerate() {
                first_index.entry(*node).or_insert(idx);
            }
            first_index
        })
        .collect();

    let bar = Arc::new(Mutex::new(tqdm!(
        total = features.len(),
        desc = "route connections"
    )));
    let connections: Vec<Vec<PlannerConnection>> = features
        .par_iter()
        .enumerate()
        .map(|(i, feature)| {
            let found = connections_for_route(i, feature, features, &positions);
            if let Ok(mut bar) = bar.lock() {
                let _ = bar.update(1);
            }
            found
        })
        .collect();
    eprintln!();

    let mut routes: Vec<PlannerRoute> = features
        .iter()
        .zip(connections)
        .map(|(feature, connections)| PlannerRoute {
            id: feature.id,
            name: feature.reference().unwrap_or_default().to_string(),
            stops: feature.nodes.clone(),
            from: feature.tag("from").map(String::from),
            to: feature.tag("to").map(String::from),
            connections,
            distances: cumulative_distances(feature),
        })
        .collect();
    routes.sort_by(|a, b| ref_ordering::compare_refs(Some(&a.name), Some(&b.name)));

    log::info!(
        "trip planner data: {} routes, {} stops, {} connections",
        routes.len(),
        stops.len(),
        routes.iter().map(|r| r.connections.len()).sum::<usize>()
    );
    PlannerData { routes, stops }
}

fn connections_for_route(
    i: usize,
    feature: &RouteFeature,
    features: &[RouteFeature],
    positions: &[HashMap<OsmNodeId, usize>],
) -> Vec<PlannerConnection> {
    let mut connections = vec![];
    for (j, other) in features.iter().enumerate() {
        if i == j {
            continue;
        }
        for (my_stop_index, node) in feature.nodes.iter().enumerate() {
            if let Some(other_stop_index) = positions[j].get(node) {
                connections.push(PlannerConnection {
                    other_route: other.id,
                    my_stop_index,
                    other_stop_index: *other_stop_index,
                });
            }
        }
    }
    connections
}

fn cumulative_distances(feature: &RouteFeature) -> Vec<f64> {
    let mut total = 0.0;
    let mut distances = Vec::with_capacity(feature.coordinates.len());
    for (idx, coord) in feature.coordinates.iter().enumerate() {
        if idx > 0 {
            total += geo_ops::haversine_meters(feature.coordinates[idx - 1], *coord);
        }
        distances.push(total);
    }
    distances
}
