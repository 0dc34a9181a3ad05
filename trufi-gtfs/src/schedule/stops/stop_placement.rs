use super::{StopRow, ThinnedStops};
use crate::config::RouteHooks;
use std::collections::HashSet;
use trufi_osm::{
    model::{
        osm::element::OsmNodeId,
        route::{RouteFeature, StopNameTable},
    },
    util::geo_ops,
};

/// collects the global stop table while placing each route's stops. a node
/// shared by several routes is emitted once, named by the first route that
/// places it.
#[derive(Debug, Clone, Default)]
pub struct StopPlacement {
    stops: Vec<StopRow>,
    seen: HashSet<OsmNodeId>,
    unnamed: usize,
}

impl StopPlacement {
    pub fn new() -> StopPlacement {
        StopPlacement::default()
    }

    /// places the stops of one route, in fake stop mode or by distance
    /// thinning as the hooks decide.
    pub fn place(
        &mut self,
        route: &RouteFeature,
        stop_names: &StopNameTable,
        hooks: &dyn RouteHooks,
        threshold_meters: f64,
    ) -> ThinnedStops {
        if hooks.fake_stops(route) {
            for stop in route.stops.iter() {
                if self.seen.insert(stop.id) {
                    let name = match stop.name().filter(|n| !n.is_empty()) {
                        Some(n) => n.to_string(),
                        None => hooks.stop_name(None),
                    };
                    self.stops.push(StopRow {
                        stop_id: stop.id,
                        stop_name: name,
                        stop_lat: stop.lat,
                        stop_lon: stop.lon,
                    });
                }
            }
            fake_route_stops(route)
        } else {
            let thinned = thin_route(route, threshold_meters);
            for (node, coord) in thinned.iter() {
                if self.seen.insert(*node) {
                    let candidates = stop_names.names(node).filter(|c| !c.is_empty());
                    if candidates.is_none() {
                        self.unnamed += 1;
                    }
                    self.stops.push(StopRow {
                        stop_id: *node,
                        stop_name: hooks.stop_name(candidates),
                        stop_lat: coord.y,
                        stop_lon: coord.x,
                    });
                }
            }
            thinned
        }
    }

    pub fn into_stops(self) -> Vec<StopRow> {
        if self.unnamed > 0 {
            log::warn!(
                "{} of {} stops had no name candidates and use the fallback name",
                self.unnamed,
                self.stops.len()
            );
        }
        self.stops
    }
}

/// walks the route path accumulating great-circle distance and keeps a
/// point whenever the accumulated distance exceeds `threshold_meters`, plus
/// the first and last points. the accumulator resets at every kept point.
pub fn thin_route(route: &RouteFeature, threshold_meters: f64) -> ThinnedStops {
    let mut thinned = ThinnedStops::default();
    let last = route.nodes.len().saturating_sub(1);
    let mut distance = 0.0;
    let mut previous = None;
    for (idx, (node, coord)) in route.nodes.iter().zip(route.coordinates.iter()).enumerate() {
        if let Some(prev) = previous {
            distance += geo_ops::haversine_meters(prev, *coord);
        }
        if distance > threshold_meters || idx == 0 || idx == last {
            thinned.push(*node, *coord);
            distance = 0.0;
        }
        previous = Some(*coord);
    }
    thinned
}

/// the route's attached stop nodes, in relation order.
pub fn fake_route_stops(route: &RouteFeature) -> ThinnedStops {
    let mut thinned = ThinnedStops::default();
    for stop in route.stops.iter() {
        thinned.push(stop.id, stop.coord());
    }
    thinned
}
