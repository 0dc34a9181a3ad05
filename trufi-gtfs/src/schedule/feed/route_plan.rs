use crate::schedule::{calendar::ServiceWindow, stops::ThinnedStops};
use trufi_osm::model::osm::element::OsmRelationId;

/// what the GTFS build derived for one accepted route, kept beside the
/// route instead of on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub route_id: OsmRelationId,
    pub agency_id: u32,
    pub services: Vec<ServiceWindow>,
    /// trip id of each entry in `services`.
    pub trip_ids: Vec<u32>,
    pub thinned_stops: ThinnedStops,
}
