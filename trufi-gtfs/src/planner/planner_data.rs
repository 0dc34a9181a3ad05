use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trufi_osm::model::osm::element::{OsmNodeId, OsmRelationId};

/// a stop shared with another route. `my_stop_index` indexes this route's
/// stops, `other_stop_index` the other route's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConnection {
    #[serde(rename = "route")]
    pub other_route: OsmRelationId,
    #[serde(rename = "mine")]
    pub my_stop_index: usize,
    #[serde(rename = "other")]
    pub other_stop_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerRoute {
    pub id: OsmRelationId,
    /// the route's ref.
    pub name: String,
    /// every node of the route path, in travel order.
    pub stops: Vec<OsmNodeId>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub connections: Vec<PlannerConnection>,
    /// great-circle meters from the first stop, one per stop.
    pub distances: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRouteRef {
    pub route: OsmRelationId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerStop {
    pub id: OsmNodeId,
    pub lng: f64,
    pub lat: f64,
    pub routes: Vec<StopRouteRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerData {
    /// ordered by ref, numeric refs first.
    pub routes: Vec<PlannerRoute>,
    pub stops: BTreeMap<OsmNodeId, PlannerStop>,
}
