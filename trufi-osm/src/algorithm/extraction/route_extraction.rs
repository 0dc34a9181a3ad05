use crate::model::osm::element::{OsmNode, OsmNodeId};
use geo::Coord;
use std::collections::BTreeMap;

/// the stitched path of one route relation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteExtraction {
    /// node ids along the path, aligned with `points`.
    pub nodes: Vec<OsmNodeId>,
    pub points: Vec<Coord<f64>>,
    /// stop nodes attached to the relation, in relation order.
    pub route_stops: Vec<OsmNode>,
    /// stop names observed by this route, keyed by path node.
    pub stop_names: BTreeMap<OsmNodeId, Vec<String>>,
}
