use serde::{Deserialize, Serialize};
use trufi_osm::model::osm::element::OsmNodeId;

/// a row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRow {
    pub stop_id: OsmNodeId,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}
