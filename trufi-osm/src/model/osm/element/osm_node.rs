use super::{OsmNodeId, OsmTags};
use geo::Coord;
use serde::{Deserialize, Serialize};

/// an OSM node as delivered by a data source. only nodes referenced by route
/// relations (stops, platforms) are expected in the stop lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNode {
    pub id: OsmNodeId,
    #[serde(default)]
    pub tags: OsmTags,
    pub lat: f64,
    pub lon: f64,
}

impl OsmNode {
    pub fn new(id: OsmNodeId, lat: f64, lon: f64, tags: OsmTags) -> OsmNode {
        OsmNode { id, tags, lat, lon }
    }

    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }

    /// position as an x=lon, y=lat coordinate
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}
