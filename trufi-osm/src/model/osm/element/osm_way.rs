use super::{OsmNodeId, OsmTags, OsmWayId};
use geo::Coord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmWay {
    pub id: OsmWayId,
    #[serde(default)]
    pub tags: OsmTags,
    pub nodes: Vec<OsmNodeId>,
    /// one coordinate per entry in `nodes`. absent when the source could not
    /// resolve every node reference of this way.
    pub geometry: Option<Vec<Coord<f64>>>,
}

impl OsmWay {
    pub fn first_node(&self) -> Option<&OsmNodeId> {
        self.nodes.first()
    }

    pub fn last_node(&self) -> Option<&OsmNodeId> {
        self.nodes.last()
    }
}
