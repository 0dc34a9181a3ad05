mod osm_ids;
mod osm_node;
mod osm_relation;
mod osm_way;

pub use osm_ids::{OsmNodeId, OsmRelationId, OsmWayId};
pub use osm_node::OsmNode;
pub use osm_relation::{OsmMemberType, OsmRelation, OsmRelationMember};
pub use osm_way::OsmWay;

use std::collections::{BTreeMap, HashMap};

/// OSM tags are kept ordered so that anything echoing them (log entries,
/// GeoJSON properties) serializes identically between runs.
pub type OsmTags = BTreeMap<String, String>;

pub type OsmRoutes = BTreeMap<OsmRelationId, OsmRelation>;
pub type OsmWays = HashMap<OsmWayId, OsmWay>;
pub type OsmNodes = HashMap<OsmNodeId, OsmNode>;
