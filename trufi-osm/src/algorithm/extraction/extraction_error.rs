use crate::model::osm::element::{OsmRelationId, OsmWayId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("relation has no way members")]
    NoWays,
    #[error("way {0} is not present in the way lookup")]
    MissingWay(OsmWayId),
    #[error("way {0} has no resolved geometry")]
    MissingGeometry(OsmWayId),
    #[error("way {0} has {1} nodes but {2} coordinates")]
    MisalignedGeometry(OsmWayId, usize, usize),
    #[error("relation {relation}: way {way} does not connect to the preceding ways")]
    Disconnected {
        relation: OsmRelationId,
        way: OsmWayId,
    },
}
