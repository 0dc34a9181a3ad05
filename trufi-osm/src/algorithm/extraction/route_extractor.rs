use super::{ExtractionError, RouteExtraction};
use crate::model::osm::element::{OsmNodes, OsmRelation, OsmWays};

/// turns a route relation and the way/stop lookups into one continuous
/// ordered path.
pub trait RouteExtractor {
    fn extract(
        &self,
        relation: &OsmRelation,
        ways: &OsmWays,
        stops: &OsmNodes,
    ) -> Result<RouteExtraction, ExtractionError>;
}
