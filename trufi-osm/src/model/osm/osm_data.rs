use super::element::{OsmNodes, OsmRoutes, OsmWays};

/// the three lookups a run works from: route relations (ordered by id), ways
/// with their node geometry, and stop nodes.
#[derive(Debug, Clone, Default)]
pub struct OsmData {
    pub routes: OsmRoutes,
    pub ways: OsmWays,
    pub stops: OsmNodes,
}

impl OsmData {
    pub fn new(routes: OsmRoutes, ways: OsmWays, stops: OsmNodes) -> OsmData {
        OsmData {
            routes,
            ways,
            stops,
        }
    }
}
