use crate::model::osm::{
    element::{OsmNodes, OsmRoutes, OsmWays},
    OsmData, OsmError,
};

/// provider of raw OSM public transport data. implementations are expected to
/// be pure readers: no filtering beyond selecting route relations by mode.
pub trait OsmDataSource {
    /// route relations whose `route` tag is one of `transform_types`.
    fn routes(&self, transform_types: &[String]) -> Result<OsmRoutes, OsmError>;
    /// ways, with node geometry resolved where possible.
    fn ways(&self) -> Result<OsmWays, OsmError>;
    /// nodes that may act as stops or platforms.
    fn stops(&self) -> Result<OsmNodes, OsmError>;
}

/// pulls all three lookups out of a source. a run without a source cannot
/// proceed, so `None` is reported as [`OsmError::MissingDataSource`].
pub fn load_osm_data(
    source: Option<&dyn OsmDataSource>,
    transform_types: &[String],
) -> Result<OsmData, OsmError> {
    let source = source.ok_or(OsmError::MissingDataSource)?;
    let routes = source.routes(transform_types)?;
    let ways = source.ways()?;
    let stops = source.stops()?;
    log::info!(
        "loaded {} route relations, {} ways, {} stop nodes",
        routes.len(),
        ways.len(),
        stops.len()
    );
    Ok(OsmData::new(routes, ways, stops))
}
