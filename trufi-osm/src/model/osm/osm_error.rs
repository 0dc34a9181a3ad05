use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("no OSM data source configured")]
    MissingDataSource,
    #[error("failure reading '{filepath}': {source}")]
    SourceReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure decoding Overpass JSON from '{filepath}': {source}")]
    OverpassDecodeError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure reading .pbf file: {source}")]
    PbfLibError { source: osmpbf::Error },
}
