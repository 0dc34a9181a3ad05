use trufi_osm::model::osm::OsmError;

/// run-fatal failures of a build. route-level problems never surface here,
/// they are recorded in the diagnostic log instead.
#[derive(thiserror::Error, Debug)]
pub enum GtfsBuildError {
    #[error("invalid builder configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    OsmError(#[from] OsmError),
    #[error("failure compiling pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        source: regex::Error,
    },
    #[error("failure writing '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure writing GTFS table '{filepath}': {source}")]
    CsvError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure writing JSON to '{filepath}': {source}")]
    JsonError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure building archive '{filepath}': {source}")]
    ZipError {
        filepath: String,
        source: zip::result::ZipError,
    },
    #[error("failure reading GTFS feed '{filepath}': {source}")]
    GtfsReadError {
        filepath: String,
        source: gtfs_structures::Error,
    },
}
