use crate::{algorithm::extraction::ExtractionError, model::osm::element::OsmRelationId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// failures that exclude a single route from every output while the run
/// continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("route has no ref tag")]
    NoRefDefined,
    #[error("failure stitching route geometry: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("clause '{clause}' of opening hours is not a valid service window")]
    InvalidOpeningHours { clause: String },
    #[error("transport mode '{mode}' has no GTFS route type")]
    UnsupportedRouteType { mode: String },
}

impl RouteError {
    /// stable identifier written to the diagnostic log.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::NoRefDefined => "no_ref_defined",
            RouteError::Extraction(_) => "extraction_failed",
            RouteError::InvalidOpeningHours { .. } => "invalid_opening_hours",
            RouteError::UnsupportedRouteType { .. } => "unsupported_route_type",
        }
    }

    pub fn to_record(&self, route_id: OsmRelationId) -> RouteErrorRecord {
        RouteErrorRecord {
            kind: String::from(self.kind()),
            message: self.to_string(),
            uri: overpass_turbo_uri(self.kind(), route_id),
        }
    }
}

/// serialized form of a [`RouteError`] in the diagnostic log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteErrorRecord {
    pub kind: String,
    pub message: String,
    /// overpass turbo link that loads the offending relation.
    pub uri: String,
}

fn overpass_turbo_uri(kind: &str, route_id: OsmRelationId) -> String {
    format!("https://overpass-turbo.eu/?Q=//{kind}%0Arel({route_id});out%20geom;&R")
}
