use crate::GtfsBuildError;
use gtfs_structures::Gtfs;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// entity counts of a GTFS feed, read back with `gtfs_structures`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedSummary {
    pub agencies: usize,
    pub routes: usize,
    pub trips: usize,
    pub stops: usize,
    pub stop_times: usize,
    pub calendars: usize,
    pub shapes: usize,
    pub fares: usize,
}

impl Display for FeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "agencies: {}, routes: {}, trips: {}, stops: {}, stop_times: {}, calendars: {}, shapes: {}, fares: {}",
            self.agencies,
            self.routes,
            self.trips,
            self.stops,
            self.stop_times,
            self.calendars,
            self.shapes,
            self.fares
        )
    }
}

/// reads a GTFS directory or zip archive and counts its entities.
pub fn summarize_feed(path: &str) -> Result<FeedSummary, GtfsBuildError> {
    let gtfs = Gtfs::new(path).map_err(|e| GtfsBuildError::GtfsReadError {
        filepath: String::from(path),
        source: e,
    })?;
    Ok(FeedSummary {
        agencies: gtfs.agencies.len(),
        routes: gtfs.routes.len(),
        trips: gtfs.trips.len(),
        stops: gtfs.stops.len(),
        stop_times: gtfs.trips.values().map(|t| t.stop_times.len()).sum(),
        calendars: gtfs.calendar.len(),
        shapes: gtfs.shapes.len(),
        fares: gtfs.fare_attributes.len(),
    })
}
