//! flat records of the GTFS tables written by a build. field names are the
//! GTFS column names.
use super::GtfsRouteType;
use crate::schedule::date_codec;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trufi_osm::model::osm::element::{OsmNodeId, OsmRelationId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyRow {
    pub agency_id: u32,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub route_id: OsmRelationId,
    pub agency_id: u32,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_color: String,
    pub route_type: GtfsRouteType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRow {
    pub route_id: OsmRelationId,
    pub service_id: String,
    pub trip_id: u32,
    pub shape_id: OsmRelationId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub trip_id: u32,
    pub start_time: String,
    pub end_time: String,
    pub headway_secs: u32,
    /// always 1: schedule based, fixed headway departures.
    pub exact_times: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRow {
    pub shape_id: OsmRelationId,
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopTimeRow {
    pub trip_id: u32,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: OsmNodeId,
    pub stop_sequence: usize,
    /// always 0: times come from the travel time model, not a timetable.
    pub timepoint: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareAttributeRow {
    pub fare_id: u32,
    pub price: String,
    pub currency_type: String,
    pub payment_method: u8,
    /// empty: unlimited transfers.
    pub transfers: Option<u8>,
    pub agency_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRuleRow {
    pub fare_id: u32,
    pub route_id: OsmRelationId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedInfoRow {
    pub feed_publisher_name: String,
    pub feed_publisher_url: String,
    pub feed_lang: String,
    pub feed_version: String,
    pub feed_contact_email: String,
    pub feed_contact_url: String,
    #[serde(with = "date_codec::gtfs")]
    pub feed_start_date: NaiveDate,
    #[serde(with = "date_codec::gtfs")]
    pub feed_end_date: NaiveDate,
    pub feed_id: String,
}
