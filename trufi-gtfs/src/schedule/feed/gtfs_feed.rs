use super::{
    AgencyRow, FareAttributeRow, FareRuleRow, FeedInfoRow, FrequencyRow, RoutePlan, RouteRow,
    ShapeRow, StopTimeRow, TripRow,
};
use crate::schedule::{calendar::CalendarRow, stops::StopRow};

/// the complete GTFS table set of a build, plus the per-route plans it was
/// derived from.
#[derive(Debug, Clone, Default)]
pub struct GtfsFeed {
    pub agency: Vec<AgencyRow>,
    pub calendar: Vec<CalendarRow>,
    pub routes: Vec<RouteRow>,
    pub trips: Vec<TripRow>,
    pub frequencies: Vec<FrequencyRow>,
    pub stops: Vec<StopRow>,
    pub stop_times: Vec<StopTimeRow>,
    pub shapes: Vec<ShapeRow>,
    pub fare_attributes: Vec<FareAttributeRow>,
    pub fare_rules: Vec<FareRuleRow>,
    pub feed_info: Vec<FeedInfoRow>,
    pub plans: Vec<RoutePlan>,
}
