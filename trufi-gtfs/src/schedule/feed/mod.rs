mod fare_price;
mod feed_builder;
mod gtfs_feed;
mod gtfs_rows;
mod route_plan;
mod route_type;
mod sequence_counter;
mod travel_time;

pub use fare_price::FarePricer;
pub use feed_builder::build_gtfs;
pub use gtfs_feed::GtfsFeed;
pub use gtfs_rows::{
    AgencyRow, FareAttributeRow, FareRuleRow, FeedInfoRow, FrequencyRow, RouteRow, ShapeRow,
    StopTimeRow, TripRow,
};
pub use route_plan::RoutePlan;
pub use route_type::GtfsRouteType;
pub use sequence_counter::SequenceCounter;
pub use travel_time::stop_times_for_trip;
