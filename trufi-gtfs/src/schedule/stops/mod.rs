mod stop_placement;
mod stop_row;
mod thinned_stops;

pub use stop_placement::{fake_route_stops, thin_route, StopPlacement};
pub use stop_row::StopRow;
pub use thinned_stops::ThinnedStops;
