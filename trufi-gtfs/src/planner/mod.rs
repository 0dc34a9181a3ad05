//! trip planner data: the routes with their full stop sequences and the
//! stops shared between them.
mod connectivity_ops;
mod planner_data;

pub use connectivity_ops::build_planner_data;
pub use planner_data::{PlannerConnection, PlannerData, PlannerRoute, PlannerStop, StopRouteRef};
