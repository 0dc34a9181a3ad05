mod diagnostic_log;
mod route_error;
mod route_feature;
mod stop_name_table;

pub use diagnostic_log::{DiagnosticLog, LogEntry};
pub use route_error::{RouteError, RouteErrorRecord};
pub use route_feature::RouteFeature;
pub use stop_name_table::StopNameTable;
