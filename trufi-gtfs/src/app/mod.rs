mod build_ops;
mod gtfs_app;
mod operation;
mod summary_ops;

pub use build_ops::{build, write_outputs, BuildResult};
pub use gtfs_app::GtfsApp;
pub use operation::GtfsOperation;
pub use summary_ops::{summarize_feed, FeedSummary};
