pub mod app;
pub mod config;
pub mod output;
pub mod planner;
pub mod schedule;

mod gtfs_build_error;

pub use gtfs_build_error::GtfsBuildError;
