use super::GtfsOperation;
use clap::Parser;

/// command line tool that builds GTFS feeds and trip planner data from
/// OpenStreetMap public transport relations
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GtfsApp {
    #[command(subcommand)]
    pub op: GtfsOperation,
}
