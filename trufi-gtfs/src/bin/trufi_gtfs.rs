//! builds GTFS feeds and Trufi trip planner data from OpenStreetMap public
//! transport route relations.
use clap::Parser;
use trufi_gtfs::app::GtfsApp;

fn main() {
    env_logger::init();
    let args = GtfsApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("trufi-gtfs failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
