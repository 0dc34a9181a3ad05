use super::{build, summarize_feed, write_outputs};
use crate::{
    config::{BuilderConfig, ConfiguredHooks, OutputFiles},
    GtfsBuildError,
};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trufi_osm::{
    algorithm::extraction::WayStitcher,
    model::osm::source::{OsmDataSource, OverpassJsonSource, PbfSource},
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GtfsOperation {
    /// build GTFS and trip planner outputs from an OSM extract
    Build {
        /// Overpass API JSON dump queried with `out geom`
        #[arg(long, conflicts_with = "pbf_file")]
        overpass_file: Option<String>,
        /// .osm.pbf extract
        #[arg(long)]
        pbf_file: Option<String>,
        /// .toml or .json file with builder settings
        #[arg(long)]
        configuration_file: Option<String>,
        /// recreated on every run
        #[arg(long, default_value_t = String::from("out"))]
        output_directory: String,
        /// write gtfs/<table>.txt
        #[arg(long)]
        gtfs: bool,
        /// write <city_name>.gtfs.zip, requires --gtfs
        #[arg(long)]
        zip: bool,
        /// write routes/<id>.geojson
        #[arg(long)]
        routes: bool,
        /// write log.json
        #[arg(long)]
        log: bool,
        /// write stops.json
        #[arg(long)]
        stops: bool,
        /// write trufiTPData/
        #[arg(long)]
        trip_planner: bool,
        /// write README.md with route outcomes
        #[arg(long)]
        readme: bool,
    },
    /// count the entities of a GTFS directory or zip archive
    Summary {
        #[arg(long)]
        gtfs_file: String,
    },
    /// print the default builder configuration as TOML
    DefaultConfig,
}

impl GtfsOperation {
    pub fn run(&self) -> Result<(), GtfsBuildError> {
        match self {
            GtfsOperation::Build {
                overpass_file,
                pbf_file,
                configuration_file,
                output_directory,
                gtfs,
                zip,
                routes,
                log: write_log,
                stops,
                trip_planner,
                readme,
            } => {
                let conf = match configuration_file {
                    None => Ok(BuilderConfig::default()),
                    Some(f) => {
                        log::info!("reading builder configuration from {f}");
                        BuilderConfig::try_from(f)
                    }
                }?;
                let outputs = OutputFiles {
                    output_directory: PathBuf::from(output_directory),
                    gtfs: *gtfs,
                    zip: *zip,
                    routes: *routes,
                    log: *write_log,
                    stops: *stops,
                    trip_planner: *trip_planner,
                    readme: *readme,
                };
                outputs.validate()?;

                let source: Option<Box<dyn OsmDataSource>> = match (overpass_file, pbf_file) {
                    (Some(f), _) => Some(Box::new(OverpassJsonSource::new(f))),
                    (None, Some(f)) => Some(Box::new(PbfSource::new(f))),
                    (None, None) => None,
                };
                let city_name = conf.city_name.clone();
                let hooks = ConfiguredHooks::new(conf);
                let result = build(
                    source.as_deref(),
                    &WayStitcher,
                    &hooks,
                    outputs.requires_gtfs(),
                    outputs.trip_planner,
                )?;
                write_outputs(&result, &outputs, &city_name)?;
                eprintln!("finished.");
                Ok(())
            }
            GtfsOperation::Summary { gtfs_file } => {
                let summary = summarize_feed(gtfs_file)?;
                println!("{gtfs_file}: {summary}");
                Ok(())
            }
            GtfsOperation::DefaultConfig => {
                let toml = toml::to_string_pretty(&BuilderConfig::default()).map_err(|e| {
                    GtfsBuildError::ConfigurationError(format!(
                        "failure encoding default configuration: {e}"
                    ))
                })?;
                println!("{toml}");
                Ok(())
            }
        }
    }
}
