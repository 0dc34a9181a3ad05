mod gtfs_writer;
mod json_writer;
mod readme_writer;
mod zip_archive;

pub use gtfs_writer::GtfsWriter;
pub use json_writer::{write_json, write_route_geojson};
pub use readme_writer::{render_readme, write_readme};
pub use zip_archive::zip_directory;
