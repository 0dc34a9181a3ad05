pub mod element;
mod osm_data;
mod osm_error;
pub mod source;

pub use osm_data::OsmData;
pub use osm_error::OsmError;
