mod osm_data_source;
mod overpass_json_source;
mod pbf_source;

pub use osm_data_source::{load_osm_data, OsmDataSource};
pub use overpass_json_source::OverpassJsonSource;
pub use pbf_source::PbfSource;
