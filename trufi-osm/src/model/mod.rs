pub mod osm;
pub mod route;
