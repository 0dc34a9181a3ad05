mod classification_ops;
mod classified_routes;

pub use classification_ops::{classify_routes, osm_to_features};
pub use classified_routes::ClassifiedRoutes;
