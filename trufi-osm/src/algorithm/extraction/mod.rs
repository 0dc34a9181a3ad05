mod extraction_error;
mod route_extraction;
mod route_extractor;
mod way_stitcher;

pub use extraction_error::ExtractionError;
pub use route_extraction::RouteExtraction;
pub use route_extractor::RouteExtractor;
pub use way_stitcher::WayStitcher;
