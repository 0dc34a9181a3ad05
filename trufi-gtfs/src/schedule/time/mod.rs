mod clause_normalizer;
pub mod gtfs_time;

pub use clause_normalizer::ClauseNormalizer;
pub(crate) use clause_normalizer::compile_pattern;
