pub mod geo_ops;
pub mod ref_ordering;
