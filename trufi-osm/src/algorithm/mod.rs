pub mod classification;
pub mod extraction;
