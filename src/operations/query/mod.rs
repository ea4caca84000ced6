mod features;
pub mod profile;

pub use features::{ExtractFeatures, FeatureRow, ShapeFeatureSet};
