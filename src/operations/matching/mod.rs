//! Pairwise comparison of straightened skeleton profiles.
//!
//! Every function here is pure and works on borrowed, immutable paths, so a
//! batch of comparisons can be spread over threads without synchronization.

mod resample;
mod symmetric_difference;

pub use resample::{resample_common_grid, CommonGrid};
pub use symmetric_difference::{diff_features, symmetric_difference_area, DiffFeatures};
